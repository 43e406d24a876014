use tilebound_server::TileSpec;

/// Fluent builder for test boards
pub struct BoardBuilder {
    tiles: Vec<TileSpec>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// `count` identical tiles
    pub fn uniform(count: usize, price: u32, toll: u32) -> Self {
        let mut builder = Self::new();
        for index in 0..count {
            builder = builder.tile(format!("tile-{}", index), price, toll);
        }
        builder
    }

    pub fn tile(mut self, name: impl Into<String>, price: u32, toll: u32) -> Self {
        self.tiles.push(TileSpec::new(name, price, toll));
        self
    }

    pub fn build(self) -> Vec<TileSpec> {
        self.tiles
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::uniform(10, 100, 25)
    }
}
