use tilebound_shared::{FieldSet, FieldValue, Replicate};

use crate::world::{Money, SlotIndex, TileId};

/// Static description of one board position, supplied at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub name: String,
    pub price: u32,
    pub toll: u32,
}

impl TileSpec {
    pub fn new(name: impl Into<String>, price: u32, toll: u32) -> Self {
        Self {
            name: name.into(),
            price,
            toll,
        }
    }
}

// Tile
/// One position on the board. Only the owner ever changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    name: String,
    price: u32,
    toll: u32,
    owner: Option<SlotIndex>,
}

impl Tile {
    pub(crate) fn from_spec(id: TileId, spec: TileSpec) -> Self {
        Self {
            id,
            name: spec.name,
            price: spec.price,
            toll: spec.toll,
            owner: None,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        Money::from(self.price)
    }

    pub fn toll(&self) -> Money {
        Money::from(self.toll)
    }

    pub fn owner(&self) -> Option<SlotIndex> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<SlotIndex>) {
        self.owner = owner;
    }
}

impl Replicate for Tile {
    fn fields(&self) -> FieldSet {
        let owner = match self.owner {
            Some(slot) => FieldValue::Int(slot as i64),
            None => FieldValue::Absent,
        };

        FieldSet::new()
            .with("tile", FieldValue::Int(self.id as i64))
            .with("owner", owner)
    }
}
