/// A fair die backed by a `fastrand` generator.
pub struct Dice {
    rng: fastrand::Rng,
    faces: usize,
}

impl Dice {
    pub fn new(faces: usize) -> Self {
        Self {
            rng: fastrand::Rng::new(),
            faces,
        }
    }

    /// A die whose sequence of rolls is reproducible.
    pub fn with_seed(faces: usize, seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            faces,
        }
    }

    pub fn faces(&self) -> usize {
        self.faces
    }

    /// Uniform in `1..=faces`.
    pub fn roll(&mut self) -> usize {
        self.rng.usize(1..=self.faces)
    }
}
