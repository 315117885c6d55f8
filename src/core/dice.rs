//! N-faced dice over an injected [`GameRng`].

use super::rng::GameRng;

/// A dice with a fixed number of faces.
///
/// Owns its RNG so the roll sequence is fully determined by the seed
/// the dice was built with.
#[derive(Clone, Debug)]
pub struct Dice {
    faces: u32,
    rng: GameRng,
}

impl Dice {
    /// Create a dice with `faces` faces.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is zero.
    #[must_use]
    pub fn new(faces: u32, rng: GameRng) -> Self {
        assert!(faces > 0, "Dice must have at least 1 face");
        Self { faces, rng }
    }

    /// Number of faces.
    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Roll the dice, returning a value in `1..=faces`.
    pub fn roll(&mut self) -> u32 {
        let faces = self.faces;
        self.rng.gen_range_inclusive(1..=faces)
    }
}
