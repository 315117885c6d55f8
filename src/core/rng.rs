//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Every consumer (dice, random setup) receives a
//!   `GameRng` instead of reaching for a global generator
//! - **Reproducible sessions**: The seed is always known, even when it
//!   came from OS entropy, so a session can be replayed
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_range_inclusive(1..=6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.gen_range_inclusive(1..=6), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for dice rolls and random board setup.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Construct with an explicit seed for reproducibility, or from OS
/// entropy for interactive play.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and queryable via [`GameRng::seed`],
    /// so even entropy-seeded sessions can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.gen::<u64>();
        Self::new(seed)
    }

    /// The seed this generator was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given half-open range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probability must be in `[0.0, 1.0]`. With 0.0 the result is
    /// always false, with 1.0 always true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
