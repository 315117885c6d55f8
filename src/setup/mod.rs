//! Board population strategies.
//!
//! A strategy decides which snakes and ladders a board gets before play
//! begins. All three implementations add entities through the same
//! occupancy-checked path, so a start-cell collision is always a silent
//! drop regardless of where the entity came from.
//!
//! - [`StandardSetup`]: the fixed classic layout (10x10 boards only)
//! - [`RandomSetup`]: randomized placement with a snake/ladder bias
//! - [`CustomSetup`]: caller-supplied coordinate pairs

mod custom;
mod random;
mod standard;

use crate::board::Board;
use crate::core::GameRng;

pub use custom::CustomSetup;
pub use random::{Difficulty, RandomSetup};
pub use standard::StandardSetup;

/// A policy that populates a board with entities.
///
/// Strategies receive the RNG even when they don't use it, so a single
/// injected seed drives the whole session deterministically.
pub trait SetupStrategy {
    /// Populate `board`. Never fails: placements that can't be honored
    /// are logged and skipped.
    fn setup(&self, board: &mut Board, rng: &mut GameRng);
}
