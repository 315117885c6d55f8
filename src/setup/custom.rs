//! Caller-supplied board layouts.

use crate::board::{Board, BoardEntity};
use crate::core::GameRng;

use super::SetupStrategy;

/// Explicit lists of snake and ladder coordinate pairs.
///
/// Pairs are applied in the order they were added, snakes first, each
/// through the occupancy-checked add (collisions are dropped silently,
/// like every other strategy).
#[derive(Clone, Debug, Default)]
pub struct CustomSetup {
    snakes: Vec<(u32, u32)>,
    ladders: Vec<(u32, u32)>,
}

impl CustomSetup {
    /// Create an empty custom layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a snake from `start` down to `end`.
    pub fn add_snake(&mut self, start: u32, end: u32) {
        self.snakes.push((start, end));
    }

    /// Queue a ladder from `start` up to `end`.
    pub fn add_ladder(&mut self, start: u32, end: u32) {
        self.ladders.push((start, end));
    }
}

impl SetupStrategy for CustomSetup {
    fn setup(&self, board: &mut Board, _rng: &mut GameRng) {
        for &(start, end) in &self.snakes {
            board.add_entity(BoardEntity::snake(start, end));
        }
        for &(start, end) in &self.ladders {
            board.add_entity(BoardEntity::ladder(start, end));
        }
    }
}
