//! Player state: name, board position, accumulated wins.
//!
//! A player starts off-board at position 0 and only ever moves via the
//! game session after a validated roll. The win count survives the end
//! of a session so a caller could line up rematches with the same
//! players.

use serde::{Deserialize, Serialize};

/// A participant in a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: u32,
    wins: u32,
}

impl Player {
    /// Create a player at the starting position (0, off-board).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            wins: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current board position, in `[0, board_size]`.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Move the player to `position`. Only the game session calls this
    /// after a validated move.
    pub fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    /// Games won so far.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Record a win.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.name, self.position)
    }
}
