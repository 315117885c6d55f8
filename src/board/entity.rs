//! Snake and ladder entities.
//!
//! An entity redirects a player who lands on its start cell to its end
//! cell. The intended direction invariant (ladders go up, snakes go
//! down) is reported but not enforced: a backwards entity is still
//! placed, matching the forgiving setup semantics of the rest of the
//! engine.

use serde::{Deserialize, Serialize};

/// Discriminant for the two entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Snake,
    Ladder,
}

impl EntityKind {
    /// Uppercase label used in notifications ("hit a SNAKE from ...").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Snake => "SNAKE",
            EntityKind::Ladder => "LADDER",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Snake => write!(f, "Snake"),
            EntityKind::Ladder => write!(f, "Ladder"),
        }
    }
}

/// A snake or ladder anchored at a board cell.
///
/// Immutable once constructed. `start` is the cell that triggers the
/// entity; `end` is where the player ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntity {
    start: u32,
    end: u32,
    kind: EntityKind,
}

impl BoardEntity {
    /// Create a snake. A snake should slide down (`end < start`);
    /// violations are logged and the entity is constructed anyway.
    #[must_use]
    pub fn snake(start: u32, end: u32) -> Self {
        if end >= start {
            tracing::warn!(start, end, "invalid snake: end should be below start");
        }
        Self {
            start,
            end,
            kind: EntityKind::Snake,
        }
    }

    /// Create a ladder. A ladder should climb (`end > start`);
    /// violations are logged and the entity is constructed anyway.
    #[must_use]
    pub fn ladder(start: u32, end: u32) -> Self {
        if end <= start {
            tracing::warn!(start, end, "invalid ladder: end should be above start");
        }
        Self {
            start,
            end,
            kind: EntityKind::Ladder,
        }
    }

    /// The cell that triggers this entity.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The cell a player is redirected to.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Snake or ladder.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Whether the start/end pair respects the intended direction for
    /// this kind.
    #[must_use]
    pub fn has_valid_direction(&self) -> bool {
        match self.kind {
            EntityKind::Snake => self.end < self.start,
            EntityKind::Ladder => self.end > self.start,
        }
    }
}

impl std::fmt::Display for BoardEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.kind, self.start, self.end)
    }
}
