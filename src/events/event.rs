//! Typed game events.

use serde::{Deserialize, Serialize};

use crate::board::EntityKind;

/// Something that happened during a session.
///
/// Player names are carried by value so an event stays meaningful
/// after the session that produced it is gone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The session moved from waiting to in-progress.
    GameStarted,

    /// A player rolled the dice.
    DiceRolled { player: String, roll: u32 },

    /// The roll would overshoot the final cell; the player stays put.
    TurnForfeited {
        player: String,
        position: u32,
        roll: u32,
    },

    /// The player landed on an entity's start and was redirected.
    EntityHit {
        player: String,
        kind: EntityKind,
        from: u32,
        to: u32,
    },

    /// The player's position after the move resolved.
    PlayerMoved { player: String, to: u32 },

    /// The player reached the final cell.
    PlayerWon { player: String },

    /// The session is finished.
    GameOver,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted => write!(f, "Game Started"),
            GameEvent::DiceRolled { player, roll } => {
                write!(f, "{} rolled a {}", player, roll)
            }
            GameEvent::TurnForfeited { player, roll, .. } => {
                write!(f, "{} can't move with a {}. Needs an exact roll.", player, roll)
            }
            GameEvent::EntityHit {
                player,
                kind,
                from,
                to,
            } => {
                write!(f, "{} hit a {} from {} to {}", player, kind.label(), from, to)
            }
            GameEvent::PlayerMoved { player, to } => {
                write!(f, "{} moved to {}", player, to)
            }
            GameEvent::PlayerWon { player } => write!(f, "{} wins!", player),
            GameEvent::GameOver => write!(f, "Game Over."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        let hit = GameEvent::EntityHit {
            player: "Asha".into(),
            kind: EntityKind::Snake,
            from: 62,
            to: 19,
        };
        assert_eq!(hit.to_string(), "Asha hit a SNAKE from 62 to 19");

        let moved = GameEvent::PlayerMoved {
            player: "Asha".into(),
            to: 42,
        };
        assert_eq!(moved.to_string(), "Asha moved to 42");

        let won = GameEvent::PlayerWon {
            player: "Asha".into(),
        };
        assert_eq!(won.to_string(), "Asha wins!");

        assert_eq!(GameEvent::GameStarted.to_string(), "Game Started");
        assert_eq!(GameEvent::GameOver.to_string(), "Game Over.");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::DiceRolled {
            player: "Ravi".into(),
            roll: 4,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
