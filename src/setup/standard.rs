//! The classic fixed layout for a 10x10 board.

use crate::board::{Board, BoardEntity};
use crate::core::GameRng;

use super::SetupStrategy;

/// Snake positions for the standard layout.
const STANDARD_SNAKES: [(u32, u32); 10] = [
    (99, 54),
    (95, 75),
    (92, 88),
    (89, 68),
    (74, 53),
    (64, 60),
    (62, 19),
    (49, 11),
    (46, 25),
    (16, 6),
];

/// Ladder positions for the standard layout.
const STANDARD_LADDERS: [(u32, u32); 11] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

/// Places the classic 10-snake, 11-ladder layout.
///
/// Only valid for 100-cell boards; any other size is a logged no-op.
/// Uses no randomness, so the result is identical regardless of RNG
/// state.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardSetup;

impl SetupStrategy for StandardSetup {
    fn setup(&self, board: &mut Board, _rng: &mut GameRng) {
        if board.size() != 100 {
            tracing::warn!(
                size = board.size(),
                "standard setup requires a 100-cell board, leaving board empty"
            );
            return;
        }

        for &(start, end) in &STANDARD_SNAKES {
            board.add_entity(BoardEntity::snake(start, end));
        }
        for &(start, end) in &STANDARD_LADDERS {
            board.add_entity(BoardEntity::ladder(start, end));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EntityKind;

    #[test]
    fn test_places_fixed_layout_on_100_cells() {
        let mut board = Board::new(10);
        StandardSetup.setup(&mut board, &mut GameRng::new(42));

        assert_eq!(board.entities().len(), 21);

        let snakes = board
            .entities()
            .iter()
            .filter(|e| e.kind() == EntityKind::Snake)
            .count();
        assert_eq!(snakes, 10);

        // Spot-check a few anchors.
        assert_eq!(board.entity_at(99).unwrap().end(), 54);
        assert_eq!(board.entity_at(2).unwrap().end(), 38);
        assert_eq!(board.entity_at(87).unwrap().end(), 94);
    }

    #[test]
    fn test_layout_ignores_rng_state() {
        let mut board1 = Board::new(10);
        let mut board2 = Board::new(10);

        StandardSetup.setup(&mut board1, &mut GameRng::new(1));
        StandardSetup.setup(&mut board2, &mut GameRng::new(999));

        assert_eq!(board1.entities(), board2.entities());
    }

    #[test]
    fn test_no_op_on_other_sizes() {
        let mut board = Board::new(8);
        StandardSetup.setup(&mut board, &mut GameRng::new(42));

        assert!(board.entities().is_empty());
    }
}
