//! Randomized board population.

use crate::board::{Board, BoardEntity};
use crate::core::GameRng;

use super::SetupStrategy;

/// Placement attempts per entity before giving up on it.
const PLACEMENT_ATTEMPTS: u32 = 50;

/// Difficulty presets mapping to a snake probability.
///
/// Harder games have more snakes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that a placed entity is a snake.
    #[must_use]
    pub fn snake_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.7,
        }
    }

    /// Map the interactive 1/2/3 selection to a preset.
    #[must_use]
    pub fn from_level(level: u32) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Random placement of `size / 10` entities.
///
/// Each entity is a snake with the configured probability. Placement
/// makes up to [`PLACEMENT_ATTEMPTS`] tries: a random start in
/// `[10, size - 10)`, an end derived from the kind (snakes fall to
/// `[1, start)`, ladders climb to `(start, size]`), accepting the first
/// try whose start cell is free and whose end lies strictly inside the
/// board. An entity that never finds a spot is skipped.
#[derive(Clone, Copy, Debug)]
pub struct RandomSetup {
    snake_probability: f64,
}

impl RandomSetup {
    /// Create a setup with an explicit snake probability in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `snake_probability` is outside `[0, 1]`.
    #[must_use]
    pub fn new(snake_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&snake_probability),
            "snake probability must be within [0, 1]"
        );
        Self { snake_probability }
    }

    /// Create a setup from a difficulty preset.
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.snake_probability())
    }

    /// The configured snake probability.
    #[must_use]
    pub fn snake_probability(&self) -> f64 {
        self.snake_probability
    }
}

impl SetupStrategy for RandomSetup {
    fn setup(&self, board: &mut Board, rng: &mut GameRng) {
        let size = board.size();

        // Starts are drawn from [10, size - 10), which is empty on
        // boards of 20 cells or fewer.
        if size <= 20 {
            tracing::warn!(size, "board too small for random setup, leaving board empty");
            return;
        }

        let quota = size / 10;
        for _ in 0..quota {
            let is_snake = rng.gen_bool(self.snake_probability);

            let mut placed = false;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let start = rng.gen_range(10..size - 10);
                let end = if is_snake {
                    rng.gen_range(1..start)
                } else {
                    rng.gen_range_inclusive(start + 1..=size)
                };

                if board.can_add(start) && end < size {
                    let entity = if is_snake {
                        BoardEntity::snake(start, end)
                    } else {
                        BoardEntity::ladder(start, end)
                    };
                    board.add_entity(entity);
                    placed = true;
                    break;
                }
            }

            if !placed {
                tracing::debug!(
                    attempts = PLACEMENT_ATTEMPTS,
                    "no free placement found, skipping entity"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EntityKind;

    #[test]
    fn test_difficulty_probabilities() {
        assert_eq!(Difficulty::Easy.snake_probability(), 0.3);
        assert_eq!(Difficulty::Medium.snake_probability(), 0.5);
        assert_eq!(Difficulty::Hard.snake_probability(), 0.7);

        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level(4), None);
    }

    #[test]
    fn test_zero_probability_places_no_snakes() {
        let mut board = Board::new(10);
        RandomSetup::new(0.0).setup(&mut board, &mut GameRng::new(42));

        assert!(!board.entities().is_empty());
        assert!(board
            .entities()
            .iter()
            .all(|e| e.kind() == EntityKind::Ladder));
    }

    #[test]
    fn test_full_probability_places_only_snakes() {
        let mut board = Board::new(10);
        RandomSetup::new(1.0).setup(&mut board, &mut GameRng::new(42));

        assert!(!board.entities().is_empty());
        assert!(board
            .entities()
            .iter()
            .all(|e| e.kind() == EntityKind::Snake));
    }

    #[test]
    fn test_placement_bounds() {
        let mut board = Board::new(10);
        RandomSetup::new(0.5).setup(&mut board, &mut GameRng::new(7));

        let size = board.size();
        assert!(board.entities().len() <= (size / 10) as usize);

        for entity in board.entities() {
            assert!((10..size - 10).contains(&entity.start()));
            assert!(entity.end() < size);
            assert!(entity.has_valid_direction());
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut board1 = Board::new(10);
        let mut board2 = Board::new(10);

        RandomSetup::new(0.5).setup(&mut board1, &mut GameRng::new(42));
        RandomSetup::new(0.5).setup(&mut board2, &mut GameRng::new(42));

        assert_eq!(board1.entities(), board2.entities());
    }

    #[test]
    fn test_tiny_board_is_left_empty() {
        let mut board = Board::new(4); // 16 cells, start range would be empty
        RandomSetup::new(0.5).setup(&mut board, &mut GameRng::new(42));

        assert!(board.entities().is_empty());
    }

    #[test]
    #[should_panic(expected = "within [0, 1]")]
    fn test_out_of_range_probability_panics() {
        let _ = RandomSetup::new(1.5);
    }
}
