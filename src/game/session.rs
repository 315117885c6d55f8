//! Session state machine and turn resolution.

use std::collections::VecDeque;

use thiserror::Error;

use crate::board::{Board, EntityKind};
use crate::core::{Dice, Player};
use crate::events::{GameEvent, Notifier};
use crate::rules;

/// Minimum players required to start a session.
const MIN_PLAYERS: usize = 2;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    WaitingForPlayers,
    InProgress,
    Finished,
}

/// Errors surfaced at the session API boundary.
///
/// Setup degradations (collisions, failed placements) never reach
/// here; the only fatal condition is starting without enough players.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("need at least {required} players, have {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },
}

/// What a single turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The roll overshot the final cell; the player did not move.
    Forfeited {
        player: String,
        position: u32,
        roll: u32,
    },
    /// The player moved (possibly redirected by an entity).
    Moved {
        player: String,
        roll: u32,
        from: u32,
        to: u32,
        entity: Option<EntityKind>,
    },
    /// The player reached the final cell; the session is over.
    Won { player: String, roll: u32, to: u32 },
}

/// A turn-based session over one board.
///
/// Owns the board, the dice, the player queue, and the observer list.
/// Drive it with [`Game::take_turn`] until the phase is
/// [`GamePhase::Finished`].
pub struct Game {
    board: Board,
    dice: Dice,
    players: VecDeque<Player>,
    observers: Vec<Box<dyn Notifier>>,
    phase: GamePhase,
    winner: Option<String>,
}

impl Game {
    /// Create a session over a populated board.
    #[must_use]
    pub fn new(board: Board, dice: Dice) -> Self {
        Self {
            board,
            dice,
            players: VecDeque::new(),
            observers: Vec::new(),
            phase: GamePhase::WaitingForPlayers,
            winner: None,
        }
    }

    /// Add a player to the back of the turn queue.
    ///
    /// Only allowed while waiting for players; later calls are logged
    /// and ignored.
    pub fn add_player(&mut self, player: Player) {
        if self.phase != GamePhase::WaitingForPlayers {
            tracing::warn!(name = player.name(), "cannot join a session already underway");
            return;
        }
        self.players.push_back(player);
    }

    /// Register an observer for game events.
    pub fn add_observer(&mut self, observer: Box<dyn Notifier>) {
        self.observers.push(observer);
    }

    /// The board being played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The winner's name once the session is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.front()
    }

    /// All players in current queue order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Begin play.
    ///
    /// Fails if fewer than [`MIN_PLAYERS`] players joined. On success
    /// the phase becomes [`GamePhase::InProgress`] and `GameStarted`
    /// is notified.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                required: MIN_PLAYERS,
                actual: self.players.len(),
            });
        }
        self.phase = GamePhase::InProgress;
        self.notify(&GameEvent::GameStarted);
        Ok(())
    }

    /// Play one turn for the head of the queue.
    ///
    /// Returns `None` unless the session is in progress. The player is
    /// re-queued at the back either way, so queue order stays strict
    /// round-robin across forfeits and the winning turn alike.
    pub fn take_turn(&mut self) -> Option<TurnOutcome> {
        if self.phase != GamePhase::InProgress {
            return None;
        }
        let mut player = self.players.pop_front()?;
        let name = player.name().to_string();

        let roll = self.dice.roll();
        self.notify(&GameEvent::DiceRolled {
            player: name.clone(),
            roll,
        });

        let max = self.board.size();
        let from = player.position();

        let outcome = if rules::valid(from, roll, max) {
            let mid = from + roll;
            let to = rules::resolve(from, roll, &self.board);
            let entity = self.board.entity_at(mid).map(|e| e.kind());
            player.set_position(to);

            if let Some(kind) = entity {
                self.notify(&GameEvent::EntityHit {
                    player: name.clone(),
                    kind,
                    from: mid,
                    to,
                });
            }
            self.notify(&GameEvent::PlayerMoved {
                player: name.clone(),
                to,
            });

            if rules::won(to, max) {
                player.record_win();
                self.winner = Some(name.clone());
                self.phase = GamePhase::Finished;
                self.notify(&GameEvent::PlayerWon {
                    player: name.clone(),
                });
                self.notify(&GameEvent::GameOver);
                TurnOutcome::Won {
                    player: name,
                    roll,
                    to,
                }
            } else {
                TurnOutcome::Moved {
                    player: name,
                    roll,
                    from,
                    to,
                    entity,
                }
            }
        } else {
            self.notify(&GameEvent::TurnForfeited {
                player: name.clone(),
                position: from,
                roll,
            });
            TurnOutcome::Forfeited {
                player: name,
                position: from,
                roll,
            }
        };

        self.players.push_back(player);
        Some(outcome)
    }

    fn notify(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}
