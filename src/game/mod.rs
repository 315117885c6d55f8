//! The round-robin game session.
//!
//! ## State Machine
//!
//! `WaitingForPlayers` → `InProgress` → `Finished`
//!
//! [`Game::start`] performs the only fatal check (at least two
//! players) and fires `GameStarted`. Each [`Game::take_turn`] call
//! dequeues the head player, rolls, applies the movement rules, fans
//! out notifications, and re-queues the player — strict FIFO
//! round-robin, no skip-on-six or extra-turn rules. The session never
//! blocks on input; the front-end decides when the next turn happens.

mod session;

pub use session::{Game, GameError, GamePhase, TurnOutcome};
