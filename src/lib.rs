//! # snakes-ladders
//!
//! A turn-based Snakes and Ladders rules engine for two or more local
//! players, plus an interactive console front-end (`src/bin/play.rs`).
//!
//! ## Design Principles
//!
//! 1. **Engine/IO Split**: The library never reads stdin or blocks. The
//!    session advances one turn per `take_turn` call; the front-end decides
//!    when a turn happens (press Enter to roll).
//!
//! 2. **Deterministic When Asked**: All randomness flows through [`GameRng`],
//!    a seed-injectable ChaCha8 generator. Interactive play seeds from OS
//!    entropy; tests pass a fixed seed and replay identical games.
//!
//! 3. **Degrade, Don't Abort**: Setup oddities (invalid entity direction,
//!    occupied start cells, exhausted random placement attempts) are logged
//!    or dropped, never fatal. The only hard error is starting a session
//!    with fewer than two players.
//!
//! ## Modules
//!
//! - `core`: players, dice, RNG
//! - `board`: board grid and snake/ladder entities
//! - `setup`: board population strategies (standard, random, custom)
//! - `rules`: pure movement rules (validity, resolution, win check)
//! - `events`: observer events and notifiers
//! - `game`: the round-robin session state machine

pub mod core;
pub mod board;
pub mod setup;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Dice, GameRng, Player};

pub use crate::board::{Board, BoardEntity, EntityKind};

pub use crate::setup::{CustomSetup, Difficulty, RandomSetup, SetupStrategy, StandardSetup};

pub use crate::events::{ChannelNotifier, ConsoleNotifier, GameEvent, Notifier};

pub use crate::game::{Game, GameError, GamePhase, TurnOutcome};
