//! Core session types: players, dice, RNG.
//!
//! These are the building blocks the board and game modules compose.
//! Nothing in here knows about snakes, ladders, or turn order.

pub mod dice;
pub mod player;
pub mod rng;

pub use dice::Dice;
pub use player::Player;
pub use rng::GameRng;
