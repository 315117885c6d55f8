//! Movement rules.
//!
//! Pure, stateless functions the game loop consults each turn:
//! - is the roll playable at all (`valid`)
//! - where does the player end up (`resolve`)
//! - did that position win the game (`won`)
//!
//! The rules never mutate anything; the session applies their results.

mod movement;

pub use movement::{resolve, valid, won};
