//! Per-turn movement resolution.

use crate::board::Board;

/// Whether a roll is playable from `position` on a board of `max`
/// cells.
///
/// A roll that would overshoot the final cell forfeits the turn; there
/// is no bounce-back.
#[must_use]
pub fn valid(position: u32, roll: u32, max: u32) -> bool {
    match position.checked_add(roll) {
        Some(mid) => mid <= max,
        None => false,
    }
}

/// The position reached by playing `roll` from `position`.
///
/// Lands on `position + roll`; if an entity anchors that cell, the
/// player is redirected to the entity's end. Resolution does not
/// chain: an entity end that happens to be another entity's start is
/// not followed this turn.
///
/// Callers must have checked [`valid`] first.
#[must_use]
pub fn resolve(position: u32, roll: u32, board: &Board) -> u32 {
    let mid = position + roll;
    match board.entity_at(mid) {
        Some(entity) => entity.end(),
        None => mid,
    }
}

/// Whether `position` is exactly the final cell.
#[must_use]
pub fn won(position: u32, max: u32) -> bool {
    position == max
}
