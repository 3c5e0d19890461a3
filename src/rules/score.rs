//! Scoring.
//!
//! - Dead: health minus the ranks of every monster still in the dungeon
//! - Alive: health, plus the rank of the last discarded card if health is
//!   full and that card was a potion
//!
//! The score is a pure function of the session and is valid at any time,
//! not just at game end.

use crate::core::config::MAX_HEALTH;
use crate::core::session::GameSession;

/// Compute the score for `session`.
#[must_use]
pub fn score(session: &GameSession) -> i32 {
    let health = session.health();

    if health <= 0 {
        let unfaced: i32 = session
            .zones()
            .dungeon()
            .iter()
            .filter(|card| card.is_monster())
            .map(|card| card.value())
            .sum();
        return health - unfaced;
    }

    match session.zones().last_discarded() {
        Some(card) if health == MAX_HEALTH && card.is_potion() => health + card.value(),
        _ => health,
    }
}

impl GameSession {
    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        score(self)
    }
}
