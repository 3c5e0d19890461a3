//! Rules engine trait.
//!
//! The front end drives a game only through this trait:
//! - What actions are legal right now
//! - How an action changes the state
//! - Whether the game has ended

use serde::{Deserialize, Serialize};

use super::turn::Outcome;
use crate::core::action::Action;
use crate::core::error::GameError;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Health dropped to zero or below.
    Defeated,
    /// Every card in the dungeon was dealt and resolved.
    Cleared,
}

impl GameResult {
    /// Check if the player survived.
    #[must_use]
    pub fn is_victory(self) -> bool {
        matches!(self, GameResult::Cleared)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Every listed action must be accepted by `apply_action`
/// - `apply_action`: Must leave the state untouched when it returns `Err`
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Enumerate the actions accepted in the current state.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(&mut self, action: Action) -> Result<Outcome, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Check whether a single action is currently legal.
    fn is_legal(&self, action: Action) -> bool {
        self.legal_actions().contains(&action)
    }
}
