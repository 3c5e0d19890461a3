//! Game rules.
//!
//! - `engine`: the `RulesEngine` trait and `GameResult`
//! - `room`: dealing, avoiding and resolving room cards
//! - `turn`: card selection, the fight-choice gate and dispatch
//! - `score`: live and final scoring

pub mod engine;
pub mod room;
pub mod score;
pub mod turn;

pub use engine::{GameResult, RulesEngine};
pub use score::score;
pub use turn::Outcome;
