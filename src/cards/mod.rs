//! Cards and the dungeon deck.
//!
//! - `Card`: suit + rank, kind derived from the suit
//! - `build_deck`: the fixed 44-card deck in canonical order
//! - `shuffled_deck`: the same deck shuffled with a `GameRng`

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Suit};
pub use deck::{build_deck, shuffled_deck, DECK_SIZE};
