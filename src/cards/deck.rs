//! Deck construction and shuffling.

use super::card::{Card, Suit};
use crate::core::rng::GameRng;

/// Total cards in a dungeon deck.
pub const DECK_SIZE: usize = 44;

/// Lowest rank of any card.
pub const MIN_RANK: u8 = 2;

/// Highest monster rank (Ace).
pub const MAX_MONSTER_RANK: u8 = 14;

/// Highest weapon and potion rank. Face cards and aces of red suits are
/// left out of the deck.
pub const MAX_RED_RANK: u8 = 10;

/// Build the 44-card deck in canonical order.
///
/// Clubs 2-14, Spades 2-14, Diamonds 2-10, Hearts 2-10.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        let top = if suit.kind() == super::CardKind::Monster {
            MAX_MONSTER_RANK
        } else {
            MAX_RED_RANK
        };
        deck.extend((MIN_RANK..=top).map(|rank| Card::new(suit, rank)));
    }

    deck
}

/// Build the deck and shuffle it with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = build_deck();
    rng.shuffle(&mut deck);
    deck
}
