//! Card values.
//!
//! A `Card` is an immutable suit + rank pair. Its kind is derived from the
//! suit: Clubs and Spades are monsters, Diamonds are weapons, Hearts are
//! potions. Ranks run 2-14 (Jack = 11, Queen = 12, King = 13, Ace = 14).

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    /// All suits, monsters first.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart];

    /// What cards of this suit do when resolved.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Suit::Club | Suit::Spade => CardKind::Monster,
            Suit::Diamond => CardKind::Weapon,
            Suit::Heart => CardKind::Potion,
        }
    }

    /// Single-character symbol used in compact displays.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Spade => '♠',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Club => "Club",
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
        };
        f.write_str(name)
    }
}

/// Card role, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster,
    Weapon,
    Potion,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Monster => "Monster",
            CardKind::Weapon => "Weapon",
            CardKind::Potion => "Potion",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Shorthand for a Club.
    #[must_use]
    pub const fn club(rank: u8) -> Self {
        Self::new(Suit::Club, rank)
    }

    /// Shorthand for a Spade.
    #[must_use]
    pub const fn spade(rank: u8) -> Self {
        Self::new(Suit::Spade, rank)
    }

    /// Shorthand for a Diamond.
    #[must_use]
    pub const fn diamond(rank: u8) -> Self {
        Self::new(Suit::Diamond, rank)
    }

    /// Shorthand for a Heart.
    #[must_use]
    pub const fn heart(rank: u8) -> Self {
        Self::new(Suit::Heart, rank)
    }

    #[must_use]
    pub const fn kind(self) -> CardKind {
        self.suit.kind()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.kind(), CardKind::Monster)
    }

    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self.kind(), CardKind::Weapon)
    }

    #[must_use]
    pub const fn is_potion(self) -> bool {
        matches!(self.kind(), CardKind::Potion)
    }

    /// Rank as a signed value for health arithmetic.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.rank as i32
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            r => r.to_string(),
        };
        write!(f, "{}{}", self.suit.symbol(), face)
    }
}
