//! Card storage for the dungeon, the room and the discard pile.
//!
//! `Zones` owns every card that is not equipped. It only knows how to move
//! cards around; turn bookkeeping (resolution counts, potion and avoid flags)
//! belongs to the session.
//!
//! ## Orientation
//!
//! - Dungeon: index 0 is the next card dealt, cards sent back go to the end
//! - Room: at most `ROOM_SIZE` cards, in deal order
//! - Discard pile: append-only, last element is the most recent discard

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::ROOM_SIZE;

/// Inline storage for the face-up room.
pub type Room = SmallVec<[Card; ROOM_SIZE]>;

/// Manages card locations across the dungeon, room and discard pile.
///
/// ```
/// use scoundrel::cards::Card;
/// use scoundrel::zones::Zones;
///
/// let mut zones = Zones::new(vec![Card::spade(3), Card::heart(4)]);
/// assert_eq!(zones.fill_room(), 2);
/// assert_eq!(zones.room(), &[Card::spade(3), Card::heart(4)]);
/// assert!(zones.dungeon_is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Zones {
    dungeon: Vector<Card>,
    room: Room,
    discard: Vector<Card>,
}

impl Zones {
    /// Create zones with the given dungeon order and an empty room.
    #[must_use]
    pub fn new(dungeon: impl IntoIterator<Item = Card>) -> Self {
        Self {
            dungeon: dungeon.into_iter().collect(),
            room: Room::new(),
            discard: Vector::new(),
        }
    }

    // === Dungeon ===

    /// Cards still face down, next card first.
    #[must_use]
    pub fn dungeon(&self) -> &Vector<Card> {
        &self.dungeon
    }

    #[must_use]
    pub fn dungeon_len(&self) -> usize {
        self.dungeon.len()
    }

    #[must_use]
    pub fn dungeon_is_empty(&self) -> bool {
        self.dungeon.is_empty()
    }

    // === Room ===

    /// Face-up cards, in deal order.
    #[must_use]
    pub fn room(&self) -> &[Card] {
        &self.room
    }

    /// Card at a room index.
    #[must_use]
    pub fn room_card(&self, index: usize) -> Option<Card> {
        self.room.get(index).copied()
    }

    /// Deal from the front of the dungeon until the room is full.
    ///
    /// Stops silently when the dungeon runs out. Returns the number of cards
    /// dealt.
    pub fn fill_room(&mut self) -> usize {
        let mut dealt = 0;
        while self.room.len() < ROOM_SIZE {
            let Some(card) = self.dungeon.pop_front() else {
                break;
            };
            self.room.push(card);
            dealt += 1;
        }
        dealt
    }

    /// Move every room card to the back of the dungeon, keeping their order.
    ///
    /// Returns the number of cards moved.
    pub fn return_room_to_dungeon(&mut self) -> usize {
        let moved = self.room.len();
        self.dungeon.extend(self.room.drain(..));
        moved
    }

    /// Remove and return the room card at `index`, shifting later cards left.
    pub fn take_from_room(&mut self, index: usize) -> Option<Card> {
        (index < self.room.len()).then(|| self.room.remove(index))
    }

    // === Discard pile ===

    /// Discarded cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Add a card to the top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Most recently discarded card.
    #[must_use]
    pub fn last_discarded(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Number of cards across the dungeon, room and discard pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.dungeon.len() + self.room.len() + self.discard.len()
    }
}
