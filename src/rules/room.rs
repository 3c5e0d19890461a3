//! Room management: dealing, avoiding and resolving room cards.
//!
//! A "turn" is one room. Dealing a room resets the per-turn restrictions.
//! After three resolutions the room is topped back up from the dungeon;
//! the unresolved fourth card stays and carries into the next room.

use tracing::debug;

use crate::cards::Card;
use crate::core::config::{RESOLUTIONS_PER_ROOM, ROOM_SIZE};
use crate::core::error::{ActionError, GameError, SelectionError};
use crate::core::session::{GameSession, TurnPhase};

impl GameSession {
    /// Top the room up to four cards and start a new turn.
    ///
    /// Stops silently if the dungeon runs out. Returns the number of cards
    /// dealt. Unchecked: players reach this through `redeal_room`.
    pub(crate) fn deal_room(&mut self) -> usize {
        let dealt = self.zones.fill_room();
        self.resolved_this_room = 0;
        self.potion_used = false;
        self.avoided = false;
        self.room_number += 1;

        debug!(
            room = self.room_number,
            dealt,
            dungeon = self.zones.dungeon_len(),
            "dealt room"
        );
        if self.zones.dungeon_is_empty() {
            debug!("dungeon exhausted");
        }

        dealt
    }

    /// Send the room to the bottom of the dungeon and deal a fresh one.
    ///
    /// Rejected if a room was already avoided this turn. Returns the number
    /// of cards sent back.
    pub fn avoid_room(&mut self) -> Result<usize, GameError> {
        self.ensure_idle()?;
        if self.avoided {
            return Err(ActionError::AlreadyAvoided.into());
        }

        let returned = self.zones.return_room_to_dungeon();
        self.deal_room();
        self.avoided = true;
        Ok(returned)
    }

    /// Remove the card at `index` from the room and count the resolution.
    ///
    /// The third resolution triggers a refill unless the player is dead.
    /// The caller decides where the returned card goes. Rejected while a
    /// fight is pending or after the game ended.
    pub fn resolve_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.ensure_idle()?;
        self.resolve_slot(index)
    }

    /// `resolve_card` without the phase check, for moves that already
    /// validated the turn.
    pub(crate) fn resolve_slot(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_selection(index)?;
        let Some(card) = self.zones.take_from_room(index) else {
            let room_len = self.zones.room().len();
            return Err(SelectionError::OutOfRange { index, room_len }.into());
        };

        self.resolved_this_room += 1;
        if self.resolved_this_room >= RESOLUTIONS_PER_ROOM && !self.is_defeated() {
            self.deal_room();
        }

        Ok(card)
    }

    /// A redeal would put at least one new card in the room.
    pub(crate) fn can_redeal(&self) -> bool {
        self.zones.room().len() < ROOM_SIZE && !self.zones.dungeon_is_empty()
    }

    /// Check that `index` names a card the player may act on this turn.
    pub(crate) fn check_selection(&self, index: usize) -> Result<(), SelectionError> {
        if self.resolved_this_room >= RESOLUTIONS_PER_ROOM {
            return Err(SelectionError::RoomExhausted);
        }
        let room_len = self.zones.room().len();
        if index >= room_len {
            return Err(SelectionError::OutOfRange { index, room_len });
        }
        Ok(())
    }

    /// Reject actions after the game ended or while a fight is pending.
    pub(crate) fn ensure_idle(&self) -> Result<(), ActionError> {
        if self.is_defeated() || self.is_cleared() {
            return Err(ActionError::GameOver);
        }
        if let TurnPhase::AwaitingFightChoice { .. } = self.phase {
            return Err(ActionError::FightPending);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::Card;
    use crate::core::config::ROOM_SIZE;
    use crate::core::error::{ActionError, GameError, SelectionError};
    use crate::core::SessionBuilder;

    fn eight_cards() -> Vec<Card> {
        vec![
            Card::heart(2),
            Card::heart(3),
            Card::diamond(4),
            Card::club(5),
            Card::spade(6),
            Card::club(7),
            Card::spade(8),
            Card::club(9),
        ]
    }

    #[test]
    fn test_deal_room_resets_turn() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();
        session.potion_used = true;
        session.avoided = true;
        session.resolved_this_room = 2;

        assert_eq!(session.deal_room(), 0);
        assert!(!session.potion_used_this_turn());
        assert!(!session.avoided_this_turn());
        assert_eq!(session.cards_resolved_this_room(), 0);
        assert_eq!(session.room_number(), 2);
    }

    #[test]
    fn test_resolve_card_refills_after_three() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();

        assert_eq!(session.resolve_card(0).unwrap(), Card::heart(2));
        assert_eq!(session.resolve_card(0).unwrap(), Card::heart(3));
        assert_eq!(session.cards_resolved_this_room(), 2);
        assert_eq!(session.room().len(), 2);

        assert_eq!(session.resolve_card(0).unwrap(), Card::diamond(4));

        // Club 5 carried over, three new cards dealt behind it
        assert_eq!(
            session.room(),
            &[Card::club(5), Card::spade(6), Card::club(7), Card::spade(8)]
        );
        assert_eq!(session.cards_resolved_this_room(), 0);
        assert_eq!(session.zones().dungeon_len(), 1);
    }

    #[test]
    fn test_resolve_card_out_of_range() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();

        let err = session.resolve_card(ROOM_SIZE).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSelection(SelectionError::OutOfRange { index: 4, room_len: 4 })
        );
        assert_eq!(session.room().len(), ROOM_SIZE);
        assert_eq!(session.cards_resolved_this_room(), 0);
    }

    #[test]
    fn test_resolve_card_room_exhausted() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();
        session.resolved_this_room = 3;

        let err = session.resolve_card(0).unwrap_err();
        assert_eq!(err, GameError::InvalidSelection(SelectionError::RoomExhausted));
        assert_eq!(session.room().len(), ROOM_SIZE);
    }

    #[test]
    fn test_resolve_card_rejected_during_fight() {
        let mut session = SessionBuilder::new()
            .dungeon(vec![Card::heart(2), Card::heart(3), Card::club(10), Card::diamond(4)])
            .build();
        session.begin_fight(2).unwrap();

        let err = session.resolve_card(0).unwrap_err();
        assert_eq!(err, GameError::InvalidAction(ActionError::FightPending));
        assert_eq!(session.pending_fight(), Some(2));
        assert_eq!(session.room()[2], Card::club(10));
        assert_eq!(session.cards_resolved_this_room(), 0);
    }

    #[test]
    fn test_can_redeal() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();
        assert!(!session.can_redeal());

        session.resolve_card(0).unwrap();
        assert!(session.can_redeal());

        let mut short = SessionBuilder::new()
            .dungeon(vec![Card::heart(2), Card::club(3)])
            .build();
        short.resolve_card(0).unwrap();
        assert!(!short.can_redeal());
    }

    #[test]
    fn test_avoid_room_cycles_cards() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();

        assert_eq!(session.avoid_room().unwrap(), 4);
        assert_eq!(
            session.room(),
            &[Card::spade(6), Card::club(7), Card::spade(8), Card::club(9)]
        );
        let dungeon: Vec<Card> = session.zones().dungeon().iter().copied().collect();
        assert_eq!(
            dungeon,
            vec![Card::heart(2), Card::heart(3), Card::diamond(4), Card::club(5)]
        );
        assert!(session.avoided_this_turn());
    }

    #[test]
    fn test_avoid_twice_rejected() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();
        session.avoid_room().unwrap();

        let room = session.room().to_vec();
        let dungeon = session.zones().dungeon().clone();

        let err = session.avoid_room().unwrap_err();
        assert_eq!(err, GameError::InvalidAction(ActionError::AlreadyAvoided));
        assert_eq!(session.room(), room.as_slice());
        assert_eq!(session.zones().dungeon(), &dungeon);
    }

    #[test]
    fn test_avoid_allowed_again_next_room() {
        let mut session = SessionBuilder::new().dungeon(eight_cards()).build();
        session.avoid_room().unwrap();

        for _ in 0..3 {
            session.resolve_card(0).unwrap();
        }
        assert!(!session.avoided_this_turn());
        assert!(session.avoid_room().is_ok());
    }
}
