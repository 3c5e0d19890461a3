//! Rejected-action errors.
//!
//! Every error leaves the session untouched. Callers are expected to ignore
//! them or flash a warning; none are fatal.

use thiserror::Error;

/// Why a card selection was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("room index {index} is out of range (room holds {room_len} cards)")]
    OutOfRange { index: usize, room_len: usize },

    #[error("three cards were already resolved in this room")]
    RoomExhausted,
}

/// Why an action was rejected in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no fight is waiting for a style choice")]
    NotAwaitingFight,

    #[error("a fight is waiting for a style choice")]
    FightPending,

    #[error("a room was already avoided this turn")]
    AlreadyAvoided,

    #[error("the room is full or the dungeon is empty; nothing to deal")]
    NothingToDeal,

    #[error("the game is over; only restart is accepted")]
    GameOver,
}

/// Error returned by session operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("invalid action: {0}")]
    InvalidAction(#[from] ActionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::from(SelectionError::OutOfRange { index: 5, room_len: 4 });
        assert_eq!(
            err.to_string(),
            "invalid selection: room index 5 is out of range (room holds 4 cards)"
        );

        let err = GameError::from(ActionError::AlreadyAvoided);
        assert_eq!(err.to_string(), "invalid action: a room was already avoided this turn");
    }

    #[test]
    fn test_error_trait() {
        let err = GameError::InvalidAction(ActionError::GameOver);
        let _: &dyn std::error::Error = &err;
    }
}
