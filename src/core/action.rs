//! Player actions and the action history.
//!
//! The front end translates input into an `Action` and hands it to
//! `GameSession::dispatch`. Accepted actions are recorded as
//! `ActionRecord`s for replay and debugging.

use serde::{Deserialize, Serialize};

/// How to fight a selected monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightStyle {
    /// Ignore the equipped weapon and take the monster's full rank.
    Barehanded,
    /// Use the equipped weapon if the ceiling allows it.
    Weapon,
}

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Act on the room card at this index (0-3).
    SelectCard(usize),
    /// Settle the pending fight.
    ChooseFightStyle(FightStyle),
    /// Send the whole room to the bottom of the dungeon.
    AvoidRoom,
    /// Top the room back up and start a new turn.
    RedealRoom,
    /// Throw the session away and start over.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectCard(index) => write!(f, "select card {}", index + 1),
            Action::ChooseFightStyle(FightStyle::Barehanded) => f.write_str("fight barehanded"),
            Action::ChooseFightStyle(FightStyle::Weapon) => f.write_str("fight with weapon"),
            Action::AvoidRoom => f.write_str("avoid room"),
            Action::RedealRoom => f.write_str("redeal room"),
            Action::Restart => f.write_str("restart"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Room number (1-based count of room deals) when the action was taken.
    pub room: u32,

    /// Sequence number within the session.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, room: u32, sequence: u32) -> Self {
        Self {
            action,
            room,
            sequence,
        }
    }
}
