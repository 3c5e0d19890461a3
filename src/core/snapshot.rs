//! Read-only view of a session for the presentation layer.
//!
//! A `Snapshot` is a plain value: the front end renders it and never
//! touches the session directly.

use serde::{Deserialize, Serialize};

use super::config::MAX_HEALTH;
use super::session::GameSession;
use crate::cards::{Card, CardKind};
use crate::rules::{GameResult, RulesEngine};

/// One face-up room card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSlot {
    pub card: Card,
    pub kind: CardKind,
    /// This monster is waiting for a fight style.
    pub pending: bool,
}

/// The equipped weapon and its limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponView {
    pub card: Card,
    /// Highest monster rank it may still be used against.
    pub ceiling: u8,
    /// Toughest monster slain with it (0 = unused).
    pub last_slain: u8,
}

/// Everything the front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub health: i32,
    pub max_health: i32,
    pub dungeon_size: usize,
    pub room: Vec<RoomSlot>,
    pub pending_fight: Option<usize>,
    pub weapon: Option<WeaponView>,
    pub weapon_ceiling: u8,
    pub discard_size: usize,
    pub score: i32,
    pub game_over: bool,
    pub result: Option<GameResult>,
    pub can_avoid: bool,
    pub awaiting_fight_choice: bool,
    pub potion_used: bool,
    pub cards_resolved: u8,
    pub room_number: u32,
    /// Dungeon order, front first. Only filled in debug sessions.
    pub dungeon_preview: Option<Vec<Card>>,
}

impl GameSession {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let pending_fight = self.pending_fight();
        let room = self
            .room()
            .iter()
            .enumerate()
            .map(|(i, &card)| RoomSlot {
                card,
                kind: card.kind(),
                pending: pending_fight == Some(i),
            })
            .collect();

        let weapon = self.weapon.map(|w| WeaponView {
            card: w.card,
            ceiling: self.weapon_ceiling,
            last_slain: w.last_slain,
        });

        let result = self.is_terminal();

        Snapshot {
            health: self.health,
            max_health: MAX_HEALTH,
            dungeon_size: self.zones.dungeon_len(),
            room,
            pending_fight,
            weapon,
            weapon_ceiling: self.weapon_ceiling,
            discard_size: self.zones.discard_pile().len(),
            score: self.score(),
            game_over: result.is_some(),
            result,
            can_avoid: result.is_none() && pending_fight.is_none() && !self.avoided,
            awaiting_fight_choice: pending_fight.is_some(),
            potion_used: self.potion_used,
            cards_resolved: self.resolved_this_room,
            room_number: self.room_number,
            dungeon_preview: self
                .config
                .debug
                .then(|| self.zones.dungeon().iter().copied().collect()),
        }
    }
}
