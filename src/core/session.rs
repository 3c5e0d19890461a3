//! The game session: root aggregate for one run through the dungeon.
//!
//! ## GameSession
//!
//! Owns everything that changes during play:
//! - Health, the dungeon, the room and the discard pile (via `Zones`)
//! - The equipped weapon and the weapon ceiling
//! - Turn restrictions (potion used, room avoided, cards resolved)
//! - The pending fight, if any
//! - The RNG the deck was shuffled with, and the action history
//!
//! Rule operations live next to the component they belong to:
//! `rules::room` (dealing, avoiding, resolving), `combat::fight`
//! (fights), `rules::turn` (card selection and dispatch), `rules::score`.

use im::Vector;
use tracing::info;

use super::action::ActionRecord;
use super::config::{SessionConfig, MAX_HEALTH, UNRESTRICTED_CEILING};
use super::rng::GameRng;
use crate::cards::{shuffled_deck, Card};
use crate::combat::EquippedWeapon;
use crate::zones::Zones;

/// Where the turn state machine currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No decision pending; cards may be selected.
    #[default]
    Idle,
    /// A monster was selected and waits for barehanded-vs-weapon.
    AwaitingFightChoice {
        /// Room index of the selected monster.
        room_index: usize,
    },
}

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: SessionConfig,
    pub(crate) rng: GameRng,

    pub(crate) health: i32,
    pub(crate) zones: Zones,

    pub(crate) weapon: Option<EquippedWeapon>,
    pub(crate) weapon_ceiling: u8,

    pub(crate) phase: TurnPhase,
    pub(crate) potion_used: bool,
    pub(crate) avoided: bool,
    pub(crate) resolved_this_room: u8,

    /// Number of room deals so far (1 after the initial deal).
    pub(crate) room_number: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameSession {
    /// Start a new session: build and shuffle the deck, deal the first room.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = rng_for(&config);
        Self::from_rng(config, rng)
    }

    /// Start a session shuffled with an existing RNG.
    #[must_use]
    pub fn from_rng(config: SessionConfig, mut rng: GameRng) -> Self {
        let deck = shuffled_deck(&mut rng);
        info!(seed = rng.seed(), "new session");
        Self::with_dungeon(config, rng, deck)
    }

    pub(crate) fn with_dungeon(config: SessionConfig, rng: GameRng, dungeon: Vec<Card>) -> Self {
        let mut session = Self {
            config,
            rng,
            health: MAX_HEALTH,
            zones: Zones::new(dungeon),
            weapon: None,
            weapon_ceiling: UNRESTRICTED_CEILING,
            phase: TurnPhase::Idle,
            potion_used: false,
            avoided: false,
            resolved_this_room: 0,
            room_number: 0,
            history: Vector::new(),
        };
        session.deal_room();
        session
    }

    /// Replace this session with a fresh one.
    ///
    /// The new deck is shuffled with a fork of this session's RNG, so a seeded
    /// run stays reproducible across restarts.
    pub fn restart(&mut self) {
        let rng = self.rng.fork();
        info!(previous_score = self.score(), "restarting session");
        *self = Self::from_rng(self.config.clone(), rng);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seed the current deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// Face-up room cards.
    #[must_use]
    pub fn room(&self) -> &[Card] {
        self.zones.room()
    }

    #[must_use]
    pub fn equipped_weapon(&self) -> Option<&EquippedWeapon> {
        self.weapon.as_ref()
    }

    /// Highest monster rank the equipped weapon may still be used against.
    #[must_use]
    pub fn weapon_ceiling(&self) -> u8 {
        self.weapon_ceiling
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Room index of the monster waiting for a fight style, if any.
    #[must_use]
    pub fn pending_fight(&self) -> Option<usize> {
        match self.phase {
            TurnPhase::Idle => None,
            TurnPhase::AwaitingFightChoice { room_index } => Some(room_index),
        }
    }

    #[must_use]
    pub fn potion_used_this_turn(&self) -> bool {
        self.potion_used
    }

    #[must_use]
    pub fn avoided_this_turn(&self) -> bool {
        self.avoided
    }

    #[must_use]
    pub fn cards_resolved_this_room(&self) -> u8 {
        self.resolved_this_room
    }

    #[must_use]
    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Health has dropped to zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Every card has been dealt and resolved.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.zones.dungeon_is_empty() && self.zones.room().is_empty()
    }
}

fn rng_for(config: &SessionConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

/// Builder for sessions with a fixed dungeon order.
///
/// ```
/// use scoundrel::cards::Card;
/// use scoundrel::core::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .dungeon(vec![Card::spade(10), Card::diamond(5), Card::heart(8), Card::club(2)])
///     .build();
///
/// assert_eq!(session.room().len(), 4);
/// assert_eq!(session.zones().dungeon_len(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    dungeon: Option<Vec<Card>>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this dungeon order (front = first dealt) instead of a shuffled deck.
    #[must_use]
    pub fn dungeon(mut self, cards: Vec<Card>) -> Self {
        self.dungeon = Some(cards);
        self
    }

    #[must_use]
    pub fn build(self) -> GameSession {
        match self.dungeon {
            Some(cards) => {
                let rng = rng_for(&self.config);
                GameSession::with_dungeon(self.config, rng, cards)
            }
            None => GameSession::new(self.config),
        }
    }
}
