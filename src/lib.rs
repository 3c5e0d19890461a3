//! # scoundrel
//!
//! A single-player dungeon-crawl card game.
//!
//! The player works through a shuffled 44-card dungeon one room of four
//! cards at a time: fighting monsters (Clubs, Spades), equipping weapons
//! (Diamonds) and drinking potions (Hearts), trying to survive and finish
//! with the best score.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameSession` is the only mutable state. The front end
//!    sends `Action`s and reads `Snapshot`s.
//!
//! 2. **All or nothing**: Every action either commits fully or is rejected
//!    with a `GameError` and leaves the session untouched.
//!
//! 3. **Reproducible**: Shuffling goes through a seeded `GameRng`; a fixed
//!    seed replays the same dungeon, restarts included.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, actions, errors, session, snapshot
//! - `cards`: Card values and the 44-card deck
//! - `zones`: Dungeon, room and discard pile storage
//! - `combat`: Weapon ceiling and fight resolution
//! - `rules`: Room management, turn state machine, scoring
//! - `ui`: Text panel and key mapping for the terminal front end
//!
//! ## Example
//!
//! ```
//! use scoundrel::{Action, FightStyle, GameSession, RulesEngine, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new().with_seed(7));
//! while session.is_terminal().is_none() {
//!     let action = if session.pending_fight().is_some() {
//!         Action::ChooseFightStyle(FightStyle::Weapon)
//!     } else {
//!         Action::SelectCard(0)
//!     };
//!     session.dispatch(action).unwrap();
//! }
//! let _final_score = session.score();
//! ```

pub mod cards;
pub mod combat;
pub mod core;
pub mod rules;
pub mod ui;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, FightStyle, GameError, GameRng, GameSession, RoomSlot,
    SelectionError, SessionBuilder, SessionConfig, Snapshot, TurnPhase, WeaponView,
};

pub use crate::cards::{build_deck, shuffled_deck, Card, CardKind, Suit};

pub use crate::combat::{EquippedWeapon, FightOutcome};

pub use crate::rules::{score, GameResult, Outcome, RulesEngine};

pub use crate::zones::Zones;
