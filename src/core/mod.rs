//! Core types: configuration, RNG, actions, errors, the session and its
//! snapshot.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use action::{Action, ActionRecord, FightStyle};
pub use config::{SessionConfig, MAX_HEALTH, RESOLUTIONS_PER_ROOM, ROOM_SIZE, UNRESTRICTED_CEILING};
pub use error::{ActionError, GameError, SelectionError};
pub use rng::GameRng;
pub use session::{GameSession, SessionBuilder, TurnPhase};
pub use snapshot::{RoomSlot, Snapshot, WeaponView};
