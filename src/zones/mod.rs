//! Card locations: the dungeon, the room and the discard pile.
//!
//! ## Key Types
//!
//! - `Zones`: storage and movement primitives for all unequipped cards
//! - `Room`: inline four-card storage for the face-up room

pub mod manager;

pub use manager::{Room, Zones};
