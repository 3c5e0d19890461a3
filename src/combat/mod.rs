//! Combat: the equipped weapon and fight resolution.
//!
//! - `resolver`: pure damage and weapon-ceiling rules
//! - `fight`: the two-step fight on a session (select monster, then style)

pub mod fight;
pub mod resolver;

pub use resolver::{resolve_fight, weapon_usable, EquippedWeapon, FightOutcome};
