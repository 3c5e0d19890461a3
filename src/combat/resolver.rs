//! Fight resolution.
//!
//! `resolve_fight` is a pure function: given the monster, the equipped
//! weapon (if any), the current weapon ceiling and the requested style, it
//! decides how much damage the player takes and whether the weapon was
//! actually used. The session applies the outcome.
//!
//! ## Rules
//!
//! - Barehanded, or no weapon, or monster rank above the ceiling:
//!   damage = monster rank, weapon untouched
//! - Otherwise: damage = max(0, monster rank - weapon rank), and the
//!   ceiling drops to the monster's rank
//!
//! A weapon request against a monster above the ceiling silently becomes a
//! barehanded fight.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::action::FightStyle;

/// The weapon currently in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedWeapon {
    /// The Diamond card.
    pub card: Card,

    /// Rank of the toughest monster slain with this weapon (0 = unused).
    pub last_slain: u8,
}

impl EquippedWeapon {
    /// A freshly equipped, unused weapon.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self { card, last_slain: 0 }
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.card.rank
    }
}

/// Result of a resolved fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightOutcome {
    /// The monster fought.
    pub monster: Card,

    /// Style the player asked for.
    pub requested: FightStyle,

    /// Whether the weapon actually absorbed part of the hit.
    pub weapon_used: bool,

    /// Health lost (never negative).
    pub damage: i32,
}

impl FightOutcome {
    /// New weapon ceiling after this fight, if it changed.
    #[must_use]
    pub fn new_ceiling(&self) -> Option<u8> {
        self.weapon_used.then_some(self.monster.rank)
    }

    /// Whether a weapon request was downgraded to barehanded.
    #[must_use]
    pub fn forced_barehanded(&self) -> bool {
        self.requested == FightStyle::Weapon && !self.weapon_used
    }
}

/// Check whether `weapon` may be used against `monster` under `ceiling`.
#[must_use]
pub fn weapon_usable(monster: Card, weapon: Option<&EquippedWeapon>, ceiling: u8) -> bool {
    weapon.is_some() && monster.rank <= ceiling
}

/// Decide the outcome of fighting `monster`.
#[must_use]
pub fn resolve_fight(
    monster: Card,
    weapon: Option<&EquippedWeapon>,
    ceiling: u8,
    style: FightStyle,
) -> FightOutcome {
    let weapon_rank = weapon
        .filter(|_| style == FightStyle::Weapon && weapon_usable(monster, weapon, ceiling))
        .map(EquippedWeapon::rank);

    let damage = match weapon_rank {
        Some(rank) => (monster.value() - i32::from(rank)).max(0),
        None => monster.value(),
    };

    FightOutcome {
        monster,
        requested: style,
        weapon_used: weapon_rank.is_some(),
        damage,
    }
}
