//! Turn state machine and action dispatch.
//!
//! ```text
//!            select monster               choose style
//!   Idle ─────────────────────▶ AwaitingFightChoice ──────────▶ Idle
//!    │ select weapon / potion, avoid, redeal
//!    └──────────────────────────▶ Idle
//! ```
//!
//! Every operation validates before it mutates: a rejected action leaves
//! the session exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{GameResult, RulesEngine};
use crate::cards::{Card, CardKind};
use crate::combat::{EquippedWeapon, FightOutcome};
use crate::core::action::{Action, ActionRecord, FightStyle};
use crate::core::config::MAX_HEALTH;
use crate::core::error::{ActionError, GameError};
use crate::core::session::{GameSession, TurnPhase};

/// What an accepted action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A weapon was equipped; the previous one, if any, was discarded.
    Equipped { weapon: Card, discarded: Option<Card> },
    /// A potion restored health.
    Healed { potion: Card, amount: i32 },
    /// A second potion this turn was discarded without effect.
    PotionWasted { potion: Card },
    /// A monster is waiting for a fight style.
    FightStarted { room_index: usize, monster: Card },
    /// A fight was settled.
    FightResolved(FightOutcome),
    /// The room went to the bottom of the dungeon.
    RoomAvoided { returned: usize },
    /// The room was topped up.
    RoomDealt { dealt: usize },
    /// A fresh session replaced the old one.
    Restarted { seed: u64 },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Equipped { weapon, discarded: Some(old) } => {
                write!(f, "Equipped {weapon}, discarded {old}")
            }
            Outcome::Equipped { weapon, discarded: None } => write!(f, "Equipped {weapon}"),
            Outcome::Healed { potion, amount } => write!(f, "Drank {potion}, healed {amount}"),
            Outcome::PotionWasted { potion } => {
                write!(f, "Drank {potion}, but only one potion works per room")
            }
            Outcome::FightStarted { monster, .. } => {
                write!(f, "Fighting {monster}: [b]arehanded or [w]eapon?")
            }
            Outcome::FightResolved(fight) if fight.forced_barehanded() => write!(
                f,
                "Weapon can't be used on {}, took {} damage barehanded",
                fight.monster, fight.damage
            ),
            Outcome::FightResolved(fight) => {
                write!(f, "Slew {}, took {} damage", fight.monster, fight.damage)
            }
            Outcome::RoomAvoided { returned } => {
                write!(f, "Avoided the room, {returned} cards sent back to the dungeon")
            }
            Outcome::RoomDealt { dealt } => write!(f, "Dealt {dealt} cards"),
            Outcome::Restarted { .. } => f.write_str("New game"),
        }
    }
}

impl GameSession {
    /// Act on the room card at `index`.
    ///
    /// Weapons are equipped and potions drunk immediately. Monsters start a
    /// fight and stay in the room until a style is chosen.
    pub fn select_card(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.ensure_idle()?;
        self.check_selection(index)?;
        let card = self.zones.room()[index];

        match card.kind() {
            CardKind::Monster => {
                let monster = self.begin_fight(index)?;
                Ok(Outcome::FightStarted { room_index: index, monster })
            }
            CardKind::Weapon => {
                let discarded = self.weapon.take().map(|old| old.card);
                if let Some(old) = discarded {
                    self.zones.discard(old);
                }
                // Ceiling is kept across re-equips; only combat lowers it.
                self.weapon = Some(EquippedWeapon::new(card));
                self.resolve_slot(index)?;
                Ok(Outcome::Equipped { weapon: card, discarded })
            }
            CardKind::Potion => {
                let outcome = if self.potion_used {
                    Outcome::PotionWasted { potion: card }
                } else {
                    let healed = (self.health + card.value()).min(MAX_HEALTH);
                    let amount = healed - self.health;
                    self.health = healed;
                    self.potion_used = true;
                    Outcome::Healed { potion: card, amount }
                };
                let potion = self.resolve_slot(index)?;
                self.zones.discard(potion);
                Ok(outcome)
            }
        }
    }

    /// Settle the pending fight.
    pub fn choose_fight_style(&mut self, style: FightStyle) -> Result<Outcome, GameError> {
        self.resolve_pending_fight(style).map(Outcome::FightResolved)
    }

    /// Top the room up and start a new turn.
    ///
    /// Rejected when no card would be dealt (full room or empty dungeon), so
    /// the turn limits can't be reset without leaving the room.
    pub fn redeal_room(&mut self) -> Result<Outcome, GameError> {
        self.ensure_idle()?;
        if !self.can_redeal() {
            return Err(ActionError::NothingToDeal.into());
        }
        let dealt = self.deal_room();
        Ok(Outcome::RoomDealt { dealt })
    }

    /// Apply one player action.
    ///
    /// Accepted actions are recorded in the history; rejected ones leave the
    /// session unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, GameError> {
        let room = self.room_number;

        let result = match action {
            Action::SelectCard(index) => self.select_card(index),
            Action::ChooseFightStyle(style) => self.choose_fight_style(style),
            Action::AvoidRoom => self
                .avoid_room()
                .map(|returned| Outcome::RoomAvoided { returned }),
            Action::RedealRoom => self.redeal_room(),
            Action::Restart => {
                self.restart();
                Ok(Outcome::Restarted { seed: self.seed() })
            }
        };

        match &result {
            Ok(outcome) => {
                if action != Action::Restart {
                    let sequence = self.history.len() as u32;
                    self.history.push_back(ActionRecord::new(action, room, sequence));
                }
                debug!(%action, ?outcome, "action accepted");
            }
            Err(e) => debug!(%action, %e, "action rejected"),
        }

        result
    }
}

impl RulesEngine for GameSession {
    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal().is_some() {
            return vec![Action::Restart];
        }

        let mut actions = Vec::new();
        match self.phase {
            TurnPhase::AwaitingFightChoice { .. } => {
                actions.push(Action::ChooseFightStyle(FightStyle::Barehanded));
                actions.push(Action::ChooseFightStyle(FightStyle::Weapon));
            }
            TurnPhase::Idle => {
                actions.extend(
                    (0..self.zones.room().len())
                        .filter(|&i| self.check_selection(i).is_ok())
                        .map(Action::SelectCard),
                );
                if !self.avoided {
                    actions.push(Action::AvoidRoom);
                }
                if self.can_redeal() {
                    actions.push(Action::RedealRoom);
                }
            }
        }
        actions.push(Action::Restart);

        actions
    }

    fn apply_action(&mut self, action: Action) -> Result<Outcome, GameError> {
        self.dispatch(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_defeated() {
            Some(GameResult::Defeated)
        } else if self.is_cleared() {
            Some(GameResult::Cleared)
        } else {
            None
        }
    }
}
