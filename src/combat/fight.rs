//! Applying fights to the session.
//!
//! Selecting a monster only marks it as pending; nothing happens until the
//! player picks a fight style. The monster stays in the room until then.

use tracing::{debug, info};

use super::resolver::{resolve_fight, FightOutcome};
use crate::cards::Card;
use crate::core::action::FightStyle;
use crate::core::error::{ActionError, GameError};
use crate::core::session::{GameSession, TurnPhase};

impl GameSession {
    /// Mark the monster at `room_index` as awaiting a fight style.
    pub fn begin_fight(&mut self, room_index: usize) -> Result<Card, GameError> {
        self.ensure_idle()?;
        self.check_selection(room_index)?;
        let monster = self
            .zones
            .room_card(room_index)
            .filter(|card| card.is_monster())
            .ok_or(ActionError::NotAwaitingFight)?;

        self.phase = TurnPhase::AwaitingFightChoice { room_index };
        debug!(%monster, room_index, "fight started");
        Ok(monster)
    }

    /// Settle the pending fight with `style`.
    ///
    /// Applies damage (health may go negative), lowers the weapon ceiling if
    /// the weapon was used, discards the monster and counts the resolution.
    pub fn resolve_pending_fight(&mut self, style: FightStyle) -> Result<FightOutcome, GameError> {
        if self.is_defeated() || self.is_cleared() {
            return Err(ActionError::GameOver.into());
        }
        let TurnPhase::AwaitingFightChoice { room_index } = self.phase else {
            return Err(ActionError::NotAwaitingFight.into());
        };
        let monster = self
            .zones
            .room_card(room_index)
            .filter(|card| card.is_monster())
            .ok_or(ActionError::NotAwaitingFight)?;

        let outcome = resolve_fight(monster, self.weapon.as_ref(), self.weapon_ceiling, style);

        self.health -= outcome.damage;
        if let Some(ceiling) = outcome.new_ceiling() {
            self.weapon_ceiling = ceiling;
            if let Some(weapon) = self.weapon.as_mut() {
                weapon.last_slain = ceiling;
            }
        }
        self.phase = TurnPhase::Idle;

        let slain = self.resolve_slot(room_index)?;
        self.zones.discard(slain);

        debug!(
            %monster,
            damage = outcome.damage,
            weapon_used = outcome.weapon_used,
            health = self.health,
            "fight resolved"
        );
        if self.is_defeated() {
            info!(health = self.health, score = self.score(), "player defeated");
        }

        Ok(outcome)
    }
}
