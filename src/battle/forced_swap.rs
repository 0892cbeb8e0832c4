//! Forced swap after a knockout.

use crate::core::SideId;
use crate::error::{BattleError, BattleResult};

use super::controller::ReplacementChooser;
use super::event::BattleEvent;
use super::Battle;

impl Battle {
    /// Replace `side`'s fainted active creature.
    ///
    /// Returns the slot that was sent in, or `None` when no creature is left
    /// standing. In that case the side has no active creature and has lost.
    ///
    /// # Errors
    ///
    /// [`BattleError::IneligibleReplacement`] if `chooser` picks a slot that
    /// is not standing. The fainted creature stays active so the call can be
    /// retried.
    pub fn force_swap(
        &mut self,
        side: SideId,
        chooser: &mut dyn ReplacementChooser,
    ) -> BattleResult<Option<usize>> {
        let eligible = self.sides[side].eligible_replacements();
        if eligible.is_empty() {
            tracing::debug!(side = %side, "no creatures left");
            self.sides[side].set_active(None);
            return Ok(None);
        }

        let chosen = chooser.choose_replacement(&self.sides[side], &eligible);
        if !eligible.contains(&chosen) {
            tracing::warn!(side = %side, chosen, ?eligible, "ineligible replacement");
            return Err(BattleError::IneligibleReplacement { side, slot: chosen });
        }

        let s = &mut self.sides[side];
        let from = s.active().map(|c| c.id);
        let to = s.party()[chosen].id;
        s.set_active(Some(chosen));

        tracing::debug!(side = %side, ?from, %to, "forced swap");
        self.emit(BattleEvent::SwapPerformed {
            side,
            from,
            to,
            forced: true,
        });
        Ok(Some(chosen))
    }
}
