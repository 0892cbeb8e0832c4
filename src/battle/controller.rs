//! Controllers: where actions and replacements come from.
//!
//! The engine never decides for a side. A host supplies a [`Controller`]
//! per side (a menu for a human, a strategy for a bot), and the forced-swap
//! flow asks a [`ReplacementChooser`] when an active creature faints.

use crate::core::{Action, BattleRng, Side, SideId};

use super::Battle;

/// Picks the replacement for a fainted active creature.
///
/// `eligible` is never empty and lists party slots in order. Returning a slot
/// outside `eligible` is a contract violation.
pub trait ReplacementChooser {
    fn choose_replacement(&mut self, side: &Side, eligible: &[usize]) -> usize;
}

impl<F> ReplacementChooser for F
where
    F: FnMut(&Side, &[usize]) -> usize,
{
    fn choose_replacement(&mut self, side: &Side, eligible: &[usize]) -> usize {
        self(side, eligible)
    }
}

/// Always sends in the first creature still standing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEligible;

impl ReplacementChooser for FirstEligible {
    fn choose_replacement(&mut self, _side: &Side, eligible: &[usize]) -> usize {
        eligible[0]
    }
}

/// Decision source for one side.
pub trait Controller {
    /// Pick this turn's action. Should return one of `battle.legal_actions(side)`.
    fn choose_action(&mut self, side: SideId, battle: &Battle) -> Action;

    /// Pick a replacement after a knockout. Defaults to the first eligible slot.
    fn choose_replacement(&mut self, side: &Side, eligible: &[usize]) -> usize {
        FirstEligible.choose_replacement(side, eligible)
    }
}

/// Bot that plays a uniformly random legal action and sends in a random
/// eligible replacement. Seeded, so a bot-vs-bot battle replays exactly.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: BattleRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BattleRng::new(seed),
        }
    }
}

impl ReplacementChooser for RandomBot {
    fn choose_replacement(&mut self, _side: &Side, eligible: &[usize]) -> usize {
        self.rng.choose(eligible).copied().unwrap_or_default()
    }
}

impl Controller for RandomBot {
    fn choose_action(&mut self, side: SideId, battle: &Battle) -> Action {
        let legal = battle.legal_actions(side);
        // Nothing legal: let resolution report why.
        self.rng
            .choose(&legal)
            .copied()
            .unwrap_or(Action::Attack { skill: 0 })
    }

    fn choose_replacement(&mut self, side: &Side, eligible: &[usize]) -> usize {
        ReplacementChooser::choose_replacement(self, side, eligible)
    }
}

/// Routes replacement requests to the controller of the fainted side.
pub struct Controllers<'a> {
    pub a: &'a mut dyn Controller,
    pub b: &'a mut dyn Controller,
}

impl<'a> Controllers<'a> {
    pub fn new(a: &'a mut dyn Controller, b: &'a mut dyn Controller) -> Self {
        Self { a, b }
    }
}

impl ReplacementChooser for Controllers<'_> {
    fn choose_replacement(&mut self, side: &Side, eligible: &[usize]) -> usize {
        match side.id {
            SideId::A => self.a.choose_replacement(side, eligible),
            SideId::B => self.b.choose_replacement(side, eligible),
        }
    }
}
