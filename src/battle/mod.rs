//! The battle engine.
//!
//! A [`Battle`] owns both sides and resolves one turn at a time:
//!
//! ```text
//! AwaitingActions -> Resolving -> (ForcedSwap)* -> BattleEndCheck -> Ongoing | Terminal
//! ```
//!
//! - `validate_action` / `legal_actions`: contract checks, done before
//!   resolution ever starts
//! - `resolve_turn`: apply both actions in order (see `executor`)
//! - `force_swap`: replace a fainted active creature (see `forced_swap`)
//! - `finish`: tear down and hand back full-health sides
//!
//! The engine is single-threaded and holds no global state; each battle is
//! independent.

pub mod controller;
pub mod event;
mod executor;
mod forced_swap;
pub mod snapshot;

pub use controller::{Controller, Controllers, FirstEligible, RandomBot, ReplacementChooser};
pub use event::BattleEvent;
pub use snapshot::BattleSnapshot;

use crate::core::{Action, ActionRecord, BattleConfig, BattleRng, Side, SideId, SideMap};
use crate::error::{BattleError, BattleResult};
use crate::rules::BattleOutcome;

/// A two-sided battle in progress.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    sides: SideMap<Side>,
    rng: BattleRng,
    /// Turns resolved so far.
    turn: u32,
    sequence: u32,
    outcome: BattleOutcome,
    history: Vec<ActionRecord>,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Start a battle. `a` and `b` are re-tagged as `SideId::A` and
    /// `SideId::B`, and both start with their lead creature active.
    pub fn new(config: BattleConfig, mut a: Side, mut b: Side) -> BattleResult<Self> {
        a.id = SideId::A;
        b.id = SideId::B;
        a.validate()?;
        b.validate()?;

        tracing::debug!(
            seed = config.seed,
            a = %a.name,
            b = %b.name,
            "battle started"
        );

        Ok(Self {
            rng: BattleRng::new(config.seed),
            config,
            sides: SideMap::from_pair(a, b),
            turn: 0,
            sequence: 0,
            outcome: BattleOutcome::Ongoing,
            history: Vec::new(),
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn side(&self, side: SideId) -> &Side {
        &self.sides[side]
    }

    #[must_use]
    pub fn sides(&self) -> &SideMap<Side> {
        &self.sides
    }

    /// Number of turns resolved so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Every accepted action, in submission order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check that `side` may submit `action` this turn.
    ///
    /// A side whose active creature is fainted has no legal action until
    /// [`Battle::force_swap`] has replaced it.
    pub fn validate_action(&self, side: SideId, action: &Action) -> BattleResult<()> {
        if self.outcome.is_terminal() {
            return Err(BattleError::BattleOver);
        }

        let s = &self.sides[side];
        let active_slot = s.active_slot().ok_or(BattleError::NoActiveCreature { side })?;
        if s.active().is_some_and(|c| c.is_fainted()) {
            return Err(BattleError::PendingReplacement { side });
        }

        match *action {
            Action::Attack { skill } => {
                let owned = s
                    .active()
                    .is_some_and(|creature| creature.skill(skill).is_some());
                if !owned {
                    return Err(BattleError::InvalidSkill { side, slot: skill });
                }
            }
            Action::Swap { target } => {
                let creature = s
                    .creature(target)
                    .ok_or(BattleError::InvalidSwapTarget { side, slot: target })?;
                if target == active_slot {
                    return Err(BattleError::SwapToActive { side, slot: target });
                }
                if creature.is_fainted() {
                    return Err(BattleError::SwapToFainted { side, slot: target });
                }
            }
        }

        Ok(())
    }

    /// All actions `side` may submit this turn: every skill of the active
    /// creature, then a swap to each other creature still standing. Empty
    /// while a replacement is pending.
    #[must_use]
    pub fn legal_actions(&self, side: SideId) -> Vec<Action> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }

        let s = &self.sides[side];
        let (Some(active_slot), Some(active)) = (s.active_slot(), s.active()) else {
            return Vec::new();
        };
        if active.is_fainted() {
            return Vec::new();
        }

        let attacks = (0..active.skills.len()).map(|skill| Action::Attack { skill });
        let swaps = s
            .party()
            .iter()
            .enumerate()
            .filter(|&(slot, creature)| slot != active_slot && !creature.is_fainted())
            .map(|(target, _)| Action::Swap { target });

        attacks.chain(swaps).collect()
    }

    /// End the battle and hand back both sides at full health with their
    /// lead active, ready for reuse.
    #[must_use]
    pub fn finish(mut self) -> SideMap<Side> {
        for (_, side) in self.sides.iter_mut() {
            side.reset();
        }
        tracing::debug!(outcome = %self.outcome, turns = self.turn, "battle torn down");
        self.sides
    }

    fn record(&mut self, side: SideId, action: Action) {
        self.sequence += 1;
        self.history
            .push(ActionRecord::new(side, action, self.turn, self.sequence));
    }

    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}
