//! Turn execution.
//!
//! A turn runs in this order:
//! 1. Validate both actions. Nothing is mutated if either is illegal.
//! 2. Order them (`rules::resolve_order`): swaps first, then by speed.
//! 3. Apply each in turn. After a knockout the fainted side is given a
//!    replacement and the battle-end check runs immediately; once the
//!    battle is over the rest of the turn is skipped.
//!
//! A queued attack is bound to the skill the acting creature chose. If that
//! creature was knocked out earlier in the turn, its forced replacement
//! carries out the skill, unless `forfeit_on_faint` is set.

use crate::core::{Action, Side, SideId, SideMap, Skill};
use crate::error::{BattleError, BattleResult};
use crate::rules::{check_end, compute_damage, resolve_order, BattleOutcome, Queued};

use super::controller::{Controller, Controllers, ReplacementChooser};
use super::event::BattleEvent;
use super::Battle;

/// An attack captured when the turn's actions were submitted.
#[derive(Clone, Debug)]
struct QueuedAttack {
    /// Party slot of the creature that chose the skill.
    slot: usize,
    skill: Skill,
}

impl Battle {
    /// Resolve one turn from both sides' actions.
    ///
    /// `chooser` is asked for a replacement whenever an active creature
    /// faints and its side still has creatures standing.
    ///
    /// # Errors
    ///
    /// Contract violations only: an illegal action (checked before any
    /// state changes), an ineligible replacement, or a battle that is
    /// already over.
    ///
    /// An ineligible replacement stops the turn where it happened. Damage
    /// already dealt stands, the turn still counts, and any action not yet
    /// applied is dropped rather than resumed. The fainted creature stays
    /// active, and both sides' next actions are rejected with
    /// [`BattleError::PendingReplacement`] until [`Battle::force_swap`]
    /// succeeds for that side.
    pub fn resolve_turn(
        &mut self,
        action_a: Action,
        action_b: Action,
        chooser: &mut dyn ReplacementChooser,
    ) -> BattleResult<BattleOutcome> {
        self.validate_action(SideId::A, &action_a)?;
        self.validate_action(SideId::B, &action_b)?;

        self.turn += 1;
        let turn = self.turn;
        tracing::debug!(turn, ?action_a, ?action_b, "turn started");
        self.emit(BattleEvent::TurnStarted { turn });
        self.record(SideId::A, action_a);
        self.record(SideId::B, action_b);

        let mut attacks = SideMap::from_pair(
            queue_attack(&self.sides[SideId::A], action_a),
            queue_attack(&self.sides[SideId::B], action_b),
        );
        let order = resolve_order(
            Queued::new(SideId::A, action_a, active_speed(&self.sides[SideId::A])),
            Queued::new(SideId::B, action_b, active_speed(&self.sides[SideId::B])),
            &mut self.rng,
        );

        for entry in order {
            if self.outcome.is_terminal() {
                tracing::debug!(side = %entry.side, "battle over, remaining action skipped");
                break;
            }

            match entry.action {
                Action::Swap { target } => self.apply_swap(entry.side, target),
                Action::Attack { .. } => {
                    let Some(queued) = attacks[entry.side].take() else {
                        continue;
                    };
                    let Some(current) = self.sides[entry.side].active_slot() else {
                        continue;
                    };
                    if current != queued.slot && self.config.forfeit_on_faint {
                        tracing::debug!(side = %entry.side, skill = %queued.skill.name, "attack forfeited");
                        continue;
                    }
                    self.execute_attack(entry.side, &queued.skill, chooser)?;
                }
            }
        }

        if !self.outcome.is_terminal() {
            let outcome = check_end(&self.sides[SideId::A], &self.sides[SideId::B]);
            if outcome.is_terminal() {
                self.conclude(outcome);
            }
        }

        tracing::debug!(turn, outcome = %self.outcome, "turn resolved");
        Ok(self.outcome)
    }

    /// Ask both controllers for an action, then resolve the turn.
    pub fn play_turn(
        &mut self,
        a: &mut dyn Controller,
        b: &mut dyn Controller,
    ) -> BattleResult<BattleOutcome> {
        let action_a = a.choose_action(SideId::A, self);
        let action_b = b.choose_action(SideId::B, self);
        let mut controllers = Controllers::new(a, b);
        self.resolve_turn(action_a, action_b, &mut controllers)
    }

    /// Play turns until the battle ends or `max_turns` is reached.
    ///
    /// Returns `BattleOutcome::Ongoing` if the turn cap stopped the battle.
    pub fn run(
        &mut self,
        a: &mut dyn Controller,
        b: &mut dyn Controller,
    ) -> BattleResult<BattleOutcome> {
        while !self.outcome.is_terminal() {
            if self.config.turn_limit_reached(self.turn) {
                tracing::debug!(turns = self.turn, "turn limit reached");
                break;
            }
            self.play_turn(a, b)?;
        }
        Ok(self.outcome)
    }

    fn apply_swap(&mut self, side: SideId, target: usize) {
        let s = &mut self.sides[side];
        let from = s.active().map(|c| c.id);
        s.set_active(Some(target));
        let Some(to) = s.active().map(|c| c.id) else {
            return;
        };

        tracing::debug!(side = %side, ?from, %to, "swap");
        self.emit(BattleEvent::SwapPerformed {
            side,
            from,
            to,
            forced: false,
        });
    }

    fn execute_attack(
        &mut self,
        side: SideId,
        skill: &Skill,
        chooser: &mut dyn ReplacementChooser,
    ) -> BattleResult<()> {
        let target_side = side.opponent();

        let attacker = self.sides[side]
            .active()
            .ok_or(BattleError::NoActiveCreature { side })?;
        let defender = self.sides[target_side]
            .active()
            .ok_or(BattleError::NoActiveCreature { side: target_side })?;
        let damage = compute_damage(attacker, defender, skill)?;
        let attacker_id = attacker.id;

        let defender = self.sides[target_side]
            .active_mut()
            .ok_or(BattleError::NoActiveCreature { side: target_side })?;
        defender.take_damage(damage.amount);
        let defender_id = defender.id;
        let defender_hp = defender.hp();
        let fainted = defender.is_fainted();

        tracing::debug!(
            side = %side,
            attacker = %attacker_id,
            defender = %defender_id,
            skill = %skill.name,
            damage = damage.amount,
            multiplier = damage.multiplier,
            defender_hp,
            "attack"
        );
        self.emit(BattleEvent::AttackPerformed {
            side,
            attacker: attacker_id,
            defender: defender_id,
            skill: skill.name.clone(),
            damage: damage.amount,
            multiplier: damage.multiplier,
            defender_hp,
        });

        if fainted {
            tracing::debug!(side = %target_side, creature = %defender_id, "fainted");
            self.emit(BattleEvent::CreatureFainted {
                side: target_side,
                creature: defender_id,
            });
            self.force_swap(target_side, chooser)?;

            let outcome = check_end(&self.sides[SideId::A], &self.sides[SideId::B]);
            if outcome.is_terminal() {
                self.conclude(outcome);
            }
        }

        Ok(())
    }

    fn conclude(&mut self, outcome: BattleOutcome) {
        tracing::debug!(turn = self.turn, %outcome, "battle ended");
        self.outcome = outcome;
        self.emit(BattleEvent::BattleEnded { outcome });
    }
}

fn queue_attack(side: &Side, action: Action) -> Option<QueuedAttack> {
    let Action::Attack { skill } = action else {
        return None;
    };
    let slot = side.active_slot()?;
    let skill = side.active()?.skill(skill)?.clone();
    Some(QueuedAttack { slot, skill })
}

fn active_speed(side: &Side) -> u32 {
    side.active().map_or(0, |c| c.stats.speed)
}
