//! Damage calculation.
//!
//! - Physical: `attack + base_damage - defense`
//! - Special: `(sp_attack / sp_defense) * base_damage`, real-valued
//!
//! The raw value is scaled by type effectiveness, floored, and clamped to at
//! least [`MIN_DAMAGE`] so every hit makes progress.

use serde::{Deserialize, Serialize};

use crate::core::{effectiveness, Creature, Skill, SkillCategory};
use crate::error::{BattleError, BattleResult};

/// Lower bound on damage from any hit.
pub const MIN_DAMAGE: u32 = 1;

/// Result of a damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    /// Hp to remove from the defender (before clamping to its current hp).
    pub amount: u32,
    /// Type-effectiveness multiplier that was applied.
    pub multiplier: f64,
}

/// Compute the damage `attacker` deals to `defender` with `skill`.
///
/// Pure: the defender's hp is left for the caller to mutate.
///
/// # Errors
///
/// [`BattleError::ZeroSpecialDefense`] for a special skill against a defender
/// with zero special defense.
///
/// ```
/// use creature_battle::core::{Creature, CreatureId, Element, Skill, Stats};
/// use creature_battle::rules::compute_damage;
///
/// let mut stats = Stats::uniform(10);
/// stats.sp_attack = 20;
/// let attacker = Creature::new(CreatureId::new(1), "Ember", Element::Fire, stats);
/// let defender = Creature::new(CreatureId::new(2), "Sprout", Element::Leaf, Stats::uniform(10));
///
/// let damage = compute_damage(&attacker, &defender, &Skill::special("Flame", Element::Fire, 10)).unwrap();
/// assert_eq!(damage.amount, 40);
/// assert_eq!(damage.multiplier, 2.0);
/// ```
pub fn compute_damage(attacker: &Creature, defender: &Creature, skill: &Skill) -> BattleResult<Damage> {
    let base = f64::from(skill.base_damage);

    let raw = match skill.category {
        SkillCategory::Physical => {
            f64::from(attacker.stats.attack) + base - f64::from(defender.stats.defense)
        }
        SkillCategory::Special => {
            if defender.stats.sp_defense == 0 {
                return Err(BattleError::ZeroSpecialDefense { id: defender.id });
            }
            f64::from(attacker.stats.sp_attack) / f64::from(defender.stats.sp_defense) * base
        }
    };

    let multiplier = effectiveness(skill.element, defender.element);

    // Float-to-int casts saturate, so negative results land on 0 before the floor.
    let amount = ((raw * multiplier).floor() as u32).max(MIN_DAMAGE);

    Ok(Damage { amount, multiplier })
}
