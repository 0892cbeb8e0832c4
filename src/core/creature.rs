//! Creatures, their stats and their skills.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::element::Element;
use crate::error::{BattleError, BattleResult};

/// Unique identifier for a creature within a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Creature({})", self.0)
    }
}

/// Whether a skill uses the physical or special damage formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// `attack + base_damage - defense`
    Physical,
    /// `(sp_attack / sp_defense) * base_damage`
    Special,
}

/// A damaging move a creature can use.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub element: Element,
    pub category: SkillCategory,
    pub base_damage: u32,
}

impl Skill {
    /// Create a physical skill.
    pub fn physical(name: impl Into<String>, element: Element, base_damage: u32) -> Self {
        Self {
            name: name.into(),
            element,
            category: SkillCategory::Physical,
            base_damage,
        }
    }

    /// Create a special skill.
    pub fn special(name: impl Into<String>, element: Element, base_damage: u32) -> Self {
        Self {
            name: name.into(),
            element,
            category: SkillCategory::Special,
            base_damage,
        }
    }

    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.category == SkillCategory::Physical
    }
}

/// Base stats of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Every stat set to `value`. Mostly useful in tests.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            max_hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }
}

/// A battling creature.
///
/// `hp` is kept in `[0, max_hp]`; a creature at 0 hp is fainted.
///
/// ```
/// use creature_battle::core::{Creature, CreatureId, Element, Skill, Stats};
///
/// let mut sprout = Creature::new(CreatureId::new(1), "Sprout", Element::Leaf, Stats::uniform(20))
///     .with_skill(Skill::special("Vine Lash", Element::Leaf, 8));
///
/// assert_eq!(sprout.take_damage(25), 20);
/// assert!(sprout.is_fainted());
///
/// sprout.reset_hp();
/// assert_eq!(sprout.hp(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub element: Element,
    pub stats: Stats,
    hp: u32,
    /// Skills in slot order. Most creatures carry four or fewer.
    pub skills: SmallVec<[Skill; 4]>,
}

impl Creature {
    /// Create a creature at full health with no skills.
    pub fn new(id: CreatureId, name: impl Into<String>, element: Element, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            stats,
            hp: stats.max_hp,
            skills: SmallVec::new(),
        }
    }

    /// Add a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Start at a specific hp instead of full health (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.stats.max_hp);
        self
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Skill in `slot`, if any.
    #[must_use]
    pub fn skill(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot)
    }

    /// Remove up to `amount` hp. Returns the hp actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Restore hp to `max_hp`.
    pub fn reset_hp(&mut self) {
        self.hp = self.stats.max_hp;
    }

    /// Check that this creature can take part in a battle.
    pub fn validate(&self) -> BattleResult<()> {
        if self.stats.max_hp == 0 {
            return Err(BattleError::ZeroMaxHp { id: self.id });
        }
        if self.stats.sp_defense == 0 {
            return Err(BattleError::ZeroSpecialDefense { id: self.id });
        }
        if self.skills.is_empty() {
            return Err(BattleError::NoSkills { id: self.id });
        }
        if self.hp > self.stats.max_hp {
            return Err(BattleError::HpAboveMax {
                id: self.id,
                hp: self.hp,
                max_hp: self.stats.max_hp,
            });
        }
        Ok(())
    }
}
