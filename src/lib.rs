//! # creature-battle
//!
//! Resolution engine for turn-based creature battles.
//!
//! Each turn both sides queue one action, attack or swap. The engine orders
//! the two, applies damage with type effectiveness, replaces knocked-out
//! creatures, and reports when a side has nothing left to fight with.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering, input or persistence. Decisions come
//!    from `Controller` implementations; what happened goes out as
//!    `BattleEvent`s.
//!
//! 2. **Fail Fast on Contract Violations**: Illegal actions are rejected
//!    before any state changes. Knockouts and draws are ordinary outcomes,
//!    not errors.
//!
//! 3. **Deterministic**: The only randomness (speed ties) comes from a seeded
//!    `BattleRng`, so the same seed and inputs always replay the same battle.
//!
//! ## Modules
//!
//! - `core`: Elements, creatures, skills, sides, actions, RNG, configuration
//! - `rules`: Type effectiveness, damage, turn order, battle-end detection
//! - `battle`: The stateful engine: turn executor, forced swaps, controllers,
//!   events, snapshots
//! - `error`: Contract-violation and configuration errors
//!
//! ## Example
//!
//! ```
//! use creature_battle::prelude::*;
//!
//! let mut stats = Stats::uniform(10);
//! stats.sp_attack = 20;
//! let ember = Creature::new(CreatureId::new(1), "Ember", Element::Fire, stats)
//!     .with_skill(Skill::special("Flame", Element::Fire, 10));
//! let sprout = Creature::new(CreatureId::new(2), "Sprout", Element::Leaf, Stats::uniform(10))
//!     .with_skill(Skill::physical("Tackle", Element::Normal, 5));
//!
//! let red = Side::new(SideId::A, "Red", Control::Human, vec![ember]).unwrap();
//! let blue = Side::new(SideId::B, "Blue", Control::Bot, vec![sprout]).unwrap();
//! let mut battle = Battle::new(BattleConfig::default(), red, blue).unwrap();
//!
//! let attack = Action::Attack { skill: 0 };
//! let outcome = battle.resolve_turn(attack, attack, &mut FirstEligible).unwrap();
//!
//! // 40 damage from a super-effective special hit knocks out Sprout.
//! assert_eq!(outcome, BattleOutcome::Loss(SideId::B));
//! ```

pub mod core;
pub mod rules;
pub mod battle;
pub mod error;

pub use crate::core::{
    effectiveness, Element,
    Creature, CreatureId, Skill, SkillCategory, Stats,
    Control, Side, SideId, SideMap,
    Action, ActionRecord,
    BattleRng, BattleRngState,
    BattleConfig,
};

pub use crate::rules::{
    check_end, compute_damage, resolve_order,
    BattleOutcome, Damage, Queued, MIN_DAMAGE,
};

pub use crate::battle::{
    Battle, BattleEvent, BattleSnapshot,
    Controller, Controllers, FirstEligible, RandomBot, ReplacementChooser,
};

pub use crate::error::{BattleError, BattleResult, ErrorKind};

/// Everything a host typically needs, in one import.
pub mod prelude {
    pub use crate::battle::{
        Battle, BattleEvent, Controller, FirstEligible, RandomBot, ReplacementChooser,
    };
    pub use crate::core::{
        Action, BattleConfig, Control, Creature, CreatureId, Element, Side, SideId, Skill, Stats,
    };
    pub use crate::error::{BattleError, BattleResult};
    pub use crate::rules::BattleOutcome;
}
