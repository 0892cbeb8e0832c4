//! Core battle types: elements, creatures, sides, actions, RNG, configuration.
//!
//! Everything here is plain data plus the invariants that keep it valid.
//! Rules that combine these types live in `rules`; the stateful engine lives
//! in `battle`.

pub mod element;
pub mod creature;
pub mod side;
pub mod action;
pub mod rng;
pub mod config;

pub use element::{effectiveness, Element};
pub use creature::{Creature, CreatureId, Skill, SkillCategory, Stats};
pub use side::{Control, Side, SideId, SideMap};
pub use action::{Action, ActionRecord};
pub use rng::{BattleRng, BattleRngState};
pub use config::BattleConfig;
