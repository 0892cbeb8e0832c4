//! Pure battle rules.
//!
//! Nothing in this module mutates a battle. The executor in `battle` calls
//! into these functions and applies their results.

pub mod damage;
pub mod order;
pub mod outcome;

pub use damage::{compute_damage, Damage, MIN_DAMAGE};
pub use order::{resolve_order, Queued};
pub use outcome::{check_end, BattleOutcome};
