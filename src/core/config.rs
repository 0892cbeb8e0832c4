//! Battle configuration.

use serde::{Deserialize, Serialize};

/// Battle configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for the tie-break RNG.
    /// Same seed produces identical battles for identical inputs.
    pub seed: u64,

    /// Turn cap for `Battle::run` (0 = unlimited).
    pub max_turns: u32,

    /// Drop a queued attack whose creature fainted earlier in the turn.
    /// When false, the forced replacement carries out the queued skill.
    pub forfeit_on_faint: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_turns: 0,
            forfeit_on_faint: false,
        }
    }
}

impl BattleConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    #[must_use]
    pub fn with_forfeit_on_faint(mut self, forfeit: bool) -> Self {
        self.forfeit_on_faint = forfeit;
        self
    }

    /// True when `turn` has reached the configured cap.
    #[must_use]
    pub fn turn_limit_reached(&self, turn: u32) -> bool {
        self.max_turns != 0 && turn >= self.max_turns
    }
}
