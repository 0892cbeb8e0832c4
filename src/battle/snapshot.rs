//! Battle snapshots.
//!
//! A snapshot captures everything needed to resume a battle exactly,
//! including the RNG stream position, so a restored battle breaks speed ties
//! the same way the original would have. Pending events are not captured.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, BattleConfig, BattleRng, BattleRngState, Side, SideMap};
use crate::error::BattleResult;
use crate::rules::BattleOutcome;

use super::Battle;

/// Serializable battle state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub config: BattleConfig,
    pub sides: SideMap<Side>,
    pub rng: BattleRngState,
    pub turn: u32,
    pub sequence: u32,
    pub outcome: BattleOutcome,
    pub history: Vec<ActionRecord>,
}

impl Battle {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            config: self.config.clone(),
            sides: self.sides.clone(),
            rng: self.rng.state(),
            turn: self.turn,
            sequence: self.sequence,
            outcome: self.outcome,
            history: self.history.clone(),
        }
    }

    /// Resume from a snapshot.
    ///
    /// # Errors
    ///
    /// Configuration errors if either side fails validation, or if an
    /// ongoing battle has a side without a standing active creature.
    pub fn restore(mut snapshot: BattleSnapshot) -> BattleResult<Self> {
        let ongoing = !snapshot.outcome.is_terminal();
        for (id, side) in snapshot.sides.iter_mut() {
            side.id = id;
            side.validate_resumed(ongoing)?;
        }

        Ok(Self {
            rng: BattleRng::from_state(&snapshot.rng),
            config: snapshot.config,
            sides: snapshot.sides,
            turn: snapshot.turn,
            sequence: snapshot.sequence,
            outcome: snapshot.outcome,
            history: snapshot.history,
            events: Vec::new(),
        })
    }
}
