//! Battle events.
//!
//! The engine records what happened during resolution so a host can render
//! it. Events are advisory: nothing in the engine reads them back.

use serde::{Deserialize, Serialize};

use crate::core::{CreatureId, SideId};
use crate::rules::BattleOutcome;

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    TurnStarted {
        turn: u32,
    },
    /// A side changed its active creature. `forced` is true for a
    /// replacement after a knockout.
    SwapPerformed {
        side: SideId,
        from: Option<CreatureId>,
        to: CreatureId,
        forced: bool,
    },
    AttackPerformed {
        side: SideId,
        attacker: CreatureId,
        defender: CreatureId,
        skill: String,
        damage: u32,
        multiplier: f64,
        defender_hp: u32,
    },
    CreatureFainted {
        side: SideId,
        creature: CreatureId,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// The side this event concerns, if it concerns one.
    #[must_use]
    pub fn side(&self) -> Option<SideId> {
        match self {
            BattleEvent::SwapPerformed { side, .. }
            | BattleEvent::AttackPerformed { side, .. }
            | BattleEvent::CreatureFainted { side, .. } => Some(*side),
            BattleEvent::TurnStarted { .. } | BattleEvent::BattleEnded { .. } => None,
        }
    }
}
