//! Battle errors.
//!
//! Two families of failure exist, and both are caller bugs rather than
//! battle states:
//!
//! - **Contract violations**: an illegal action or replacement was submitted.
//!   These are rejected before any state is mutated.
//! - **Configuration errors**: creature or party data the engine cannot
//!   battle with (zero special defense, empty party, ...).
//!
//! Knockouts, exhausted parties and draws are ordinary outcomes and never
//! surface here.

use crate::core::{CreatureId, SideId};

/// Classification of a [`BattleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An illegal action or choice was submitted to the engine.
    ContractViolation,
    /// Creature or party data is unusable.
    Configuration,
}

impl ErrorKind {
    /// Short lowercase label, suitable for logging.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContractViolation => "contract violation",
            Self::Configuration => "configuration",
        }
    }
}

/// Errors returned by the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{side}: active creature has no skill in slot {slot}")]
    InvalidSkill { side: SideId, slot: usize },

    #[error("{side}: party has no creature in slot {slot}")]
    InvalidSwapTarget { side: SideId, slot: usize },

    #[error("{side}: cannot swap to fainted creature in slot {slot}")]
    SwapToFainted { side: SideId, slot: usize },

    #[error("{side}: creature in slot {slot} is already active")]
    SwapToActive { side: SideId, slot: usize },

    #[error("{side}: slot {slot} is not an eligible replacement")]
    IneligibleReplacement { side: SideId, slot: usize },

    #[error("{side}: no active creature")]
    NoActiveCreature { side: SideId },

    #[error("{side}: fainted active creature must be replaced first")]
    PendingReplacement { side: SideId },

    #[error("battle is already over")]
    BattleOver,

    #[error("{side}: party is empty")]
    EmptyParty { side: SideId },

    #[error("{side}: creature {id} appears more than once")]
    DuplicateCreature { side: SideId, id: CreatureId },

    #[error("{side}: lead creature {id} is fainted")]
    FaintedLead { side: SideId, id: CreatureId },

    #[error("creature {id} has zero special defense")]
    ZeroSpecialDefense { id: CreatureId },

    #[error("creature {id} has zero max hp")]
    ZeroMaxHp { id: CreatureId },

    #[error("creature {id} has no skills")]
    NoSkills { id: CreatureId },

    #[error("creature {id} has {hp} hp, above its max of {max_hp}")]
    HpAboveMax { id: CreatureId, hp: u32, max_hp: u32 },

    #[error("{side}: active slot is missing, out of range or fainted")]
    InvalidActive { side: SideId },
}

impl BattleError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSkill { .. }
            | Self::InvalidSwapTarget { .. }
            | Self::SwapToFainted { .. }
            | Self::SwapToActive { .. }
            | Self::IneligibleReplacement { .. }
            | Self::NoActiveCreature { .. }
            | Self::PendingReplacement { .. }
            | Self::BattleOver => ErrorKind::ContractViolation,
            Self::EmptyParty { .. }
            | Self::DuplicateCreature { .. }
            | Self::FaintedLead { .. }
            | Self::ZeroSpecialDefense { .. }
            | Self::ZeroMaxHp { .. }
            | Self::NoSkills { .. }
            | Self::HpAboveMax { .. }
            | Self::InvalidActive { .. } => ErrorKind::Configuration,
        }
    }

    /// True if the caller submitted an illegal action or choice.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::ContractViolation)
    }
}

/// Result alias used throughout the crate.
pub type BattleResult<T> = Result<T, BattleError>;
