//! Battle outcome detection.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideId};

/// State of a battle after a check.
///
/// `check_end` reports a finished battle from the loser's side (`Loss`);
/// [`BattleOutcome::for_side`] gives the same result from either side's
/// perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Ongoing,
    Win(SideId),
    Loss(SideId),
    Draw,
}

impl BattleOutcome {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, BattleOutcome::Ongoing)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub const fn winner(&self) -> Option<SideId> {
        match *self {
            BattleOutcome::Win(side) => Some(side),
            BattleOutcome::Loss(side) => Some(side.opponent()),
            BattleOutcome::Ongoing | BattleOutcome::Draw => None,
        }
    }

    /// The losing side, if there is one.
    #[must_use]
    pub const fn loser(&self) -> Option<SideId> {
        match self.winner() {
            Some(side) => Some(side.opponent()),
            None => None,
        }
    }

    /// This outcome as seen by `side`: `Win(side)`, `Loss(side)`, or unchanged.
    #[must_use]
    pub const fn for_side(&self, side: SideId) -> Self {
        match self.winner() {
            Some(winner) if winner.index() == side.index() => BattleOutcome::Win(side),
            Some(_) => BattleOutcome::Loss(side),
            None => *self,
        }
    }
}

impl std::fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleOutcome::Ongoing => write!(f, "ongoing"),
            BattleOutcome::Win(side) => write!(f, "{} wins", side),
            BattleOutcome::Loss(side) => write!(f, "{} loses", side),
            BattleOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Determine whether the battle between `a` and `b` is over.
///
/// A side whose whole party has fainted loses; both at once is a draw.
#[must_use]
pub fn check_end(a: &Side, b: &Side) -> BattleOutcome {
    match (a.is_defeated(), b.is_defeated()) {
        (true, true) => BattleOutcome::Draw,
        (true, false) => BattleOutcome::Loss(a.id),
        (false, true) => BattleOutcome::Loss(b.id),
        (false, false) => BattleOutcome::Ongoing,
    }
}
