//! Actions a side can queue for a turn.
//!
//! An action is decided when the controller captures it: either an attack
//! with one of the active creature's skills, or a swap to another party
//! slot. The engine never infers the kind from a payload.

use serde::{Deserialize, Serialize};

use super::side::SideId;

/// A queued intent for one side.
///
/// ```
/// use creature_battle::core::Action;
///
/// let attack = Action::Attack { skill: 0 };
/// let swap = Action::Swap { target: 2 };
///
/// assert!(attack.is_attack());
/// assert!(swap.is_swap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// Use the skill in slot `skill` of the active creature.
    Attack { skill: usize },
    /// Make the creature in party slot `target` active.
    Swap { target: usize },
}

impl Action {
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }

    #[must_use]
    pub const fn is_swap(&self) -> bool {
        matches!(self, Action::Swap { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took this action.
    pub side: SideId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Global sequence number across the battle.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: SideId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        assert!(Action::Attack { skill: 1 }.is_attack());
        assert!(!Action::Attack { skill: 1 }.is_swap());
        assert!(Action::Swap { target: 0 }.is_swap());
    }

    #[test]
    fn test_action_wire_shape() {
        let json = serde_json::to_string(&Action::Swap { target: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"swap","target":2}"#);

        let action: Action = serde_json::from_str(r#"{"kind":"attack","skill":1}"#).unwrap();
        assert_eq!(action, Action::Attack { skill: 1 });
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(SideId::B, Action::Attack { skill: 0 }, 3, 5);
        assert_eq!(record.side, SideId::B);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }
}
