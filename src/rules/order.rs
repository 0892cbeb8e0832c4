//! Turn order.
//!
//! Rules, in priority order:
//! 1. A swap always resolves before an attack. Two swaps resolve A then B;
//!    neither deals damage so the order carries no outcome.
//! 2. Between two attacks, the faster active creature goes first.
//! 3. An exact speed tie is broken by one coin flip for the turn.
//!
//! The RNG is only consumed for a tie, so replaying the same inputs against
//! the same RNG state always yields the same order.

use crate::core::{Action, BattleRng, SideId};

/// One side's queued action, with the speed of the creature that queued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Queued {
    pub side: SideId,
    pub action: Action,
    pub speed: u32,
}

impl Queued {
    #[must_use]
    pub const fn new(side: SideId, action: Action, speed: u32) -> Self {
        Self { side, action, speed }
    }
}

/// Order two queued actions.
///
/// ```
/// use creature_battle::core::{Action, BattleRng, SideId};
/// use creature_battle::rules::{resolve_order, Queued};
///
/// let mut rng = BattleRng::new(1);
/// let slow_swap = Queued::new(SideId::A, Action::Swap { target: 1 }, 1);
/// let fast_attack = Queued::new(SideId::B, Action::Attack { skill: 0 }, 99);
///
/// let [first, second] = resolve_order(slow_swap, fast_attack, &mut rng);
/// assert_eq!(first.side, SideId::A);
/// assert_eq!(second.side, SideId::B);
/// ```
pub fn resolve_order(a: Queued, b: Queued, rng: &mut BattleRng) -> [Queued; 2] {
    debug_assert_ne!(a.side, b.side, "both entries belong to the same side");

    match (a.action.is_swap(), b.action.is_swap()) {
        (true, _) => [a, b],
        (false, true) => [b, a],
        (false, false) => {
            if a.speed > b.speed {
                [a, b]
            } else if b.speed > a.speed {
                [b, a]
            } else {
                let a_first = rng.coin_flip();
                tracing::trace!(speed = a.speed, a_first, "speed tie broken by coin flip");
                if a_first {
                    [a, b]
                } else {
                    [b, a]
                }
            }
        }
    }
}
