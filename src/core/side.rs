//! Sides and per-side storage.
//!
//! ## SideId
//!
//! A battle always has exactly two sides, `A` and `B`.
//!
//! ## SideMap
//!
//! Two-entry storage indexed by `SideId`, used for anything the engine keeps
//! once per side (parties, queued skills, controllers).
//!
//! ## Side
//!
//! A party of creatures plus the slot of the one currently active.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::creature::Creature;
use crate::error::{BattleError, BattleResult};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideId {
    A,
    B,
}

impl SideId {
    /// Both sides, in resolution order.
    pub const BOTH: [SideId; 2] = [SideId::A, SideId::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            SideId::A => SideId::B,
            SideId::B => SideId::A,
        }
    }

    /// Storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SideId::A => 0,
            SideId::B => 1,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideId::A => write!(f, "Side A"),
            SideId::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use creature_battle::core::{SideId, SideMap};
///
/// let mut wins = SideMap::with_value(0u32);
/// wins[SideId::B] += 1;
/// assert_eq!(wins[SideId::A], 0);
/// assert_eq!(wins[SideId::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit values for each side.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(SideId) -> T) -> Self {
        Self {
            data: [factory(SideId::A), factory(SideId::B)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Iterate over (SideId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SideId, &T)> {
        SideId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (SideId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SideId, &mut T)> {
        SideId::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Consume the map, returning `(a, b)`.
    pub fn into_pair(self) -> (T, T) {
        let [a, b] = self.data;
        (a, b)
    }
}

impl<T> Index<SideId> for SideMap<T> {
    type Output = T;

    fn index(&self, side: SideId) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<SideId> for SideMap<T> {
    fn index_mut(&mut self, side: SideId) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}

/// Who makes decisions for a side. Informational: the engine treats both
/// the same and defers every choice to a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    #[default]
    Human,
    Bot,
}

/// A side's party and its active creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub id: SideId,
    pub name: String,
    pub control: Control,
    party: Vec<Creature>,
    /// Slot of the active creature. `None` only after the party is exhausted.
    active: Option<usize>,
}

impl Side {
    /// Create a side with `party[0]` active.
    ///
    /// Rejects an empty party, duplicate creature ids, invalid creatures,
    /// and a fainted lead.
    pub fn new(
        id: SideId,
        name: impl Into<String>,
        control: Control,
        party: Vec<Creature>,
    ) -> BattleResult<Self> {
        let side = Self {
            id,
            name: name.into(),
            control,
            party,
            active: Some(0),
        };
        side.validate()?;
        Ok(side)
    }

    /// Check that this side can start a battle.
    pub fn validate(&self) -> BattleResult<()> {
        let lead = self.validate_party()?;

        match self.active() {
            Some(active) if !active.is_fainted() => Ok(()),
            Some(active) => Err(BattleError::FaintedLead { side: self.id, id: active.id }),
            None => Err(BattleError::FaintedLead { side: self.id, id: lead.id }),
        }
    }

    /// Check a side resumed mid-battle. While the battle is `ongoing` the
    /// active slot must hold a creature still standing; afterwards it may be
    /// empty, but never out of range.
    pub fn validate_resumed(&self, ongoing: bool) -> BattleResult<()> {
        self.validate_party()?;

        let active = match self.active {
            Some(slot) => Some(
                self.party
                    .get(slot)
                    .ok_or(BattleError::InvalidActive { side: self.id })?,
            ),
            None => None,
        };
        if ongoing && !active.is_some_and(|c| !c.is_fainted()) {
            return Err(BattleError::InvalidActive { side: self.id });
        }
        Ok(())
    }

    /// Party-wide checks. Returns the lead.
    fn validate_party(&self) -> BattleResult<&Creature> {
        let lead = self.party.first().ok_or(BattleError::EmptyParty { side: self.id })?;

        let mut seen = FxHashSet::default();
        for creature in &self.party {
            creature.validate()?;
            if !seen.insert(creature.id) {
                return Err(BattleError::DuplicateCreature {
                    side: self.id,
                    id: creature.id,
                });
            }
        }
        Ok(lead)
    }

    /// The full party, in slot order.
    #[must_use]
    pub fn party(&self) -> &[Creature] {
        &self.party
    }

    /// Creature in `slot`, if any.
    #[must_use]
    pub fn creature(&self, slot: usize) -> Option<&Creature> {
        self.party.get(slot)
    }

    pub(crate) fn creature_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.party.get_mut(slot)
    }

    /// Slot of the active creature.
    #[must_use]
    pub fn active_slot(&self) -> Option<usize> {
        self.active
    }

    /// The active creature.
    #[must_use]
    pub fn active(&self) -> Option<&Creature> {
        self.active.and_then(|slot| self.party.get(slot))
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Creature> {
        self.active.and_then(|slot| self.party.get_mut(slot))
    }

    /// Make `slot` active. Callers validate eligibility first.
    pub(crate) fn set_active(&mut self, slot: Option<usize>) {
        self.active = slot;
    }

    /// Slots of creatures that could replace a fainted active creature.
    #[must_use]
    pub fn eligible_replacements(&self) -> Vec<usize> {
        self.party
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_fainted())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Number of creatures still standing.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.party.iter().filter(|c| !c.is_fainted()).count()
    }

    /// True when every creature in the party has fainted.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.party.iter().all(Creature::is_fainted)
    }

    /// Restore every creature to full health and `party[0]` to active.
    pub fn reset(&mut self) {
        for creature in &mut self.party {
            creature.reset_hp();
        }
        self.active = Some(0);
    }
}
