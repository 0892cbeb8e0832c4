//! Elemental types and the type-effectiveness table.
//!
//! The table is a closed triangle: fire beats leaf, leaf beats water,
//! water beats fire. Every other pairing, including same-type matchups and
//! anything involving `Normal`, is neutral.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Multiplier for an attack the defender is weak to.
pub const SUPER_EFFECTIVE: f64 = 2.0;

/// Multiplier for an attack the defender resists.
pub const NOT_VERY_EFFECTIVE: f64 = 0.5;

/// Multiplier for every unlisted pairing.
pub const NEUTRAL: f64 = 1.0;

/// Element shared by creatures and skills.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    #[default]
    Normal,
    Fire,
    Water,
    Leaf,
}

impl Element {
    /// The element this one deals double damage to, if any.
    #[must_use]
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Leaf),
            Element::Water => Some(Element::Fire),
            Element::Leaf => Some(Element::Water),
            Element::Normal => None,
        }
    }
}

/// Damage multiplier for an attack of `attack` element against a defender of
/// `defender` element.
///
/// ```
/// use creature_battle::core::{effectiveness, Element};
///
/// assert_eq!(effectiveness(Element::Fire, Element::Leaf), 2.0);
/// assert_eq!(effectiveness(Element::Fire, Element::Water), 0.5);
/// assert_eq!(effectiveness(Element::Normal, Element::Fire), 1.0);
/// ```
#[must_use]
pub fn effectiveness(attack: Element, defender: Element) -> f64 {
    if attack.beats() == Some(defender) {
        SUPER_EFFECTIVE
    } else if defender.beats() == Some(attack) {
        NOT_VERY_EFFECTIVE
    } else {
        NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_grid() {
        use Element::*;

        let expected = [
            // (attack, defender, multiplier)
            (Normal, Normal, 1.0),
            (Normal, Fire, 1.0),
            (Normal, Water, 1.0),
            (Normal, Leaf, 1.0),
            (Fire, Normal, 1.0),
            (Fire, Fire, 1.0),
            (Fire, Water, 0.5),
            (Fire, Leaf, 2.0),
            (Water, Normal, 1.0),
            (Water, Fire, 2.0),
            (Water, Water, 1.0),
            (Water, Leaf, 0.5),
            (Leaf, Normal, 1.0),
            (Leaf, Fire, 0.5),
            (Leaf, Water, 2.0),
            (Leaf, Leaf, 1.0),
        ];

        assert_eq!(expected.len(), Element::iter().count().pow(2));
        for (attack, defender, multiplier) in expected {
            assert_eq!(
                effectiveness(attack, defender),
                multiplier,
                "{} vs {}",
                attack,
                defender
            );
        }
    }

    #[test]
    fn test_inverse_pairs() {
        for attack in Element::iter() {
            for defender in Element::iter() {
                let forward = effectiveness(attack, defender);
                let backward = effectiveness(defender, attack);
                if forward == SUPER_EFFECTIVE {
                    assert_eq!(backward, NOT_VERY_EFFECTIVE);
                } else if forward == NOT_VERY_EFFECTIVE {
                    assert_eq!(backward, SUPER_EFFECTIVE);
                } else if forward == NEUTRAL {
                    assert_eq!(backward, NEUTRAL);
                }
            }
        }
    }

    #[test]
    fn test_same_type_is_neutral() {
        for element in Element::iter() {
            assert_eq!(effectiveness(element, element), NEUTRAL);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("leaf".parse::<Element>().unwrap(), Element::Leaf);
        assert_eq!(Element::Water.to_string(), "water");
        assert!("lightning".parse::<Element>().is_err());
    }
}
