/// Visual element of a move.
///
/// Opaque to the battle rules; the renderer picks an effect per element.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Element {
    Fire,
    Electric,
    Heal,
    Physical,
    Water,
    Grass,
    Psychic,
    Ice,
    Dark,
    Steel,
    Fairy,
    Dragon,
    Poison,
    Ground,
}

/// A named action with a signed power.
///
/// `power > 0` damages the defender by that much; `power < 0` heals the user
/// by `-power`. A zero-power move is offensive and deals nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub power: i32,
    pub element: Element,
}

impl Move {
    pub fn new(name: impl Into<String>, power: i32, element: Element) -> Self {
        Self {
            name: name.into(),
            power,
            element,
        }
    }

    /// Healing moves target their user.
    pub const fn is_heal(&self) -> bool {
        self.power < 0
    }

    /// Absolute amount of damage dealt or HP restored before clamping.
    pub const fn magnitude(&self) -> u32 {
        self.power.unsigned_abs()
    }

    /// Effect the renderer should play: healing always shows as [`Element::Heal`].
    pub const fn effect_kind(&self) -> Element {
        if self.is_heal() {
            Element::Heal
        } else {
            self.element
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn heal_moves_are_negative_power() {
        let heal = Move::new("Recuperacion", -25, Element::Psychic);
        assert!(heal.is_heal());
        assert_eq!(heal.magnitude(), 25);
        assert_eq!(heal.effect_kind(), Element::Heal);

        let hit = Move::new("Terremoto", 28, Element::Ground);
        assert!(!hit.is_heal());
        assert_eq!(hit.effect_kind(), Element::Ground);
    }

    #[test]
    fn elements_parse_case_insensitively() {
        assert_eq!("ground".parse::<Element>().unwrap(), Element::Ground);
        assert_eq!("FAIRY".parse::<Element>().unwrap(), Element::Fairy);
        assert!("plasma".parse::<Element>().is_err());
        assert_eq!(Element::iter().count(), 14);
    }
}
