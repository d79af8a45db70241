//! Damage and healing resolution.

use crate::state::{Combatant, Move};

/// Whether a resolved move removed or restored HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionKind {
    Damage,
    Heal,
}

/// Which of the two combatants passed to [`resolve`] is affected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionTarget {
    /// Healing lands on the user.
    Attacker,
    /// Offensive moves land on the other side.
    Defender,
}

/// Numeric outcome of one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub kind: ResolutionKind,
    pub target: ResolutionTarget,
    /// Requested magnitude before clamping.
    pub requested: u32,
    /// Amount actually removed or restored.
    pub applied: u32,
    /// Target HP before the move.
    pub previous_hp: u32,
    /// Target HP after the move, always within `[0, max_hp]`.
    pub new_hp: u32,
    /// The target dropped to exactly 0. Never set for heals.
    pub fainted: bool,
}

/// Resolves `mv` used by `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// heal (power < 0):
///     applied = min(-power, attacker.max_hp - attacker.hp)
///     new_hp  = attacker.hp + applied
///
/// offense (power >= 0):
///     applied = min(power, defender.hp)
///     new_hp  = defender.hp - applied
///     fainted = new_hp == 0
/// ```
pub fn resolve(mv: &Move, attacker: &Combatant, defender: &Combatant) -> Resolution {
    let requested = mv.magnitude();

    if mv.is_heal() {
        let applied = requested.min(attacker.missing_hp());
        return Resolution {
            kind: ResolutionKind::Heal,
            target: ResolutionTarget::Attacker,
            requested,
            applied,
            previous_hp: attacker.hp(),
            new_hp: attacker.hp() + applied,
            fainted: false,
        };
    }

    let applied = requested.min(defender.hp());
    let new_hp = defender.hp() - applied;
    Resolution {
        kind: ResolutionKind::Damage,
        target: ResolutionTarget::Defender,
        requested,
        applied,
        previous_hp: defender.hp(),
        new_hp,
        fainted: new_hp == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Element;
    use proptest::prelude::*;

    fn fighter(name: &str, max_hp: u32, hp: u32) -> Combatant {
        let moves = [
            Move::new("Terremoto", 28, Element::Ground),
            Move::new("Espada Santa", 25, Element::Steel),
            Move::new("Pulso Umbrio", 22, Element::Dark),
            Move::new("Hiperpocion", -25, Element::Heal),
        ];
        Combatant::new(name, "", max_hp, moves).with_hp(hp)
    }

    #[test]
    fn damage_is_subtracted_from_defender() {
        let x = fighter("Ceruledge", 100, 100);
        let y = fighter("Zeraora", 100, 100);
        let outcome = resolve(&x.moves()[0], &x, &y);

        assert_eq!(outcome.kind, ResolutionKind::Damage);
        assert_eq!(outcome.target, ResolutionTarget::Defender);
        assert_eq!(outcome.applied, 28);
        assert_eq!(outcome.new_hp, 72);
        assert!(!outcome.fainted);
    }

    #[test]
    fn overkill_is_clamped_and_faints() {
        let x = fighter("Haxorus", 100, 100);
        let y = fighter("Luxray", 100, 20);
        let guillotina = Move::new("Guillotina", 35, Element::Steel);
        let outcome = resolve(&guillotina, &x, &y);

        assert_eq!(outcome.requested, 35);
        assert_eq!(outcome.applied, 20);
        assert_eq!(outcome.new_hp, 0);
        assert!(outcome.fainted);
    }

    #[test]
    fn heal_targets_attacker_and_is_capped() {
        let x = fighter("Gardevoir", 100, 90);
        let y = fighter("Gengar", 100, 40);
        let outcome = resolve(&x.moves()[3], &x, &y);

        assert_eq!(outcome.kind, ResolutionKind::Heal);
        assert_eq!(outcome.target, ResolutionTarget::Attacker);
        assert_eq!(outcome.applied, 10);
        assert_eq!(outcome.new_hp, 100);
        assert!(!outcome.fainted);
    }

    #[test]
    fn heal_at_zero_hp_never_faints() {
        let x = fighter("Mimikyu", 100, 0);
        let y = fighter("Noivern", 100, 100);
        let outcome = resolve(&x.moves()[3], &x, &y);
        assert_eq!(outcome.new_hp, 25);
        assert!(!outcome.fainted);
    }

    #[test]
    fn zero_power_move_deals_nothing() {
        let x = fighter("Gallade", 100, 100);
        let y = fighter("Zoroark", 100, 50);
        let splash = Move::new("Salpicadura", 0, Element::Water);
        let outcome = resolve(&splash, &x, &y);
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.new_hp, 50);
        assert!(!outcome.fainted);
    }

    proptest! {
        #[test]
        fn hp_stays_within_bounds(
            max_hp in 1u32..500,
            attacker_frac in 0.0f64..=1.0,
            defender_frac in 0.0f64..=1.0,
            power in -400i32..400,
        ) {
            let attacker_hp = (f64::from(max_hp) * attacker_frac) as u32;
            let defender_hp = (f64::from(max_hp) * defender_frac) as u32;
            let attacker = fighter("A", max_hp, attacker_hp);
            let defender = fighter("D", max_hp, defender_hp);
            let mv = Move::new("probe", power, Element::Physical);

            let outcome = resolve(&mv, &attacker, &defender);

            prop_assert!(outcome.new_hp <= max_hp);
            if mv.is_heal() {
                prop_assert_eq!(outcome.applied, mv.magnitude().min(max_hp - attacker_hp));
                prop_assert_eq!(outcome.new_hp, attacker_hp + outcome.applied);
                prop_assert!(!outcome.fainted);
            } else {
                prop_assert_eq!(outcome.applied, mv.magnitude().min(defender_hp));
                prop_assert_eq!(outcome.new_hp, defender_hp - outcome.applied);
                prop_assert_eq!(outcome.fainted, outcome.new_hp == 0);
            }
        }
    }
}
