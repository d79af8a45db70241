//! Text shown in the battle's message box.

use crate::combat::{Resolution, ResolutionKind};
use crate::state::Move;

pub(crate) fn prompt(player: &str) -> String {
    format!("What will {player} do?")
}

pub(crate) fn action_started(actor: &str, mv: &Move) -> String {
    if mv.is_heal() {
        format!("{actor} is using {}!", mv.name)
    } else {
        format!("{actor} used {}!", mv.name)
    }
}

pub(crate) fn resolved(actor: &str, target: &str, resolution: &Resolution) -> String {
    match resolution.kind {
        ResolutionKind::Heal => format!("{actor} healed for {} HP!", resolution.applied),
        ResolutionKind::Damage if resolution.fainted => format!("{target} fainted!"),
        ResolutionKind::Damage => format!("{target} took {} damage!", resolution.applied),
    }
}

pub(crate) fn victory(winner: &str) -> String {
    format!("{winner} wins! Press R to restart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ResolutionTarget;
    use crate::state::Element;

    fn damage(applied: u32, new_hp: u32) -> Resolution {
        Resolution {
            kind: ResolutionKind::Damage,
            target: ResolutionTarget::Defender,
            requested: 35,
            applied,
            previous_hp: applied + new_hp,
            new_hp,
            fainted: new_hp == 0,
        }
    }

    #[test]
    fn heals_read_as_in_progress() {
        let heal = Move::new("Roost", -21, Element::Heal);
        let flame = Move::new("Flamethrower", 28, Element::Fire);
        assert_eq!(action_started("Charizard", &heal), "Charizard is using Roost!");
        assert_eq!(action_started("Charizard", &flame), "Charizard used Flamethrower!");
    }

    #[test]
    fn resolution_reports_the_applied_amount() {
        let text = resolved("Charizard", "Pikachu", &damage(20, 0));
        assert_eq!(text, "Pikachu fainted!");

        let text = resolved("Charizard", "Pikachu", &damage(28, 72));
        assert_eq!(text, "Pikachu took 28 damage!");
    }
}
