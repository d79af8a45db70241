//! Read-only view of a session for renderers.

use crate::engine::PhaseKind;
use crate::session::BattleSession;
use crate::state::{Combatant, Element, Position, Side};
use crate::timing::Timestamp;

/// One combatant as it should be drawn at a given instant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub name: String,
    pub asset: String,
    pub max_hp: u32,
    /// Authoritative HP.
    pub hp: u32,
    /// Health bar value, following any running tween.
    pub display_hp: f64,
    /// Damage flash strength in `[0, 0.7]`, while one is running.
    pub flash: Option<f64>,
}

impl CombatantView {
    /// Filled share of the health bar, in `[0, 1]`.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.display_hp / f64::from(self.max_hp)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveView {
    pub name: String,
    pub power: i32,
    pub element: Element,
    pub selected: bool,
}

/// The running visual effect, for the rendering layer to interpret.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectView {
    pub kind: Element,
    pub from: Position,
    pub to: Position,
    /// Elapsed fraction in `[0, 1]`.
    pub progress: f64,
}

impl EffectView {
    /// Where a travelling effect currently is.
    pub fn position(&self) -> (f64, f64) {
        self.from.lerp(self.to, self.progress)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub phase: PhaseKind,
    pub turn_owner: Side,
    pub player: CombatantView,
    pub opponent: CombatantView,
    pub cursor: usize,
    /// The player's moves, in menu order.
    pub moves: Vec<MoveView>,
    pub message: String,
    pub winner: Option<String>,
    pub effect: Option<EffectView>,
}

impl RenderSnapshot {
    pub fn combatant(&self, side: Side) -> &CombatantView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Whether the move menu should be interactive.
    pub fn menu_active(&self) -> bool {
        self.phase == PhaseKind::Selecting
    }

    /// Headline for the end screen.
    pub fn banner(&self) -> Option<String> {
        self.winner
            .as_deref()
            .map(|winner| format!("{winner} wins! Press R to restart"))
    }
}

impl BattleSession {
    pub fn snapshot(&self, now: Timestamp) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase_kind(),
            turn_owner: self.turn_owner(),
            player: self.combatant_view(Side::Player, now),
            opponent: self.combatant_view(Side::Opponent, now),
            cursor: self.selected_move_index(),
            moves: self
                .player()
                .moves()
                .iter()
                .enumerate()
                .map(|(index, mv)| MoveView {
                    name: mv.name.clone(),
                    power: mv.power,
                    element: mv.element,
                    selected: index == self.selected_move_index(),
                })
                .collect(),
            message: self.message().to_owned(),
            winner: self.winner().map(|winner| winner.name().to_owned()),
            effect: self.active_effect().map(|effect| EffectView {
                kind: effect.kind(),
                from: effect.from(),
                to: effect.to(),
                progress: effect.progress(now),
            }),
        }
    }

    fn combatant_view(&self, side: Side, now: Timestamp) -> CombatantView {
        let combatant: &Combatant = self.combatant(side);
        CombatantView {
            name: combatant.name().to_owned(),
            asset: combatant.asset().to_owned(),
            max_hp: combatant.max_hp(),
            hp: combatant.hp(),
            display_hp: self.display_hp(side, now),
            flash: self
                .active_flash()
                .filter(|flash| flash.target() == side)
                .and_then(|flash| flash.intensity(now)),
        }
    }
}
