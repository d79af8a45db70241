use crate::state::{Move, Side};
use crate::timing::{EffectTimer, Timestamp};

use super::input::BattleInput;

/// The move currently being played out, kept next to its effect timer.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAction {
    pub actor: Side,
    pub move_index: usize,
    pub mv: Move,
}

/// Current phase of a battle, with the data only that phase needs.
///
/// The effect timer exists only while [`BattlePhase::Animating`]; leaving
/// the phase drops it, so an action cannot complete twice.
#[derive(Clone, Debug, PartialEq)]
pub enum BattlePhase {
    /// Waiting for the player to pick a move.
    Selecting,
    /// A move's effect is playing; its outcome applies when the timer expires.
    Animating {
        effect: EffectTimer,
        action: PendingAction,
    },
    /// Pause after an outcome before the turn passes on.
    PostActionWait { deadline: Timestamp },
    /// Someone fainted. Only Restart leaves this phase.
    BattleEnded { winner: Side },
}

/// Data-less mirror of [`BattlePhase`], for logs, events and snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    Selecting,
    Animating,
    PostActionWait,
    BattleEnded,
}

impl BattlePhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Selecting => PhaseKind::Selecting,
            Self::Animating { .. } => PhaseKind::Animating,
            Self::PostActionWait { .. } => PhaseKind::PostActionWait,
            Self::BattleEnded { .. } => PhaseKind::BattleEnded,
        }
    }

    /// Whether `input` has any effect in this phase.
    ///
    /// Cursor movement and Confirm only count while selecting; Restart only
    /// once the battle has ended. Everything else is dropped.
    pub fn accepts(&self, input: &BattleInput) -> bool {
        match (self, input) {
            (Self::Selecting, BattleInput::MoveCursor(_) | BattleInput::Confirm) => true,
            (Self::BattleEnded { .. }, BattleInput::Restart) => true,
            _ => false,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::BattleEnded { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn effect(&self) -> Option<&EffectTimer> {
        match self {
            Self::Animating { effect, .. } => Some(effect),
            _ => None,
        }
    }

    pub fn wait_deadline(&self) -> Option<Timestamp> {
        match self {
            Self::PostActionWait { deadline } => Some(*deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CursorDirection;

    #[test]
    fn only_selecting_takes_menu_input() {
        let cursor = BattleInput::MoveCursor(CursorDirection::Down);
        assert!(BattlePhase::Selecting.accepts(&cursor));
        assert!(BattlePhase::Selecting.accepts(&BattleInput::Confirm));
        assert!(!BattlePhase::Selecting.accepts(&BattleInput::Restart));

        let waiting = BattlePhase::PostActionWait {
            deadline: Timestamp(1.0),
        };
        assert!(!waiting.accepts(&cursor));
        assert!(!waiting.accepts(&BattleInput::Confirm));
        assert!(!waiting.accepts(&BattleInput::Restart));
    }

    #[test]
    fn only_ended_takes_restart() {
        let ended = BattlePhase::BattleEnded {
            winner: Side::Player,
        };
        assert!(ended.accepts(&BattleInput::Restart));
        assert!(!ended.accepts(&BattleInput::Confirm));
        assert_eq!(ended.winner(), Some(Side::Player));
    }

    #[test]
    fn kinds_render_like_the_state_names() {
        assert_eq!(PhaseKind::PostActionWait.to_string(), "POST_ACTION_WAIT");
        assert_eq!(PhaseKind::BattleEnded.as_ref(), "BATTLE_ENDED");
    }
}
