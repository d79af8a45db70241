use crate::state::Position;

/// Battle timing constants and tunable parameters.
///
/// Durations are expressed in seconds of host time. By default an effect plays
/// for 1.5 s, the health bar slides for 0.5 s and the turn passes after a
/// further 1 s pause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// How long a move's visual effect plays before its outcome is applied.
    pub effect_duration_secs: f64,
    /// How long the displayed health takes to slide to its new value.
    pub tween_duration_secs: f64,
    /// Pause between a resolved action and the next turn.
    pub post_action_wait_secs: f64,
    /// How long the damaged combatant flashes after a hit.
    pub flash_duration_secs: f64,
    /// Screen anchor of the player's combatant (effect origin/target).
    pub player_anchor: Position,
    /// Screen anchor of the opponent's combatant.
    pub opponent_anchor: Position,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Every combatant carries exactly this many moves (a 2×2 menu).
    pub const MOVES_PER_COMBATANT: usize = 4;
    /// A session needs two distinct combatants.
    pub const MIN_ROSTER_SIZE: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EFFECT_DURATION_SECS: f64 = 1.5;
    pub const DEFAULT_TWEEN_DURATION_SECS: f64 = 0.5;
    pub const DEFAULT_POST_ACTION_WAIT_SECS: f64 = 1.0;
    pub const DEFAULT_FLASH_DURATION_SECS: f64 = 0.5;
    pub const DEFAULT_PLAYER_ANCHOR: Position = Position::new(150, 150);
    pub const DEFAULT_OPPONENT_ANCHOR: Position = Position::new(650, 150);

    pub fn new() -> Self {
        Self {
            effect_duration_secs: Self::DEFAULT_EFFECT_DURATION_SECS,
            tween_duration_secs: Self::DEFAULT_TWEEN_DURATION_SECS,
            post_action_wait_secs: Self::DEFAULT_POST_ACTION_WAIT_SECS,
            flash_duration_secs: Self::DEFAULT_FLASH_DURATION_SECS,
            player_anchor: Self::DEFAULT_PLAYER_ANCHOR,
            opponent_anchor: Self::DEFAULT_OPPONENT_ANCHOR,
        }
    }

    /// Returns a copy with every duration scaled by `factor`.
    ///
    /// Negative or non-finite factors are treated as zero.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        Self {
            effect_duration_secs: self.effect_duration_secs * factor,
            tween_duration_secs: self.tween_duration_secs * factor,
            post_action_wait_secs: self.post_action_wait_secs * factor,
            flash_duration_secs: self.flash_duration_secs * factor,
            ..self.clone()
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
