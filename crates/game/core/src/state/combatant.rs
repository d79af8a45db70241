use crate::config::BattleConfig;

use super::Move;

/// A fighter taking part in a session.
///
/// Two HP values are tracked:
/// - `hp` is authoritative and changes the moment a move resolves.
/// - `displayed_hp` is what the health bar last settled on; it catches up with
///   `hp` when the engine's health tween completes.
///
/// Both stay within `[0, max_hp]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    name: String,
    asset: String,
    max_hp: u32,
    hp: u32,
    displayed_hp: f64,
    moves: [Move; BattleConfig::MOVES_PER_COMBATANT],
}

impl Combatant {
    /// Creates a combatant at full health.
    ///
    /// A `max_hp` of zero is raised to one so the HP invariant holds; rosters
    /// reject such templates before they get here.
    pub fn new(
        name: impl Into<String>,
        asset: impl Into<String>,
        max_hp: u32,
        moves: [Move; BattleConfig::MOVES_PER_COMBATANT],
    ) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            asset: asset.into(),
            max_hp,
            hp: max_hp,
            displayed_hp: f64::from(max_hp),
            moves,
        }
    }

    /// Starts the combatant at `hp` instead of full health (clamped to `max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        let hp = hp.min(self.max_hp);
        self.hp = hp;
        self.displayed_hp = f64::from(hp);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque asset reference handed to the renderer.
    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn displayed_hp(&self) -> f64 {
        self.displayed_hp
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// HP still missing from the maximum.
    pub fn missing_hp(&self) -> u32 {
        self.max_hp - self.hp
    }

    pub(crate) fn set_hp(&mut self, hp: u32) {
        debug_assert!(hp <= self.max_hp, "hp {hp} exceeds max {}", self.max_hp);
        self.hp = hp.min(self.max_hp);
    }

    pub(crate) fn settle_display(&mut self, hp: u32) {
        self.displayed_hp = f64::from(hp.min(self.max_hp));
    }
}
