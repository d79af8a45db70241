//! Battle session aggregate.
//!
//! A [`BattleSession`] holds both combatants, the current phase and every
//! running timer. Hosts own it outright and step it through
//! [`BattleSession::poll`] and [`BattleSession::handle_input`]; a restart
//! replaces the whole value with a fresh one.

use std::fmt;
use std::sync::Arc;

use crate::config::BattleConfig;
use crate::engine::{BattleEngine, BattleInput, BattlePhase, MenuCursor, PhaseKind, StepReport};
use crate::env::{PcgRng, RngContext, RngOracle, RosterOracle, compute_seed, draw_pair};
use crate::error::{RosterError, SessionError};
use crate::state::{Combatant, Move, Position, Side};
use crate::timing::{DamageFlash, EffectTimer, HealthTween, Timestamp};

pub struct BattleSession {
    pub(crate) config: BattleConfig,
    pub(crate) roster: Arc<dyn RosterOracle>,
    pub(crate) rng: Arc<dyn RngOracle>,
    pub(crate) seed: u64,
    pub(crate) generation: u64,
    pub(crate) round: u64,
    pub(crate) player: Combatant,
    pub(crate) opponent: Combatant,
    pub(crate) cursor: MenuCursor,
    pub(crate) turn_owner: Side,
    pub(crate) pending_opponent_move: Option<usize>,
    pub(crate) phase: BattlePhase,
    pub(crate) tween: Option<HealthTween>,
    pub(crate) flash: Option<DamageFlash>,
    pub(crate) message: String,
}

impl BattleSession {
    pub fn builder(roster: Arc<dyn RosterOracle>) -> BattleSessionBuilder {
        BattleSessionBuilder::new(roster)
    }

    /// Draws two combatants from `roster` and starts in the move menu.
    pub fn new(
        roster: Arc<dyn RosterOracle>,
        config: BattleConfig,
        seed: u64,
    ) -> Result<Self, RosterError> {
        Self::builder(roster).config(config).seed(seed).build()
    }

    pub fn poll(&mut self, now: Timestamp) -> StepReport {
        BattleEngine::new(self).poll(now)
    }

    pub fn handle_input(
        &mut self,
        input: BattleInput,
        now: Timestamp,
    ) -> Result<StepReport, SessionError> {
        BattleEngine::new(self).handle_input(input, now)
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// How many restarts led to this session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of rounds committed so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Screen position effects start from or land on for `side`.
    pub fn anchor(&self, side: Side) -> Position {
        match side {
            Side::Player => self.config.player_anchor,
            Side::Opponent => self.config.opponent_anchor,
        }
    }

    pub fn cursor(&self) -> MenuCursor {
        self.cursor
    }

    pub fn selected_move_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    /// The opponent's reply for the current round, until it starts playing.
    pub fn pending_opponent_move(&self) -> Option<&Move> {
        self.pending_opponent_move
            .and_then(|index| self.opponent.move_at(index))
    }

    pub fn phase(&self) -> &BattlePhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn wait_deadline(&self) -> Option<Timestamp> {
        self.phase.wait_deadline()
    }

    pub fn active_effect(&self) -> Option<&EffectTimer> {
        self.phase.effect()
    }

    pub fn active_tween(&self) -> Option<&HealthTween> {
        self.tween.as_ref()
    }

    pub fn active_flash(&self) -> Option<&DamageFlash> {
        self.flash.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.phase.winner().map(|side| self.combatant(side))
    }

    /// Health bar value for `side` at `now`, following any running tween.
    pub fn display_hp(&self, side: Side, now: Timestamp) -> f64 {
        match &self.tween {
            Some(tween) if tween.target() == side => tween.value_at(now),
            _ => self.combatant(side).displayed_hp(),
        }
    }

    /// A fresh session over the same roster, with a derived seed.
    pub(crate) fn restarted(&self) -> Result<BattleSession, RosterError> {
        let generation = self.generation + 1;
        Self::builder(Arc::clone(&self.roster))
            .config(self.config.clone())
            .rng(Arc::clone(&self.rng))
            .seed(compute_seed(self.seed, generation, 0, RngContext::Restart))
            .generation(generation)
            .build()
    }
}

impl fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleSession")
            .field("seed", &self.seed)
            .field("generation", &self.generation)
            .field("round", &self.round)
            .field("player", &self.player)
            .field("opponent", &self.opponent)
            .field("cursor", &self.cursor)
            .field("turn_owner", &self.turn_owner)
            .field("phase", &self.phase)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`BattleSession`].
///
/// By default the session uses [`BattleConfig::default`], seed 0 and
/// [`PcgRng`], and draws its combatants from the roster. Tests and replays
/// can pin both fighters with [`BattleSessionBuilder::combatants`].
pub struct BattleSessionBuilder {
    roster: Arc<dyn RosterOracle>,
    rng: Arc<dyn RngOracle>,
    config: BattleConfig,
    seed: u64,
    generation: u64,
    combatants: Option<(Combatant, Combatant)>,
}

impl BattleSessionBuilder {
    pub fn new(roster: Arc<dyn RosterOracle>) -> Self {
        Self {
            roster,
            rng: Arc::new(PcgRng),
            config: BattleConfig::default(),
            seed: 0,
            generation: 0,
            combatants: None,
        }
    }

    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// Uses these two fighters instead of drawing from the roster.
    pub fn combatants(mut self, player: Combatant, opponent: Combatant) -> Self {
        self.combatants = Some((player, opponent));
        self
    }

    pub(crate) fn generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn build(self) -> Result<BattleSession, RosterError> {
        let available = self.roster.len();
        if available < BattleConfig::MIN_ROSTER_SIZE {
            return Err(RosterError::TooFewCombatants { available });
        }

        let (player, opponent) = match self.combatants {
            Some(pair) => pair,
            None => draw_pair(&*self.roster, &*self.rng, self.seed, self.generation)?,
        };
        tracing::info!(
            seed = self.seed,
            generation = self.generation,
            player = player.name(),
            opponent = opponent.name(),
            "battle session started"
        );

        Ok(BattleSession {
            message: crate::engine::prompt_message(player.name()),
            config: self.config,
            roster: self.roster,
            rng: self.rng,
            seed: self.seed,
            generation: self.generation,
            round: 0,
            player,
            opponent,
            cursor: MenuCursor::default(),
            turn_owner: Side::Player,
            pending_opponent_move: None,
            phase: BattlePhase::Selecting,
            tween: None,
            flash: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CombatantTemplate, Roster};
    use crate::state::Element;

    fn roster(names: &[&str]) -> Arc<dyn RosterOracle> {
        let templates = names
            .iter()
            .map(|name| {
                CombatantTemplate::new(
                    *name,
                    "",
                    100,
                    vec![
                        Move::new("Lanzallamas", 24, Element::Fire),
                        Move::new("Garra Dragon", 22, Element::Dragon),
                        Move::new("Vuelo", 24, Element::Physical),
                        Move::new("Respiro", -21, Element::Heal),
                    ],
                )
            })
            .collect();
        Arc::new(Roster::new(templates).unwrap())
    }

    #[test]
    fn starts_in_the_move_menu() {
        let session = BattleSession::new(roster(&["Charizard", "Pikachu"]), BattleConfig::default(), 7)
            .unwrap();

        assert_eq!(session.phase_kind(), PhaseKind::Selecting);
        assert_eq!(session.turn_owner(), Side::Player);
        assert_eq!(session.selected_move_index(), 0);
        assert_ne!(session.player().name(), session.opponent().name());
        assert_eq!(session.player().hp(), 100);
        assert_eq!(session.opponent().hp(), 100);
        assert_eq!(
            session.message(),
            format!("What will {} do?", session.player().name())
        );
        assert!(session.wait_deadline().is_none());
        assert!(session.winner().is_none());
    }

    #[test]
    fn same_seed_draws_same_pair() {
        let names = ["Charizard", "Pikachu", "Blastoise", "Venusaur", "Mewtwo"];
        let a = BattleSession::new(roster(&names), BattleConfig::default(), 99).unwrap();
        let b = BattleSession::new(roster(&names), BattleConfig::default(), 99).unwrap();
        assert_eq!(a.player().name(), b.player().name());
        assert_eq!(a.opponent().name(), b.opponent().name());
    }

    #[test]
    fn pinned_combatants_skip_the_draw() {
        let roster = roster(&["Charizard", "Pikachu"]);
        let first = roster.templates()[0].instantiate().unwrap();
        let second = roster.templates()[1].instantiate().unwrap().with_hp(20);

        let session = BattleSession::builder(roster)
            .combatants(second.clone(), first.clone())
            .build()
            .unwrap();

        assert_eq!(session.player(), &second);
        assert_eq!(session.opponent(), &first);
        assert_eq!(session.display_hp(Side::Player, Timestamp::ZERO), 20.0);
    }

    #[test]
    fn restart_derives_a_new_generation() {
        let session = BattleSession::new(roster(&["Charizard", "Pikachu"]), BattleConfig::default(), 3)
            .unwrap();
        let fresh = session.restarted().unwrap();

        assert_eq!(fresh.generation(), 1);
        assert_ne!(fresh.seed(), session.seed());
        assert_eq!(fresh.round(), 0);
        assert_eq!(fresh.phase_kind(), PhaseKind::Selecting);
    }
}
