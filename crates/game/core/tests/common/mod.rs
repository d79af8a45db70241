#![allow(dead_code)]

use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleSession, Combatant, CombatantTemplate, Element, Move, RngOracle, Roster,
    RosterOracle,
};

/// Oracle that always picks the same slot out of four.
pub struct Always(pub usize);

impl RngOracle for Always {
    fn next_u32(&self, _seed: u64) -> u32 {
        (self.0 as u32) << 30
    }
}

pub fn charizard() -> CombatantTemplate {
    CombatantTemplate::new(
        "Charizard",
        "images/pokemon1.jpg",
        100,
        vec![
            Move::new("Lanzallamas", 28, Element::Fire),
            Move::new("Garra Dragon", 35, Element::Dragon),
            Move::new("Vuelo", 24, Element::Physical),
            Move::new("Respiro", -21, Element::Heal),
        ],
    )
}

pub fn pikachu() -> CombatantTemplate {
    CombatantTemplate::new(
        "Pikachu",
        "images/pokemon2.jpg",
        100,
        vec![
            Move::new("Impactrueno", 20, Element::Electric),
            Move::new("Rayo", 30, Element::Electric),
            Move::new("Ataque Rapido", 15, Element::Physical),
            Move::new("Descanso", -20, Element::Heal),
        ],
    )
}

pub fn roster() -> Arc<dyn RosterOracle> {
    Arc::new(Roster::new(vec![charizard(), pikachu()]).unwrap())
}

pub fn fighter(template: CombatantTemplate) -> Combatant {
    template.instantiate().unwrap()
}

/// Session with pinned fighters whose opponent always replies with `reply`.
pub fn session(player: Combatant, opponent: Combatant, reply: usize) -> BattleSession {
    BattleSession::builder(roster())
        .config(BattleConfig::default())
        .rng(Arc::new(Always(reply)))
        .combatants(player, opponent)
        .build()
        .unwrap()
}
