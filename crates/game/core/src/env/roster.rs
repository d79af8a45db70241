//! Combatant catalogue.
//!
//! Content crates turn data files into [`CombatantTemplate`]s; sessions draw
//! two distinct entries from whatever [`RosterOracle`] they are given.

use std::collections::HashSet;

use crate::config::BattleConfig;
use crate::error::RosterError;
use crate::state::{Combatant, Move};

use super::rng::{RngContext, RngOracle, compute_seed};

/// Catalogue record for one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantTemplate {
    pub name: String,
    /// Opaque reference to the combatant's artwork.
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset: String,
    pub max_hp: u32,
    pub moves: Vec<Move>,
}

impl CombatantTemplate {
    pub fn new(
        name: impl Into<String>,
        asset: impl Into<String>,
        max_hp: u32,
        moves: Vec<Move>,
    ) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
            max_hp,
            moves,
        }
    }

    /// Checks the template can become a [`Combatant`].
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.max_hp == 0 {
            return Err(RosterError::ZeroMaxHp {
                name: self.name.clone(),
            });
        }
        if self.moves.len() != BattleConfig::MOVES_PER_COMBATANT {
            return Err(RosterError::InvalidMoveCount {
                name: self.name.clone(),
                count: self.moves.len(),
            });
        }
        Ok(())
    }

    /// Builds a full-health combatant from this template.
    pub fn instantiate(&self) -> Result<Combatant, RosterError> {
        self.validate()?;
        let moves: [Move; BattleConfig::MOVES_PER_COMBATANT] = self
            .moves
            .clone()
            .try_into()
            .map_err(|moves: Vec<Move>| RosterError::InvalidMoveCount {
                name: self.name.clone(),
                count: moves.len(),
            })?;
        Ok(Combatant::new(&self.name, &self.asset, self.max_hp, moves))
    }
}

/// Source of combatant templates.
///
/// Implementations must return the same slice for the lifetime of the
/// sessions that hold them; restarts draw from it again.
pub trait RosterOracle: Send + Sync {
    fn templates(&self) -> &[CombatantTemplate];

    fn len(&self) -> usize {
        self.templates().len()
    }

    fn is_empty(&self) -> bool {
        self.templates().is_empty()
    }

    fn find(&self, name: &str) -> Option<&CombatantTemplate> {
        self.templates().iter().find(|t| t.name == name)
    }
}

/// Validated, in-memory catalogue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    templates: Vec<CombatantTemplate>,
}

impl Roster {
    /// Validates every template and requires at least two distinct entries.
    pub fn new(templates: Vec<CombatantTemplate>) -> Result<Self, RosterError> {
        if templates.len() < BattleConfig::MIN_ROSTER_SIZE {
            return Err(RosterError::TooFewCombatants {
                available: templates.len(),
            });
        }

        let mut names = HashSet::with_capacity(templates.len());
        for template in &templates {
            template.validate()?;
            if !names.insert(template.name.as_str()) {
                return Err(RosterError::DuplicateName {
                    name: template.name.clone(),
                });
            }
        }

        Ok(Self { templates })
    }
}

impl RosterOracle for Roster {
    fn templates(&self) -> &[CombatantTemplate] {
        &self.templates
    }
}

/// Draws two distinct combatants uniformly at random.
///
/// The first is the player's, the second the opponent's. Fails when the
/// roster holds fewer than two entries or a drawn template is malformed.
pub fn draw_pair(
    roster: &dyn RosterOracle,
    rng: &dyn RngOracle,
    session_seed: u64,
    nonce: u64,
) -> Result<(Combatant, Combatant), RosterError> {
    let templates = roster.templates();
    let available = templates.len();
    if available < BattleConfig::MIN_ROSTER_SIZE {
        return Err(RosterError::TooFewCombatants { available });
    }

    let first = rng.pick_index(
        compute_seed(session_seed, nonce, 0, RngContext::RosterFirst),
        available,
    );
    // Pick among the remaining entries, then skip over `first`.
    let mut second = rng.pick_index(
        compute_seed(session_seed, nonce, 0, RngContext::RosterSecond),
        available - 1,
    );
    if second >= first {
        second += 1;
    }

    Ok((
        templates[first].instantiate()?,
        templates[second].instantiate()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Element;

    fn template(name: &str) -> CombatantTemplate {
        CombatantTemplate::new(
            name,
            format!("images/{name}.jpg"),
            100,
            vec![
                Move::new("Bola Sombra", 23, Element::Dark),
                Move::new("Bomba Lodo", 25, Element::Poison),
                Move::new("Psiquico", 25, Element::Psychic),
                Move::new("Maldicion", -22, Element::Heal),
            ],
        )
    }

    #[test]
    fn rejects_small_rosters() {
        assert_eq!(
            Roster::new(vec![template("Gengar")]),
            Err(RosterError::TooFewCombatants { available: 1 })
        );
        assert_eq!(
            Roster::new(Vec::new()),
            Err(RosterError::TooFewCombatants { available: 0 })
        );
    }

    #[test]
    fn rejects_malformed_templates() {
        let mut short = template("Shadow");
        short.moves.pop();
        assert_eq!(
            Roster::new(vec![template("Gengar"), short]),
            Err(RosterError::InvalidMoveCount {
                name: "Shadow".into(),
                count: 3
            })
        );

        let mut empty = template("MissingNo");
        empty.max_hp = 0;
        assert!(matches!(
            Roster::new(vec![template("Gengar"), empty]),
            Err(RosterError::ZeroMaxHp { .. })
        ));

        assert!(matches!(
            Roster::new(vec![template("Gengar"), template("Gengar")]),
            Err(RosterError::DuplicateName { .. })
        ));
    }

    #[test]
    fn draws_are_distinct_and_deterministic() {
        let roster = Roster::new(vec![template("Gengar"), template("Agumon")]).unwrap();
        for nonce in 0..32 {
            let (a, b) = draw_pair(&roster, &PcgRng, 5, nonce).unwrap();
            assert_ne!(a.name(), b.name());
            let (again_a, again_b) = draw_pair(&roster, &PcgRng, 5, nonce).unwrap();
            assert_eq!(a.name(), again_a.name());
            assert_eq!(b.name(), again_b.name());
        }
    }

    #[test]
    fn draws_cover_the_roster() {
        let names = ["Gengar", "Agumon", "Shadow", "Gallade", "Luxray"];
        let roster = Roster::new(names.iter().map(|n| template(n)).collect()).unwrap();
        let mut seen = HashSet::new();
        for nonce in 0..200 {
            let (a, b) = draw_pair(&roster, &PcgRng, 11, nonce).unwrap();
            seen.insert(a.name().to_string());
            seen.insert(b.name().to_string());
        }
        assert_eq!(seen.len(), names.len());
    }

    #[test]
    fn lookup_by_name() {
        let roster = Roster::new(vec![template("Gengar"), template("Agumon")]).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.find("Agumon").is_some());
        assert!(roster.find("Pikachu").is_none());
    }
}
