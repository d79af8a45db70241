//! Combatant roster loader.

use std::path::Path;

use anyhow::Context;
use battle_core::{CombatantTemplate, Roster, RosterOracle};

use crate::loaders::{LoadResult, read_file};

/// The roster bundled with the console.
const DEFAULT_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for combatant rosters from RON files.
///
/// A roster file is a list of combatant records:
///
/// ```ron
/// [
///     (
///         name: "Charizard",
///         asset: "images/charizard.png",
///         max_hp: 100,
///         moves: [
///             (name: "Lanzallamas", power: 24, element: Fire),
///             // ...three more
///         ],
///     ),
/// ]
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid roster in {}", path.display()))
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let templates: Vec<CombatantTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        let roster = Roster::new(templates)?;

        tracing::debug!(combatants = roster.len(), "roster loaded");
        Ok(roster)
    }
}

/// Parses the bundled roster.
pub fn default_roster() -> LoadResult<Roster> {
    RosterLoader::parse(DEFAULT_ROSTER).context("Bundled roster is invalid")
}
