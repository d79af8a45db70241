//! External collaborators the session reads from.
//!
//! - [`RosterOracle`]: the combatant catalogue sessions draw from
//! - [`RngOracle`]: deterministic randomness for catalogue draws and the
//!   opponent's move choice
mod rng;
mod roster;

pub use rng::{PcgRng, RngContext, RngOracle, compute_seed};
pub use roster::{CombatantTemplate, Roster, RosterOracle, draw_pair};
