//! Data-driven battle content and loaders.
//!
//! This crate ships the bundled combatant roster and reads RON/TOML data
//! files into `battle-core` types:
//! - Combatant rosters (RON)
//! - Battle timing and layout configuration (TOML)
//!
//! Content is handed to sessions through `battle-core`'s oracles and never
//! appears in session state directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterLoader, default_roster};
