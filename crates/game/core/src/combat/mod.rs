//! Move resolution.
//!
//! Pure functions only: resolving a move reads both combatants and reports
//! what should happen; the engine is the one that applies it.

pub mod resolver;

pub use resolver::{Resolution, ResolutionKind, ResolutionTarget, resolve};
