//! Battle participants and the values they carry.
//!
//! A [`Combatant`] is built from a roster template at session start and is
//! only mutated by the engine: its authoritative HP changes when a move
//! resolves, its displayed HP when a health tween settles.
mod combatant;
mod moves;
mod position;
mod side;

pub use combatant::Combatant;
pub use moves::{Element, Move};
pub use position::Position;
pub use side::Side;
