//! Turn-based battle orchestration for the arcade console.
//!
//! `battle-core` owns the rules of a two-combatant battle: move resolution,
//! timed visual-effect gating, health interpolation and turn hand-off. It is
//! driven entirely from the outside. Hosts call [`BattleSession::poll`] every
//! frame and deliver [`BattleInput`] events; every phase change is derived from
//! the timestamps they pass in, so a stalled loop catches up on the next poll.
//!
//! All state mutation flows through [`engine::BattleEngine`], and hosts read
//! the result back through a [`RenderSnapshot`].
pub mod arena;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod timing;

pub use arena::Arena;
pub use combat::{Resolution, ResolutionKind, ResolutionTarget, resolve};
pub use config::BattleConfig;
pub use engine::{
    BattleEngine, BattleEvent, BattleInput, BattlePhase, CursorDirection, MenuCursor,
    PendingAction, PhaseKind, StepReport,
};
pub use env::{CombatantTemplate, PcgRng, RngContext, RngOracle, Roster, RosterOracle};
pub use error::{BattleError, ErrorSeverity, RosterError, SessionError};
pub use session::{BattleSession, BattleSessionBuilder};
pub use snapshot::{CombatantView, EffectView, MoveView, RenderSnapshot};
pub use state::{Combatant, Element, Move, Position, Side};
pub use timing::{DamageFlash, EffectTimer, HealthTween, Timestamp};
