//! Host-side primitives for the arcade console.
//!
//! Game modules describe what they can draw through two capability traits:
//! [`SingleScreenGame`] fills one [`FrameBuffer`], [`DualScreenGame`] fills
//! both screens of the console. The host holds them as [`GameModule`]s on a
//! [`GameShelf`] and dispatches on the variant. Module failures come back as
//! [`ModuleError`]s and disable the failing entry instead of being swallowed.
pub mod battle;
pub mod error;
pub mod frame;
pub mod module;
pub mod shelf;

pub use battle::BattleGame;
pub use error::{ModuleError, ModuleStage};
pub use frame::{DualFrame, FrameBuffer, FrameLine, ScreenSet, Tone};
pub use module::{DualScreenGame, GameModule, ScreenInput, SingleScreenGame};
pub use shelf::{EntryStatus, GameShelf, ShelfEntry};
