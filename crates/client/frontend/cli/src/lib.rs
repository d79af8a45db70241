//! Terminal console shell for the arcade.
//!
//! Presents the game shelf and the running game on two stacked virtual
//! screens, maps keys to console buttons and drives modules from a fixed-rate
//! frame loop.
//!
//! # Architecture
//!
//! [`ArcadeApp`] owns the [`GameShelf`](arcade_frontend_core::GameShelf) and
//! decides what a key means in the current context. The presentation layer
//! only turns frame buffers into ratatui widgets.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::{ArcadeApp, Flow};
pub use config::ArcadeConfig;
pub use input::{InputHandler, KeyAction};
