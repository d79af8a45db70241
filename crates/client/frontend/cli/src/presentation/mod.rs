//! Terminal presentation: setup, theme, layout and the frame loop.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use event_loop::EventLoop;
