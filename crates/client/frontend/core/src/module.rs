//! Capability interface for game modules.

use std::time::Duration;

use crate::error::ModuleError;
use crate::frame::{DualFrame, FrameBuffer, ScreenSet};

/// Console buttons, as delivered to the running game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ScreenInput {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Restart,
}

/// A game that draws on the upper screen only.
///
/// `now` is the host's time since its loop started. Games must derive all
/// timing from it and never block.
pub trait SingleScreenGame: Send {
    fn name(&self) -> &str;

    fn start(&mut self, now: Duration) -> Result<(), ModuleError>;

    fn update(&mut self, now: Duration) -> Result<(), ModuleError>;

    fn handle_input(&mut self, input: ScreenInput, now: Duration) -> Result<(), ModuleError>;

    fn render(&self, now: Duration) -> Result<FrameBuffer, ModuleError>;
}

/// A game that draws on both screens.
pub trait DualScreenGame: Send {
    fn name(&self) -> &str;

    fn start(&mut self, now: Duration) -> Result<(), ModuleError>;

    fn update(&mut self, now: Duration) -> Result<(), ModuleError>;

    fn handle_input(&mut self, input: ScreenInput, now: Duration) -> Result<(), ModuleError>;

    fn render(&self, now: Duration) -> Result<DualFrame, ModuleError>;
}

/// A game module together with its screen capability.
pub enum GameModule {
    Single(Box<dyn SingleScreenGame>),
    Dual(Box<dyn DualScreenGame>),
}

impl GameModule {
    pub fn single(game: impl SingleScreenGame + 'static) -> Self {
        Self::Single(Box::new(game))
    }

    pub fn dual(game: impl DualScreenGame + 'static) -> Self {
        Self::Dual(Box::new(game))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Single(game) => game.name(),
            Self::Dual(game) => game.name(),
        }
    }

    pub fn screens(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Dual(_) => 2,
        }
    }

    pub fn start(&mut self, now: Duration) -> Result<(), ModuleError> {
        match self {
            Self::Single(game) => game.start(now),
            Self::Dual(game) => game.start(now),
        }
    }

    pub fn update(&mut self, now: Duration) -> Result<(), ModuleError> {
        match self {
            Self::Single(game) => game.update(now),
            Self::Dual(game) => game.update(now),
        }
    }

    pub fn handle_input(&mut self, input: ScreenInput, now: Duration) -> Result<(), ModuleError> {
        match self {
            Self::Single(game) => game.handle_input(input, now),
            Self::Dual(game) => game.handle_input(input, now),
        }
    }

    pub fn render(&self, now: Duration) -> Result<ScreenSet, ModuleError> {
        match self {
            Self::Single(game) => game.render(now).map(ScreenSet::from),
            Self::Dual(game) => game.render(now).map(ScreenSet::from),
        }
    }
}

impl std::fmt::Debug for GameModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameModule")
            .field("name", &self.name())
            .field("screens", &self.screens())
            .finish()
    }
}
