//! The console's game shelf.
//!
//! Holds every registered [`GameModule`], the menu cursor and the game being
//! played. Errors returned by the running module disable its entry; the error
//! is handed back to the host so it can leave the game or abort.

use std::time::Duration;

use crate::error::ModuleError;
use crate::frame::ScreenSet;
use crate::module::{GameModule, ScreenInput};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Ready,
    Disabled { reason: String },
}

#[derive(Debug)]
pub struct ShelfEntry {
    module: GameModule,
    status: EntryStatus,
}

impl ShelfEntry {
    pub fn name(&self) -> &str {
        self.module.name()
    }

    pub fn screens(&self) -> usize {
        self.module.screens()
    }

    pub fn status(&self) -> &EntryStatus {
        &self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.status == EntryStatus::Ready
    }
}

#[derive(Debug, Default)]
pub struct GameShelf {
    entries: Vec<ShelfEntry>,
    cursor: usize,
    active: Option<usize>,
}

impl GameShelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module: GameModule) -> &mut Self {
        tracing::debug!(name = module.name(), screens = module.screens(), "module registered");
        self.entries.push(ShelfEntry {
            module,
            status: EntryStatus::Ready,
        });
        self
    }

    pub fn entries(&self) -> &[ShelfEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        }
    }

    pub fn active(&self) -> Option<&ShelfEntry> {
        self.active.and_then(|index| self.entries.get(index))
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Starts the entry under the cursor.
    ///
    /// Returns `Ok(false)` when the entry is disabled or the shelf is empty.
    pub fn launch_selected(&mut self, now: Duration) -> Result<bool, ModuleError> {
        self.launch(self.cursor, now)
    }

    pub fn launch(&mut self, index: usize, now: Duration) -> Result<bool, ModuleError> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(false);
        };
        if let EntryStatus::Disabled { reason } = &entry.status {
            tracing::warn!(name = entry.name(), %reason, "refusing to launch disabled module");
            return Ok(false);
        }

        match entry.module.start(now) {
            Ok(()) => {
                tracing::info!(name = entry.name(), "module launched");
                self.active = Some(index);
                Ok(true)
            }
            Err(error) => {
                self.disable(index, &error);
                Err(error)
            }
        }
    }

    /// Returns to the shelf menu.
    pub fn leave(&mut self) {
        if let Some(entry) = self.active() {
            tracing::info!(name = entry.name(), "module closed");
        }
        self.active = None;
    }

    pub fn update(&mut self, now: Duration) -> Result<(), ModuleError> {
        self.with_active(|module| module.update(now))
            .map(|_| ())
    }

    pub fn handle_input(&mut self, input: ScreenInput, now: Duration) -> Result<(), ModuleError> {
        self.with_active(|module| module.handle_input(input, now))
            .map(|_| ())
    }

    /// Frame of the running game, or `None` on the menu.
    pub fn render(&mut self, now: Duration) -> Result<Option<ScreenSet>, ModuleError> {
        self.with_active(|module| module.render(now))
    }

    fn with_active<T>(
        &mut self,
        step: impl FnOnce(&mut GameModule) -> Result<T, ModuleError>,
    ) -> Result<Option<T>, ModuleError> {
        let Some(index) = self.active else {
            return Ok(None);
        };
        let Some(entry) = self.entries.get_mut(index) else {
            self.active = None;
            return Ok(None);
        };

        match step(&mut entry.module) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                self.disable(index, &error);
                Err(error)
            }
        }
    }

    fn disable(&mut self, index: usize, error: &ModuleError) {
        if let Some(entry) = self.entries.get_mut(index) {
            tracing::warn!(name = entry.name(), stage = %error.stage(), %error, "module disabled");
            entry.status = EntryStatus::Disabled {
                reason: error.to_string(),
            };
        }
        if self.active == Some(index) {
            self.active = None;
        }
    }
}
