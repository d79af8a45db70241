//! Console state: the shelf, key handling and the status line.
use std::time::Duration;

use anyhow::Result;
use arcade_frontend_core::{GameShelf, ModuleError, ScreenInput, ScreenSet};
use crossterm::event::KeyEvent;

use crate::config::ArcadeConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{EventLoop, terminal};

/// Whether the frame loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ArcadeApp {
    shelf: GameShelf,
    input: InputHandler,
    config: ArcadeConfig,
    status: Option<String>,
}

impl ArcadeApp {
    pub fn new(shelf: GameShelf, config: ArcadeConfig) -> Self {
        Self {
            shelf,
            input: InputHandler::new(),
            config,
            status: None,
        }
    }

    pub fn shelf(&self) -> &GameShelf {
        &self.shelf
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Last module failure, shown on the shelf until the next launch.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Duration) -> Flow {
        let action = self.input.handle_key(key);
        self.on_action(action, now)
    }

    pub fn on_action(&mut self, action: KeyAction, now: Duration) -> Flow {
        match action {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::Back if self.shelf.is_playing() => self.shelf.leave(),
            KeyAction::Back => return Flow::Quit,
            KeyAction::Button(button) if self.shelf.is_playing() => {
                let result = self.shelf.handle_input(button, now);
                self.record(result);
            }
            KeyAction::Button(ScreenInput::Up) => self.shelf.select_previous(),
            KeyAction::Button(ScreenInput::Down) => self.shelf.select_next(),
            KeyAction::Button(ScreenInput::Confirm) => self.launch(now),
            KeyAction::Button(_) | KeyAction::None => {}
        }
        Flow::Continue
    }

    /// Advances the running game, if any.
    pub fn tick(&mut self, now: Duration) {
        let result = self.shelf.update(now);
        self.record(result);
    }

    /// Screens of the running game, or `None` while on the shelf.
    pub fn screens(&mut self, now: Duration) -> Option<ScreenSet> {
        match self.shelf.render(now) {
            Ok(screens) => screens,
            Err(error) => {
                self.record(Err(error));
                None
            }
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("console starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = EventLoop::new(self).run(&mut terminal).await;

        terminal::restore()?;
        tracing::info!("console exiting");
        result.map(|_| ())
    }

    fn launch(&mut self, now: Duration) {
        match self.shelf.launch_selected(now) {
            Ok(true) => self.status = None,
            Ok(false) => self.status = Some("That game is out of order.".to_owned()),
            Err(error) => self.record(Err(error)),
        }
    }

    fn record(&mut self, result: Result<(), ModuleError>) {
        if let Err(error) = result {
            self.status = Some(error.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arcade_frontend_core::{BattleGame, GameModule};
    use battle_content::default_roster;
    use battle_core::{Arena, BattleConfig, Roster};

    use super::*;

    fn app(roster: Roster) -> ArcadeApp {
        let mut shelf = GameShelf::new();
        shelf.register(GameModule::dual(BattleGame::new(Arena::new(
            Arc::new(roster),
            BattleConfig::default(),
            5,
        ))));
        ArcadeApp::new(shelf, ArcadeConfig::default())
    }

    const T0: Duration = Duration::ZERO;

    #[test]
    fn back_on_shelf_quits() {
        let mut app = app(default_roster().unwrap());
        assert_eq!(app.on_action(KeyAction::Back, T0), Flow::Quit);
    }

    #[test]
    fn confirm_launches_and_back_leaves() {
        let mut app = app(default_roster().unwrap());
        assert_eq!(
            app.on_action(KeyAction::Button(ScreenInput::Confirm), T0),
            Flow::Continue
        );
        assert!(app.shelf().is_playing());
        assert!(app.screens(T0).is_some_and(|s| s.lower.is_some()));

        assert_eq!(app.on_action(KeyAction::Back, T0), Flow::Continue);
        assert!(!app.shelf().is_playing());
        assert!(app.screens(T0).is_none());
    }

    #[test]
    fn failed_launch_sets_status() {
        let mut app = app(Roster::default());
        app.on_action(KeyAction::Button(ScreenInput::Confirm), T0);
        assert!(!app.shelf().is_playing());
        assert!(app.status().is_some_and(|s| s.contains("failed to start")));

        app.on_action(KeyAction::Button(ScreenInput::Confirm), T0);
        assert_eq!(app.status(), Some("That game is out of order."));
    }

    #[test]
    fn quit_always_quits() {
        let mut app = app(default_roster().unwrap());
        app.on_action(KeyAction::Button(ScreenInput::Confirm), T0);
        assert_eq!(app.on_action(KeyAction::Quit, T0), Flow::Quit);
    }
}
