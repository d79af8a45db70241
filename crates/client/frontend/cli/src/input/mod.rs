//! Input processing for the console.
//!
//! This module owns the keyboard-to-button mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use arcade_frontend_core::ScreenInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application immediately.
    Quit,
    /// Leave the running game, or exit from the shelf.
    Back,
    /// A console button press.
    Button(ScreenInput),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into console buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Button(ScreenInput::Left),
            KeyCode::Right => KeyAction::Button(ScreenInput::Right),
            KeyCode::Up => KeyAction::Button(ScreenInput::Up),
            KeyCode::Down => KeyAction::Button(ScreenInput::Down),
            KeyCode::Enter => KeyAction::Button(ScreenInput::Confirm),
            KeyCode::Esc => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Back,
            'r' => KeyAction::Button(ScreenInput::Restart),
            'h' | 'a' => KeyAction::Button(ScreenInput::Left),
            'j' | 's' => KeyAction::Button(ScreenInput::Down),
            'k' | 'w' => KeyAction::Button(ScreenInput::Up),
            'l' | 'd' => KeyAction::Button(ScreenInput::Right),
            ' ' | 'z' => KeyAction::Button(ScreenInput::Confirm),
            _ => KeyAction::None,
        }
    }
}
