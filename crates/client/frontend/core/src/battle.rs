//! The battle orchestrator as a dual-screen game module.
//!
//! The upper screen shows the field (both combatants and the running effect),
//! the lower one the message box and the 2×2 move menu.

use std::time::Duration;

use battle_core::{
    Arena, BattleEvent, BattleInput, CombatantView, CursorDirection, Element, MoveView,
    RenderSnapshot, Timestamp,
};

use crate::error::{ModuleError, ModuleStage};
use crate::frame::{DualFrame, FrameBuffer, FrameLine, Tone};
use crate::module::{DualScreenGame, ScreenInput};

pub struct BattleGame {
    arena: Arena,
}

impl BattleGame {
    pub const NAME: &'static str = "Battle";

    pub fn new(arena: Arena) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    fn error(stage: ModuleStage, reason: impl ToString) -> ModuleError {
        ModuleError::new(stage, Self::NAME, reason)
    }
}

fn battle_input(input: ScreenInput) -> BattleInput {
    match input {
        ScreenInput::Up => BattleInput::MoveCursor(CursorDirection::Up),
        ScreenInput::Down => BattleInput::MoveCursor(CursorDirection::Down),
        ScreenInput::Left => BattleInput::MoveCursor(CursorDirection::Left),
        ScreenInput::Right => BattleInput::MoveCursor(CursorDirection::Right),
        ScreenInput::Confirm => BattleInput::Confirm,
        ScreenInput::Restart => BattleInput::Restart,
    }
}

impl DualScreenGame for BattleGame {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn start(&mut self, _now: Duration) -> Result<(), ModuleError> {
        self.arena
            .start()
            .map(|_| ())
            .map_err(|e| Self::error(ModuleStage::Startup, e))
    }

    fn update(&mut self, now: Duration) -> Result<(), ModuleError> {
        let report = self
            .arena
            .poll(Timestamp::from(now))
            .map_err(|e| Self::error(ModuleStage::Frame, e))?;

        for event in report.events() {
            if let BattleEvent::BattleEnded { winner } = event {
                tracing::info!(%winner, "battle decided");
            } else {
                tracing::trace!(?event, "battle event");
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: ScreenInput, now: Duration) -> Result<(), ModuleError> {
        self.arena
            .handle_input(battle_input(input), Timestamp::from(now))
            .map(|_| ())
            .map_err(|e| Self::error(ModuleStage::Input, e))
    }

    fn render(&self, now: Duration) -> Result<DualFrame, ModuleError> {
        let snapshot = self
            .arena
            .snapshot(Timestamp::from(now))
            .map_err(|e| Self::error(ModuleStage::Frame, e))?;

        Ok(DualFrame {
            upper: field(&snapshot),
            lower: menu(&snapshot),
        })
    }
}

fn field(snapshot: &RenderSnapshot) -> FrameBuffer {
    let mut frame = FrameBuffer::new("Field");
    combatant_lines(&mut frame, &snapshot.opponent);
    frame.push(FrameLine::Blank);

    match &snapshot.effect {
        Some(effect) => {
            let tone = if effect.kind == Element::Heal {
                Tone::Heal
            } else {
                Tone::Highlight
            };
            let (x, y) = effect.position();
            frame.push(FrameLine::toned(
                format!(
                    "~ {} effect at ({x:.0}, {y:.0}) {:>3.0}%",
                    effect.kind,
                    effect.progress * 100.0
                ),
                tone,
            ));
        }
        None => {
            frame.push(FrameLine::Blank);
        }
    }

    frame.push(FrameLine::Blank);
    combatant_lines(&mut frame, &snapshot.player);
    frame
}

fn combatant_lines(frame: &mut FrameBuffer, view: &CombatantView) {
    let tone = if view.flash.is_some() {
        Tone::Alert
    } else {
        Tone::Normal
    };
    frame
        .push(FrameLine::toned(view.name.clone(), tone))
        .push(FrameLine::gauge(
            format!("HP {:>3.0}/{}", view.display_hp, view.max_hp),
            view.hp_ratio(),
            tone,
        ));
}

fn menu(snapshot: &RenderSnapshot) -> FrameBuffer {
    let mut frame = FrameBuffer::new("Moves");

    match snapshot.banner() {
        Some(banner) => frame.push(FrameLine::toned(banner, Tone::Alert)),
        None => frame.push(FrameLine::text(snapshot.message.clone())),
    };
    frame.push(FrameLine::Blank);

    for row in snapshot.moves.chunks(2) {
        let text = row
            .iter()
            .map(move_label)
            .map(|label| format!("{label:<28}"))
            .collect::<String>();
        let tone = if !snapshot.menu_active() {
            Tone::Muted
        } else if row.iter().any(|mv| mv.selected) {
            Tone::Highlight
        } else {
            Tone::Normal
        };
        frame.push(FrameLine::toned(text.trim_end(), tone));
    }
    frame
}

fn move_label(mv: &MoveView) -> String {
    let marker = if mv.selected { '>' } else { ' ' };
    if mv.power < 0 {
        format!("{marker} {} (+{} HP)", mv.name, mv.power.unsigned_abs())
    } else {
        format!("{marker} {} ({} {})", mv.name, mv.power, mv.element)
    }
}
