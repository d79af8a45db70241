//! Dual-screen layout.
//!
//! The terminal is split into an upper and a lower screen separated by a
//! hinge. A running game fills the screens with its frame buffers; otherwise
//! the upper screen lists the shelf and the lower one shows help.
use arcade_frontend_core::{EntryStatus, FrameBuffer, FrameLine, ScreenSet, Tone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::ArcadeApp;
use crate::presentation::theme::RatatuiTheme;

const HELP: [&str; 4] = [
    "Arrows / hjkl  move",
    "Enter / Space  confirm",
    "r              restart",
    "Esc / q        leave game or quit",
];

pub fn draw(frame: &mut Frame, app: &ArcadeApp, screens: Option<&ScreenSet>) {
    let theme = RatatuiTheme;
    let [upper, hinge, lower] = Layout::vertical([
        Constraint::Percentage(55),
        Constraint::Length(1),
        Constraint::Min(6),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("═".repeat(usize::from(hinge.width))).style(theme.tone(Tone::Muted)),
        hinge,
    );

    match screens {
        Some(screens) => {
            render_buffer(frame, upper, &screens.upper, &theme);
            match &screens.lower {
                Some(buffer) => render_buffer(frame, lower, buffer, &theme),
                None => render_help(frame, lower, app, &theme),
            }
        }
        None => {
            render_shelf(frame, upper, app, &theme);
            render_help(frame, lower, app, &theme);
        }
    }
}

fn render_buffer(frame: &mut Frame, area: Rect, buffer: &FrameBuffer, theme: &RatatuiTheme) {
    let block = Block::bordered()
        .title(format!(" {} ", buffer.title))
        .border_style(theme.frame_border(true));
    let inner_width = usize::from(block.inner(area).width);

    let lines: Vec<Line> = buffer
        .lines
        .iter()
        .map(|line| match line {
            FrameLine::Text { text, tone } => Line::styled(text.clone(), theme.tone(*tone)),
            FrameLine::Gauge { label, ratio, tone } => gauge_line(label, *ratio, *tone, inner_width, theme),
            FrameLine::Blank => Line::default(),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn gauge_line(
    label: &str,
    ratio: f64,
    tone: Tone,
    width: usize,
    theme: &RatatuiTheme,
) -> Line<'static> {
    let bar_width = width.saturating_sub(label.chars().count() + 3).max(4);
    let filled = ((ratio.clamp(0.0, 1.0) * bar_width as f64).round() as usize).min(bar_width);

    Line::from(vec![
        Span::styled(format!("{label} "), theme.tone(tone)),
        Span::styled("█".repeat(filled), theme.gauge_fill(ratio, tone)),
        Span::styled("░".repeat(bar_width - filled), theme.tone(Tone::Muted)),
    ])
}

fn render_shelf(frame: &mut Frame, area: Rect, app: &ArcadeApp, theme: &RatatuiTheme) {
    let shelf = app.shelf();
    let mut lines = vec![Line::default()];
    for (index, entry) in shelf.entries().iter().enumerate() {
        let selected = index == shelf.cursor();
        let marker = if selected { "▶" } else { " " };
        let (suffix, tone) = match entry.status() {
            EntryStatus::Ready if selected => (String::new(), Tone::Highlight),
            EntryStatus::Ready => (String::new(), Tone::Normal),
            EntryStatus::Disabled { .. } => (" (out of order)".to_owned(), Tone::Muted),
        };
        let screens = if entry.screens() == 2 { "◫" } else { "□" };
        lines.push(Line::styled(
            format!("{marker} {screens} {}{suffix}", entry.name()),
            theme.tone(tone),
        ));
    }
    if shelf.entries().is_empty() {
        lines.push(Line::styled("No games installed.", theme.tone(Tone::Muted)));
    }

    let block = Block::bordered()
        .title(" ARCADE ")
        .title_alignment(Alignment::Center)
        .border_style(theme.frame_border(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect, app: &ArcadeApp, theme: &RatatuiTheme) {
    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|text| Line::styled(*text, theme.tone(Tone::Muted)))
        .collect();
    if let Some(status) = app.status() {
        lines.push(Line::default());
        lines.push(Line::styled(status.to_owned(), theme.tone(Tone::Alert)));
    }

    let block = Block::bordered().border_style(theme.frame_border(false));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
