//! Ratatui styling for frame-buffer tones.
//!
//! Game modules only speak in [`Tone`]s; this is the one place that knows
//! which colours they become in a terminal.

use arcade_frontend_core::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme for the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Normal => Style::default(),
            Tone::Highlight => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Tone::Muted => Style::default().fg(Color::DarkGray),
            Tone::Alert => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            Tone::Heal => Style::default().fg(Color::LightGreen),
        }
    }

    /// Fill colour of a health-style gauge.
    pub fn gauge_fill(&self, ratio: f64, tone: Tone) -> Style {
        if tone == Tone::Alert {
            return self.tone(Tone::Alert);
        }
        let color = if ratio > 0.5 {
            Color::Green
        } else if ratio > 0.2 {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn frame_border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_colour_follows_ratio() {
        let theme = RatatuiTheme;
        assert_eq!(theme.gauge_fill(1.0, Tone::Normal).fg, Some(Color::Green));
        assert_eq!(theme.gauge_fill(0.5, Tone::Normal).fg, Some(Color::Yellow));
        assert_eq!(theme.gauge_fill(0.1, Tone::Normal).fg, Some(Color::Red));
        assert_eq!(theme.gauge_fill(1.0, Tone::Alert).fg, Some(Color::LightRed));
    }
}
