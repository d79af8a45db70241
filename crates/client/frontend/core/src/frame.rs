//! Framework-agnostic frame buffers produced by game modules.
//!
//! Modules describe their screens as titled lists of lines with a semantic
//! [`Tone`]; each host maps tones and gauges onto its own widgets.

/// Semantic styling hint for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Normal,
    /// Selected or otherwise emphasised.
    Highlight,
    Muted,
    /// Damage, faint and error cues.
    Alert,
    Heal,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FrameLine {
    Text { text: String, tone: Tone },
    /// A labelled bar filled to `ratio` in `[0, 1]`.
    Gauge { label: String, ratio: f64, tone: Tone },
    Blank,
}

impl FrameLine {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn gauge(label: impl Into<String>, ratio: f64, tone: Tone) -> Self {
        Self::Gauge {
            label: label.into(),
            ratio: ratio.clamp(0.0, 1.0),
            tone,
        }
    }
}

/// Contents of one virtual screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameBuffer {
    pub title: String,
    pub lines: Vec<FrameLine>,
}

impl FrameBuffer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: FrameLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn with(mut self, line: FrameLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Plain text of every text line, for logs and tests.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            FrameLine::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Output of a [`DualScreenGame`](crate::DualScreenGame).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualFrame {
    pub upper: FrameBuffer,
    pub lower: FrameBuffer,
}

/// What the host composites for one frame.
///
/// Single-screen games leave `lower` empty; the host fills it with its own
/// content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenSet {
    pub upper: FrameBuffer,
    pub lower: Option<FrameBuffer>,
}

impl From<FrameBuffer> for ScreenSet {
    fn from(upper: FrameBuffer) -> Self {
        Self { upper, lower: None }
    }
}

impl From<DualFrame> for ScreenSet {
    fn from(frame: DualFrame) -> Self {
        Self {
            upper: frame.upper,
            lower: Some(frame.lower),
        }
    }
}
