use crate::state::{Element, Position};

use super::{Timestamp, has_elapsed, progress};

/// A visual effect of some kind playing from one position to another.
///
/// The engine only cares about when it started and how long it lasts: the
/// action's outcome is applied on the first poll that finds it finished.
/// The timer lives inside the animating phase, so taking it out of the phase
/// to resolve the action also drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTimer {
    kind: Element,
    from: Position,
    to: Position,
    started_at: Timestamp,
    duration: f64,
}

impl EffectTimer {
    pub fn new(
        kind: Element,
        from: Position,
        to: Position,
        started_at: Timestamp,
        duration: f64,
    ) -> Self {
        Self {
            kind,
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn kind(&self) -> Element {
        self.kind
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// True once `now - started_at >= duration`.
    pub fn is_finished(&self, now: Timestamp) -> bool {
        has_elapsed(self.started_at, self.duration, now)
    }

    /// Elapsed fraction in `[0, 1]`, for the renderer.
    pub fn progress(&self, now: Timestamp) -> f64 {
        progress(self.started_at, self.duration, now)
    }

    /// Self-targeted effects (heals) start and end on the same anchor.
    pub fn is_self_targeted(&self) -> bool {
        self.from == self.to
    }
}
