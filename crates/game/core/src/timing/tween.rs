use crate::state::Side;

use super::{Timestamp, progress};

/// Linear slide of one combatant's displayed HP towards its resolved value.
///
/// `value_at` returns `end_hp` exactly once progress reaches 1, so the bar
/// never settles on a value carrying interpolation error.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthTween {
    target: Side,
    start_hp: f64,
    end_hp: u32,
    started_at: Timestamp,
    duration: f64,
}

impl HealthTween {
    pub fn new(
        target: Side,
        start_hp: f64,
        end_hp: u32,
        started_at: Timestamp,
        duration: f64,
    ) -> Self {
        Self {
            target,
            start_hp,
            end_hp,
            started_at,
            duration,
        }
    }

    /// The combatant whose health bar this tween drives.
    pub fn target(&self) -> Side {
        self.target
    }

    pub fn start_hp(&self) -> f64 {
        self.start_hp
    }

    pub fn end_hp(&self) -> u32 {
        self.end_hp
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn progress(&self, now: Timestamp) -> f64 {
        progress(self.started_at, self.duration, now)
    }

    pub fn is_finished(&self, now: Timestamp) -> bool {
        self.progress(now) >= 1.0
    }

    /// Displayed HP at `now`.
    pub fn value_at(&self, now: Timestamp) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return f64::from(self.end_hp);
        }
        self.start_hp + (f64::from(self.end_hp) - self.start_hp) * t
    }
}
