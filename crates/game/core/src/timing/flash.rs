use crate::state::Side;

use super::{Timestamp, progress};

/// Red flash on a combatant that just took damage.
///
/// Purely cosmetic: it never gates a transition and is dropped by the next
/// poll after it runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageFlash {
    target: Side,
    started_at: Timestamp,
    duration: f64,
}

impl DamageFlash {
    /// Peak blend strength of the flash overlay.
    pub const MAX_INTENSITY: f64 = 0.7;
    /// Oscillation speed in radians per second.
    const FREQUENCY: f64 = 10.0;

    pub fn new(target: Side, started_at: Timestamp, duration: f64) -> Self {
        Self {
            target,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> Side {
        self.target
    }

    pub fn is_finished(&self, now: Timestamp) -> bool {
        progress(self.started_at, self.duration, now) >= 1.0
    }

    /// Overlay strength at `now`, or `None` once the flash is over.
    pub fn intensity(&self, now: Timestamp) -> Option<f64> {
        if self.is_finished(now) {
            return None;
        }
        let elapsed = now.elapsed_since(self.started_at).max(0.0);
        Some((elapsed * Self::FREQUENCY).sin().abs() * Self::MAX_INTENSITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillates_until_done() {
        let flash = DamageFlash::new(Side::Opponent, Timestamp(1.0), 0.5);
        assert_eq!(flash.intensity(Timestamp(1.0)), Some(0.0));

        let mid = flash.intensity(Timestamp(1.15)).unwrap();
        assert!(mid > 0.0 && mid <= DamageFlash::MAX_INTENSITY);

        assert_eq!(flash.intensity(Timestamp(1.5)), None);
        assert!(flash.is_finished(Timestamp(3.0)));
    }
}
