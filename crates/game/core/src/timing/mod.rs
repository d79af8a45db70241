//! Time-bounded tokens driven by host timestamps.
//!
//! Nothing here reads a clock. Every query takes the caller's `now`, so a
//! timer that expired while the host loop was stalled is simply reported as
//! finished on the next call.
mod clock;
mod effect;
mod flash;
mod tween;

pub use clock::Timestamp;
pub use effect::EffectTimer;
pub use flash::DamageFlash;
pub use tween::HealthTween;

/// True once `duration` seconds have passed since `started_at`.
///
/// Checked both as a difference and as an absolute deadline so that
/// `started_at.after(duration)` always counts as elapsed despite rounding.
pub(crate) fn has_elapsed(started_at: Timestamp, duration: f64, now: Timestamp) -> bool {
    now.elapsed_since(started_at) >= duration || now >= started_at.after(duration)
}

/// Fraction of `duration` elapsed between `started_at` and `now`, clamped to `[0, 1]`.
///
/// A non-positive duration is complete immediately.
pub(crate) fn progress(started_at: Timestamp, duration: f64, now: Timestamp) -> f64 {
    if duration <= 0.0 || has_elapsed(started_at, duration, now) {
        return 1.0;
    }
    (now.elapsed_since(started_at) / duration).clamp(0.0, 1.0)
}
