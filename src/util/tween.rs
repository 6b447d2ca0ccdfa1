//! Eased integer interpolation used by the counter animations.
//!
//! A [`Tween`] is a plain value: start, target, start time and duration. It
//! knows nothing about frames or the DOM, so the same math drives the browser
//! frame loop and the unit tests.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

/// Ease-out-cubic progress curve: `1 - (1 - t)^3` for `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One counter animation from `start` to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub start: u64,
    pub target: u64,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    #[must_use]
    pub fn new(start: u64, target: u64, started_ms: f64, duration_ms: f64) -> Self {
        Self { start, target, started_ms, duration_ms }
    }

    /// Normalized elapsed time in `[0, 1]`. Non-positive durations are complete.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Displayed value at `now_ms`; exactly `target` once finished.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(&self, now_ms: f64) -> u64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.target;
        }
        let start = self.start as f64;
        let range = self.target as f64 - start;
        let value = (start + range * ease_out_cubic(t)).floor();
        // floor() can only undershoot an increasing tween; clamp the decreasing
        // case so float error never drops below the target.
        let (lo, hi) = if self.target >= self.start {
            (self.start, self.target)
        } else {
            (self.target, self.start)
        };
        (value.max(0.0) as u64).clamp(lo, hi)
    }
}
