#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Animations are advanced explicitly with [`Animation::tick`]; nothing here
//! reads a clock. The runtime delivers ticks, the model forwards the elapsed
//! time, and tests drive them with fixed durations.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Rewind to the start.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates an unsigned position (pixels) between two values.
///
/// Elapsed time is accumulated as a [`Duration`] so repeated small ticks do
/// not drift. The final position is always exactly `to`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: u32,
    to: u32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration` with ease-out.
    pub fn new(from: u32, to: u32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: ease_out,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Where the tween ends.
    pub fn target(&self) -> u32 {
        self.to
    }

    fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated position.
    pub fn position(&self) -> u32 {
        if self.is_complete() {
            return self.to;
        }
        let t = (self.easing)(self.progress());
        let range = f64::from(self.to) - f64::from(self.from);
        let pos = f64::from(self.from) + range * f64::from(t);
        pos.round().clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn easing_endpoints() {
        for f in [linear as EasingFn, ease_out, ease_in_out] {
            assert!((f(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((f(1.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert!((linear(-1.0) - 0.0).abs() < f32::EPSILON);
        assert!((ease_out(1.5) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_out_faster_start() {
        assert!(ease_out(0.5) > linear(0.5));
    }

    #[test]
    fn tween_starts_at_from() {
        let tween = Tween::new(100, 400, MS_300);
        assert_eq!(tween.position(), 100);
        assert!(!tween.is_complete());
    }

    #[test]
    fn tween_ends_exactly_at_to() {
        let mut tween = Tween::new(100, 400, MS_300);
        tween.tick(MS_300);
        assert!(tween.is_complete());
        assert_eq!(tween.position(), 400);
    }

    #[test]
    fn tween_moves_backwards() {
        let mut tween = Tween::new(400, 0, MS_300).easing(linear);
        tween.tick(MS_100);
        let pos = tween.position();
        assert!(pos < 400 && pos > 0, "pos = {pos}");
    }

    #[test]
    fn tween_is_monotonic() {
        let mut tween = Tween::new(0, 1000, MS_300);
        let mut last = 0;
        for _ in 0..20 {
            tween.tick(Duration::from_millis(16));
            let pos = tween.position();
            assert!(pos >= last);
            last = pos;
        }
        assert_eq!(last, 1000);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut tween = Tween::new(0, 50, Duration::ZERO);
        tween.tick(Duration::from_nanos(1));
        assert!(tween.is_complete());
        assert_eq!(tween.position(), 50);
    }

    #[test]
    fn reset_rewinds() {
        let mut tween = Tween::new(0, 50, MS_100);
        tween.tick(MS_100);
        tween.reset();
        assert_eq!(tween.position(), 0);
    }
}
