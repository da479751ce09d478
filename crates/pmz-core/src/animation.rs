//! Animation primitives: easing, interpolation, eased values and scrubbable
//! timelines.
//!
//! A [`Timeline`] is a fixed-duration clock whose read position can either
//! advance with host time (speed 1) or be set by hand (speed 0). Pairing a
//! timeline with a [`Track`] gives a layer animation that can be played or
//! scrubbed with the same authored values.

use crate::geometry::Point;
use crate::Color;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            x: f32::interpolate(&from.x, &to.x, t),
            y: f32::interpolate(&from.y, &to.y, t),
        }
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: sanitize_duration(duration),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// Track - authored from/to pair
// =============================================================================

/// A linear from/to pair sampled by a timeline fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    /// Value at fraction 0
    pub from: T,
    /// Value at fraction 1
    pub to: T,
}

impl<T: Interpolate + Clone> Track<T> {
    /// Create a new track.
    #[must_use]
    pub const fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Sample at a fraction in [0, 1].
    #[must_use]
    pub fn sample(&self, fraction: f64) -> T {
        T::interpolate(&self.from, &self.to, fraction.clamp(0.0, 1.0))
    }
}

// =============================================================================
// Timeline - scrubbable clock
// =============================================================================

/// A fixed-duration clock with a speed and a manual time offset.
///
/// Local time is `time_offset + elapsed * speed`, clamped to
/// `[0, duration]`. With speed 0 the offset alone positions the timeline,
/// which is how a drag scrubs an animation by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration: f64,
    speed: f64,
    time_offset: f64,
    elapsed: f64,
}

impl Timeline {
    /// A timeline that plays forward with host time.
    #[must_use]
    pub fn playing(duration: f64) -> Self {
        Self {
            duration: sanitize_duration(duration),
            speed: 1.0,
            time_offset: 0.0,
            elapsed: 0.0,
        }
    }

    /// A timeline frozen at offset 0, to be positioned by hand.
    #[must_use]
    pub fn frozen(duration: f64) -> Self {
        Self {
            speed: 0.0,
            ..Self::playing(duration)
        }
    }

    /// Total duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Current playback speed.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Manual time offset.
    #[must_use]
    pub const fn time_offset(&self) -> f64 {
        self.time_offset
    }

    /// Set the manual time offset, clamped to `[0, duration]`.
    pub fn set_time_offset(&mut self, offset: f64) {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.time_offset = offset.clamp(0.0, self.duration);
        self.elapsed = 0.0;
    }

    /// Read position in seconds.
    #[must_use]
    pub fn local_time(&self) -> f64 {
        self.elapsed
            .mul_add(self.speed, self.time_offset)
            .clamp(0.0, self.duration)
    }

    /// Read position as a fraction of the duration. A zero-length timeline
    /// is always at its end.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration > 0.0 {
            self.local_time() / self.duration
        } else {
            1.0
        }
    }

    /// Whether the read position has reached the end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.local_time() >= self.duration
    }

    /// Advance host time.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!((easing.apply(0.0)).abs() < 1e-9, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::EaseIn.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
    }

    #[test]
    fn test_interpolate_color_and_point() {
        let c = Color::interpolate(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((c.r - 0.5).abs() < 1e-3);

        let p = Point::interpolate(&Point::ORIGIN, &Point::new(10.0, -4.0), 0.5);
        assert_eq!(p, Point::new(5.0, -2.0));
    }

    #[test]
    fn test_eased_value_runs_to_target() {
        let mut v = EasedValue::new(2.0, 22.0, 0.3).with_easing(Easing::EaseIn);
        assert_eq!(v.value(), 2.0);
        v.update(0.15);
        assert!(v.value() > 2.0 && v.value() < 12.0);
        v.update(1.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 22.0);
    }

    #[test]
    fn test_eased_value_zero_duration_is_complete() {
        let v = EasedValue::new(0.0, 5.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 5.0);
    }

    #[test]
    fn test_track_sample_clamps() {
        let track = Track::new(0.0f32, 10.0);
        assert_eq!(track.sample(0.25), 2.5);
        assert_eq!(track.sample(3.0), 10.0);
        assert_eq!(track.sample(-1.0), 0.0);
    }

    #[test]
    fn test_timeline_playing_advances() {
        let mut t = Timeline::playing(0.3);
        assert_eq!(t.fraction(), 0.0);
        t.advance(0.15);
        assert!((t.fraction() - 0.5).abs() < 1e-9);
        t.advance(1.0);
        assert!(t.is_finished());
        assert_eq!(t.local_time(), 0.3);
    }

    #[test]
    fn test_timeline_frozen_ignores_host_time() {
        let mut t = Timeline::frozen(0.3);
        assert_eq!(t.speed(), 0.0);
        assert_eq!(Timeline::playing(0.3).speed(), 1.0);
        t.advance(10.0);
        assert_eq!(t.local_time(), 0.0);
        t.set_time_offset(0.1);
        assert!((t.fraction() - 1.0 / 3.0).abs() < 1e-9);
        t.set_time_offset(5.0);
        assert_eq!(t.time_offset(), 0.3);
        t.set_time_offset(f64::NAN);
        assert_eq!(t.time_offset(), 0.0);
    }

    #[test]
    fn test_timeline_offset_to_end_finishes() {
        let mut t = Timeline::frozen(0.3);
        t.set_time_offset(0.3);
        assert!(t.is_finished());
        assert_eq!(t.fraction(), 1.0);
    }

    #[test]
    fn test_timeline_zero_duration() {
        let t = Timeline::playing(0.0);
        assert!(t.is_finished());
        assert_eq!(t.fraction(), 1.0);
        assert_eq!(Timeline::playing(f64::INFINITY).duration(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_timeline_fraction_in_unit_range(offset in -10.0f64..10.0, dt in 0.0f64..10.0, frozen: bool) {
            let mut t = if frozen { Timeline::frozen(0.3) } else { Timeline::playing(0.3) };
            t.set_time_offset(offset);
            t.advance(dt);
            prop_assert!((0.0..=1.0).contains(&t.fraction()));
        }

        #[test]
        fn prop_track_sample_within_bounds(a in -100.0f32..100.0, b in -100.0f32..100.0, f in -2.0f64..2.0) {
            let v = Track::new(a, b).sample(f);
            prop_assert!(v >= a.min(b) - 1e-3 && v <= a.max(b) + 1e-3);
        }
    }
}
