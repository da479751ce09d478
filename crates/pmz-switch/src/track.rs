//! Thumb placement inside the track.

use pmz_core::Rect;

/// Geometry derived from the control bounds and the border margin.
///
/// Nothing here is cached: a control rebuilds its geometry from the current
/// bounds for every operation that needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    bounds: Rect,
    margin: f32,
}

impl TrackGeometry {
    /// Geometry for the given bounds. Negative or NaN margins count as 0.
    #[must_use]
    pub fn new(bounds: Rect, margin: f32) -> Self {
        Self {
            bounds,
            margin: margin.max(0.0),
        }
    }

    /// Control bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Border margin.
    #[must_use]
    pub const fn margin(&self) -> f32 {
        self.margin
    }

    /// The thumb at its "off" position: a square as tall as the control,
    /// inset by the margin on every side.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        self.bounds
            .square_at_origin(self.bounds.height)
            .inset(self.margin)
    }

    /// How far the thumb can slide.
    #[must_use]
    pub fn max_travel(&self) -> f32 {
        let travel = 2.0f32.mul_add(-self.margin, self.bounds.width - self.thumb_rect().width);
        travel.max(0.0)
    }

    /// Leftmost thumb x.
    #[must_use]
    pub fn thumb_min_x(&self) -> f32 {
        self.thumb_rect().x
    }

    /// Rightmost thumb x.
    #[must_use]
    pub fn thumb_max_x(&self) -> f32 {
        self.thumb_min_x() + self.max_travel()
    }

    /// The thumb at its "on" position.
    #[must_use]
    pub fn on_rect(&self) -> Rect {
        self.thumb_rect().offset_by(self.max_travel(), 0.0)
    }

    /// Where the thumb rests for the given value.
    #[must_use]
    pub fn resting_rect(&self, on: bool) -> Rect {
        if on {
            self.on_rect()
        } else {
            self.thumb_rect()
        }
    }

    /// Clamp a thumb x into the travel range. NaN maps to the off edge.
    #[must_use]
    pub fn clamp_thumb_x(&self, x: f32) -> f32 {
        if x.is_nan() {
            return self.thumb_min_x();
        }
        x.clamp(self.thumb_min_x(), self.thumb_max_x())
    }

    /// How far a thumb at `x` has travelled away from the edge it rests on
    /// for `on`, as a fraction in [0, 1].
    #[must_use]
    pub fn scrub_fraction(&self, x: f32, on: bool) -> f64 {
        let travel = self.max_travel();
        if travel <= 0.0 {
            return 0.0;
        }
        let x = self.clamp_thumb_x(x);
        let moved = if on {
            self.thumb_max_x() - x
        } else {
            x - self.thumb_min_x()
        };
        f64::from(moved / travel).clamp(0.0, 1.0)
    }

    /// The value a released thumb settles to: on when its center is at or
    /// past the control's horizontal midpoint.
    #[must_use]
    pub fn settles_on(&self, thumb: Rect) -> bool {
        thumb.mid_x() >= self.bounds.mid_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_geometry() -> TrackGeometry {
        TrackGeometry::new(Rect::new(0.0, 0.0, 50.0, 30.0), 2.0)
    }

    #[test]
    fn test_default_geometry() {
        let g = default_geometry();
        assert_eq!(g.thumb_rect(), Rect::new(2.0, 2.0, 26.0, 26.0));
        assert_eq!(g.max_travel(), 20.0);
        assert_eq!(g.thumb_min_x(), 2.0);
        assert_eq!(g.thumb_max_x(), 22.0);
        assert_eq!(g.on_rect(), Rect::new(22.0, 2.0, 26.0, 26.0));
        assert_eq!(g.resting_rect(false), g.thumb_rect());
        assert_eq!(g.resting_rect(true), g.on_rect());
    }

    #[test]
    fn test_geometry_follows_bounds_origin() {
        let g = TrackGeometry::new(Rect::new(100.0, 40.0, 50.0, 30.0), 2.0);
        assert_eq!(g.thumb_rect(), Rect::new(102.0, 42.0, 26.0, 26.0));
        assert_eq!(g.on_rect().x, 122.0);
    }

    #[test]
    fn test_oversized_margin_degenerates_without_going_negative() {
        let g = TrackGeometry::new(Rect::new(0.0, 0.0, 50.0, 30.0), 17.0);
        assert_eq!(g.thumb_rect().width, 0.0);
        assert_eq!(g.max_travel(), 16.0);

        let g = TrackGeometry::new(Rect::new(0.0, 0.0, 30.0, 30.0), 20.0);
        assert_eq!(g.max_travel(), 0.0);
        assert_eq!(g.scrub_fraction(100.0, false), 0.0);
    }

    #[test]
    fn test_negative_margin_treated_as_zero() {
        let g = TrackGeometry::new(Rect::new(0.0, 0.0, 50.0, 30.0), -3.0);
        assert_eq!(g.margin(), 0.0);
        assert_eq!(g.thumb_rect(), Rect::new(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn test_clamp_thumb_x() {
        let g = default_geometry();
        assert_eq!(g.clamp_thumb_x(-50.0), 2.0);
        assert_eq!(g.clamp_thumb_x(12.0), 12.0);
        assert_eq!(g.clamp_thumb_x(500.0), 22.0);
        assert_eq!(g.clamp_thumb_x(f32::NAN), 2.0);
    }

    #[test]
    fn test_scrub_fraction_depends_on_start_state() {
        let g = default_geometry();
        assert_eq!(g.scrub_fraction(2.0, false), 0.0);
        assert_eq!(g.scrub_fraction(12.0, false), 0.5);
        assert_eq!(g.scrub_fraction(22.0, false), 1.0);

        assert_eq!(g.scrub_fraction(22.0, true), 0.0);
        assert_eq!(g.scrub_fraction(17.0, true), 0.25);
        assert_eq!(g.scrub_fraction(2.0, true), 1.0);
    }

    #[test]
    fn test_settles_on_at_midpoint() {
        let g = default_geometry();
        // Thumb center at 25 equals the control midpoint.
        assert!(g.settles_on(g.thumb_rect().with_x(12.0)));
        assert!(!g.settles_on(g.thumb_rect().with_x(11.9)));
        assert!(g.settles_on(g.on_rect()));
        assert!(!g.settles_on(g.thumb_rect()));
    }

    proptest! {
        #[test]
        fn prop_scrub_fraction_in_unit_range(x in -1000.0f32..1000.0, on in any::<bool>()) {
            let f = default_geometry().scrub_fraction(x, on);
            prop_assert!((0.0..=1.0).contains(&f));
        }

        #[test]
        fn prop_travel_never_negative(
            w in 0.0f32..400.0,
            h in 0.0f32..400.0,
            margin in -10.0f32..200.0,
        ) {
            let g = TrackGeometry::new(Rect::new(0.0, 0.0, w, h), margin);
            prop_assert!(g.max_travel() >= 0.0);
            prop_assert!(g.thumb_max_x() >= g.thumb_min_x());
        }
    }
}
