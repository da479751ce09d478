//! Poses of the thumb glyph.
//!
//! The thumb carries two sign strokes. Off, they cross at the center as an
//! "x"; on, they swing round and resize into a check mark. A [`GlyphPose`]
//! is one sampled frame of that morph together with the background fill.

use pmz_core::{Color, Interpolate, Point};
use std::f32::consts::{FRAC_PI_4, PI};

/// Shadow opacity of the background while on.
pub const ON_SHADOW_OPACITY: f32 = 0.5;

/// One sign stroke: a rounded bar rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePose {
    /// Rotation in radians
    pub rotation: f32,
    /// Bar length
    pub length: f32,
    /// Center relative to the thumb origin
    pub center: Point,
}

impl Interpolate for StrokePose {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            rotation: f32::interpolate(&from.rotation, &to.rotation, t),
            length: f32::interpolate(&from.length, &to.length, t),
            center: Point::interpolate(&from.center, &to.center, t),
        }
    }
}

/// The thumb's background capsule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPose {
    /// Drop shadow opacity in [0, 1]
    pub shadow_opacity: f32,
    /// Fill color
    pub color: Color,
}

impl Interpolate for BackgroundPose {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            shadow_opacity: f32::interpolate(&from.shadow_opacity, &to.shadow_opacity, t),
            color: Color::interpolate(&from.color, &to.color, t),
        }
    }
}

/// Complete visual state of the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPose {
    /// First stroke ("\" when off, the long arm of the check when on)
    pub stroke_a: StrokePose,
    /// Second stroke ("/" when off, the short arm of the check when on)
    pub stroke_b: StrokePose,
    /// Background capsule
    pub background: BackgroundPose,
}

/// Size-dependent stroke metrics for a thumb of side `side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    side: f32,
    stroke_width: f32,
}

impl GlyphMetrics {
    /// Metrics for a thumb of the given side and stroke width.
    #[must_use]
    pub fn new(side: f32, stroke_width: f32) -> Self {
        Self {
            side: side.max(0.0),
            stroke_width: stroke_width.max(0.0),
        }
    }

    /// Thumb side.
    #[must_use]
    pub const fn side(&self) -> f32 {
        self.side
    }

    /// Stroke width.
    #[must_use]
    pub const fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Length of both strokes while off.
    #[must_use]
    pub fn base_length(&self) -> f32 {
        self.side.mul_add(0.5, -self.stroke_width).max(0.0)
    }

    fn base_center(&self) -> Point {
        Point::new(self.side * 0.5, self.side * 0.5)
    }

    /// Resting pose of the first stroke.
    #[must_use]
    pub fn stroke_a(&self, on: bool) -> StrokePose {
        let length = self.base_length();
        let center = self.base_center();
        if on {
            StrokePose {
                rotation: FRAC_PI_4 - PI,
                length: length + self.stroke_width,
                center: center + Point::new(0.10 * self.side, 0.04 * self.side),
            }
        } else {
            StrokePose {
                rotation: FRAC_PI_4,
                length,
                center,
            }
        }
    }

    /// Resting pose of the second stroke.
    #[must_use]
    pub fn stroke_b(&self, on: bool) -> StrokePose {
        let length = self.base_length();
        let center = self.base_center();
        if on {
            StrokePose {
                rotation: -FRAC_PI_4 - PI,
                length: self.stroke_width.mul_add(0.85, length * 0.5),
                center: center + Point::new(-0.15 * self.side, 0.10 * self.side),
            }
        } else {
            StrokePose {
                rotation: -FRAC_PI_4,
                length,
                center,
            }
        }
    }
}

/// Resting background for the given value.
#[must_use]
pub fn background(on: bool, tint: Color, on_tint: Color) -> BackgroundPose {
    if on {
        BackgroundPose {
            shadow_opacity: ON_SHADOW_OPACITY,
            color: on_tint,
        }
    } else {
        BackgroundPose {
            shadow_opacity: 0.0,
            color: tint,
        }
    }
}

/// Resting pose of the whole glyph.
#[must_use]
pub fn resting_pose(metrics: GlyphMetrics, on: bool, tint: Color, on_tint: Color) -> GlyphPose {
    GlyphPose {
        stroke_a: metrics.stroke_a(on),
        stroke_b: metrics.stroke_b(on),
        background: background(on, tint, on_tint),
    }
}
