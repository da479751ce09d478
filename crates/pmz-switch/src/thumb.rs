//! The thumb glyph: a shadowed capsule carrying two morphing sign strokes.
//!
//! Each of the three layers (two strokes and the background) owns its own
//! [`Timeline`]. A transition is authored once per state flip, from the
//! current value's resting pose to the opposite one, and is then either
//! played with host time or positioned by hand while a drag is scrubbing it.

use crate::glyph::{resting_pose, BackgroundPose, GlyphMetrics, GlyphPose, StrokePose};
use pmz_core::{
    BoxStyle, Canvas, Color, CornerRadius, Interpolate, Rect, Shadow, Timeline, Track,
    Transform2D,
};

/// Vertical offset of the thumb's drop shadow.
pub const SHADOW_OFFSET_Y: f32 = 7.0;
/// Blur radius of the thumb's drop shadow.
pub const SHADOW_BLUR: f32 = 4.0;
/// Color of the sign strokes.
pub const STROKE_COLOR: Color = Color::WHITE;

/// One layer's authored values and its clock.
#[derive(Debug, Clone, PartialEq)]
struct LayerAnimation<T> {
    track: Track<T>,
    timeline: Timeline,
}

impl<T: Interpolate + Clone> LayerAnimation<T> {
    fn sample(&self) -> T {
        self.track.sample(self.timeline.fraction())
    }
}

/// The three layer animations of one state flip.
#[derive(Debug, Clone, PartialEq)]
struct Transition {
    stroke_a: LayerAnimation<StrokePose>,
    stroke_b: LayerAnimation<StrokePose>,
    background: LayerAnimation<BackgroundPose>,
}

impl Transition {
    fn author(from: GlyphPose, to: GlyphPose, timeline: &Timeline) -> Self {
        Self {
            stroke_a: LayerAnimation {
                track: Track::new(from.stroke_a, to.stroke_a),
                timeline: timeline.clone(),
            },
            stroke_b: LayerAnimation {
                track: Track::new(from.stroke_b, to.stroke_b),
                timeline: timeline.clone(),
            },
            background: LayerAnimation {
                track: Track::new(from.background, to.background),
                timeline: timeline.clone(),
            },
        }
    }

    fn timelines_mut(&mut self) -> [&mut Timeline; 3] {
        [
            &mut self.stroke_a.timeline,
            &mut self.stroke_b.timeline,
            &mut self.background.timeline,
        ]
    }

    fn set_time_offset(&mut self, offset: f64) {
        for timeline in self.timelines_mut() {
            timeline.set_time_offset(offset);
        }
    }

    fn advance(&mut self, dt: f64) {
        for timeline in self.timelines_mut() {
            timeline.advance(dt);
        }
    }

    fn is_finished(&self) -> bool {
        self.stroke_a.timeline.is_finished()
            && self.stroke_b.timeline.is_finished()
            && self.background.timeline.is_finished()
    }

    fn pose(&self) -> GlyphPose {
        GlyphPose {
            stroke_a: self.stroke_a.sample(),
            stroke_b: self.stroke_b.sample(),
            background: self.background.sample(),
        }
    }
}

/// The switch knob.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbGlyph {
    frame: Rect,
    on: bool,
    scrubbing: bool,
    duration: f64,
    stroke_width: f32,
    tint: Color,
    on_tint: Color,
    shadow_color: Color,
    transition: Option<Transition>,
}

impl ThumbGlyph {
    /// Create an "off" thumb in the given frame.
    ///
    /// Both tints default to white and the shadow to gray.
    #[must_use]
    pub fn new(frame: Rect, duration: f64, stroke_width: f32) -> Self {
        Self {
            frame,
            on: false,
            scrubbing: false,
            duration,
            stroke_width,
            tint: Color::WHITE,
            on_tint: Color::WHITE,
            shadow_color: Color::GRAY,
            transition: None,
        }
    }

    /// Current frame.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the thumb.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The value the glyph shows (or is heading to).
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Whether a drag is positioning the timeline by hand.
    #[must_use]
    pub const fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Whether a transition is attached, played or scrubbed.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Position of the attached transition as a fraction of its duration.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.transition
            .as_ref()
            .map(|t| t.background.timeline.fraction())
    }

    /// Manual time offset of the attached transition, in seconds.
    #[must_use]
    pub fn time_offset(&self) -> Option<f64> {
        self.transition
            .as_ref()
            .map(|t| t.background.timeline.time_offset())
    }

    /// Off tint.
    #[must_use]
    pub const fn tint(&self) -> Color {
        self.tint
    }

    /// Set the off tint. An in-flight transition keeps its authored colors.
    pub fn set_tint(&mut self, color: Color) {
        self.tint = color;
    }

    /// On tint.
    #[must_use]
    pub const fn on_tint(&self) -> Color {
        self.on_tint
    }

    /// Set the on tint. An in-flight transition keeps its authored colors.
    pub fn set_on_tint(&mut self, color: Color) {
        self.on_tint = color;
    }

    /// Shadow color.
    #[must_use]
    pub const fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    /// Set the shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.shadow_color = color;
    }

    fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics::new(self.frame.width.min(self.frame.height), self.stroke_width)
    }

    fn resting(&self, on: bool) -> GlyphPose {
        resting_pose(self.metrics(), on, self.tint, self.on_tint)
    }

    fn author(&self, timeline: &Timeline) -> Transition {
        let from = self.resting(self.on);
        let to = self.resting(!self.on);
        Transition::author(from, to, timeline)
    }

    /// Position the scrubbed transition. `progress` is clamped to [0, 1],
    /// NaN counts as 0; 0 is the pose of the value the drag started from.
    pub fn set_progress(&mut self, progress: f64) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        log::trace!("thumb progress {progress:.3}");
        let offset = self.duration * progress;
        if let Some(transition) = self.transition.as_mut() {
            transition.set_time_offset(offset);
        }
    }

    /// Flip the value and run the transition, either over the configured
    /// duration or straight to the end.
    pub fn toggle(&mut self, animated: bool) {
        self.scrubbing = false;
        let transition = self.author(&Timeline::playing(self.duration));
        self.on = !self.on;
        log::debug!("thumb toggled to {} (animated: {animated})", self.on);
        self.transition = if animated && !transition.is_finished() {
            Some(transition)
        } else {
            None
        };
    }

    /// Attach a frozen transition from the current value for a drag to
    /// scrub. Does nothing while already scrubbing.
    pub fn begin_scrub(&mut self) {
        if self.scrubbing {
            return;
        }
        self.transition = Some(self.author(&Timeline::frozen(self.duration)));
        self.scrubbing = true;
        log::trace!("thumb scrub started from on={}", self.on);
    }

    /// Finish a scrub on `final_on`. The scrubbed transition jumps to the
    /// extreme showing `final_on` and settles there; without a scrub only
    /// the value changes.
    pub fn end_scrub(&mut self, final_on: bool) {
        self.on = final_on;
        if !self.scrubbing {
            return;
        }
        self.scrubbing = false;
        // Either extreme of the scrubbed transition is the resting pose of
        // `final_on`, so jumping there and settling is a drop.
        self.transition = None;
        log::trace!("thumb scrub ended on={final_on}");
    }

    /// Advance a playing transition. A finished one is dropped. Returns
    /// whether a transition is still playing.
    pub fn update(&mut self, dt: f64) -> bool {
        if self.scrubbing {
            return false;
        }
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.advance(dt);
        if transition.is_finished() {
            self.transition = None;
            return false;
        }
        true
    }

    /// Current pose: the attached transition's sample, or the resting pose.
    #[must_use]
    pub fn pose(&self) -> GlyphPose {
        self.transition
            .as_ref()
            .map_or_else(|| self.resting(self.on), Transition::pose)
    }

    /// Paint the background capsule, then both strokes.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let pose = self.pose();

        let mut style = BoxStyle::fill(pose.background.color);
        let opacity = pose.background.shadow_opacity;
        if opacity > 0.0 {
            style = style.with_shadow(Shadow {
                color: self
                    .shadow_color
                    .with_alpha(self.shadow_color.a * opacity),
                offset_x: 0.0,
                offset_y: SHADOW_OFFSET_Y,
                blur: SHADOW_BLUR,
            });
        }
        canvas.draw_box(self.frame, CornerRadius::capsule(self.frame.height), &style);

        for stroke in [pose.stroke_a, pose.stroke_b] {
            self.paint_stroke(canvas, stroke);
        }
    }

    fn paint_stroke(&self, canvas: &mut dyn Canvas, stroke: StrokePose) {
        if stroke.length <= 0.0 || self.stroke_width <= 0.0 {
            return;
        }
        let width = self.stroke_width;
        let origin = self.frame.origin() + stroke.center;
        // Drawn vertically about the origin, then turned and placed.
        let bar = Rect::new(-width * 0.5, -stroke.length * 0.5, width, stroke.length);
        canvas.push_transform(
            Transform2D::rotate(stroke.rotation)
                .then(&Transform2D::translate(origin.x, origin.y)),
        );
        canvas.fill_rounded_rect(bar, width * 0.5, STROKE_COLOR);
        canvas.pop_transform();
    }
}
