//! The switch control.

use crate::config::{default_frame, SwitchConfig};
use crate::gesture::{GestureAction, GestureInput, GestureTracker};
use crate::thumb::ThumbGlyph;
use crate::track::TrackGeometry;
use pmz_core::{
    widget::LayoutResult, Canvas, Color, Constraints, EasedValue, Easing, Event, Rect, Size,
    TypeId, Widget,
};
use std::any::Any;

/// Message emitted when user interaction changed the switch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new value
    pub on: bool,
}

/// An on/off switch with a draggable, morphing thumb.
///
/// The control owns layout and gesture handling; everything the thumb
/// shows is delegated to its [`ThumbGlyph`].
#[derive(Debug, Clone)]
pub struct SwitchControl {
    /// Current value
    on: bool,
    /// Control bounds
    bounds: Rect,
    /// Gap between track edge and thumb
    border_margin: f32,
    /// Transition length in seconds
    duration: f64,
    /// Track fill
    track_color: Color,
    /// The knob
    thumb: ThumbGlyph,
    /// Thumb x animation toward a resting rect
    thumb_motion: Option<EasedValue>,
    /// Press / drag / tap state machine
    gestures: GestureTracker,
}

impl Default for SwitchControl {
    fn default() -> Self {
        Self::with_config(&SwitchConfig::default())
    }
}

impl SwitchControl {
    /// Create a switch in `frame`, or in the default 50x30 frame when
    /// `frame` is missing or has no area.
    #[must_use]
    pub fn new(frame: Option<Rect>) -> Self {
        let config = SwitchConfig::default();
        let mut switch = Self::with_config(&config);
        if let Some(frame) = frame.filter(|f| !f.is_empty()) {
            switch.bounds = frame;
            switch.snap_thumb();
        }
        switch
    }

    /// Create a switch from a configuration. The configuration's frame
    /// falls back to the default frame when it has no area.
    #[must_use]
    pub fn with_config(config: &SwitchConfig) -> Self {
        let frame = config.frame();
        let bounds = if frame.is_empty() {
            default_frame()
        } else {
            frame
        };
        let geometry = TrackGeometry::new(bounds, config.border_margin);

        let mut thumb = ThumbGlyph::new(
            geometry.thumb_rect(),
            config.animation_duration,
            config.stroke_width,
        );
        thumb.set_tint(config.thumb_tint);
        thumb.set_on_tint(config.on_thumb_tint);
        thumb.set_shadow_color(config.shadow_color);

        let mut switch = Self {
            on: false,
            bounds,
            border_margin: config.border_margin,
            duration: config.animation_duration,
            track_color: config.track_color,
            thumb,
            thumb_motion: None,
            gestures: GestureTracker::new(),
        };
        if config.on {
            switch.thumb.toggle(false);
            switch.set_on(true, false);
        }
        switch
    }

    /// Set the initial value.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        if on != self.on {
            self.thumb.toggle(false);
        }
        self.set_on(on, false);
        self
    }

    /// Set the off thumb tint.
    #[must_use]
    pub fn thumb_tint(mut self, color: Color) -> Self {
        self.set_thumb_tint(color);
        self
    }

    /// Set the on thumb tint.
    #[must_use]
    pub fn on_thumb_tint(mut self, color: Color) -> Self {
        self.set_on_thumb_tint(color);
        self
    }

    /// Set the thumb shadow color.
    #[must_use]
    pub fn shadow_color(mut self, color: Color) -> Self {
        self.set_shadow_color(color);
        self
    }

    /// Set the track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Current value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Set the value, either animating the thumb over the configured
    /// duration or snapping it.
    ///
    /// An animation starts from wherever the thumb is displayed, so
    /// interrupting one in flight never makes the thumb jump.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.on = on;
        self.thumb.end_scrub(on);

        let target = self.geometry().resting_rect(on);
        if animated && self.duration > 0.0 {
            let from_x = self.thumb.frame().x;
            self.thumb.set_frame(target.with_x(from_x));
            self.thumb_motion = Some(
                EasedValue::new(f64::from(from_x), f64::from(target.x), self.duration)
                    .with_easing(Easing::EaseIn),
            );
        } else {
            self.thumb_motion = None;
            self.thumb.set_frame(target);
        }
        log::debug!("switch set to {on} (animated: {animated})");
    }

    /// Off thumb tint.
    #[must_use]
    pub const fn get_thumb_tint(&self) -> Color {
        self.thumb.tint()
    }

    /// Set the off thumb tint.
    pub fn set_thumb_tint(&mut self, color: Color) {
        self.thumb.set_tint(color);
    }

    /// On thumb tint.
    #[must_use]
    pub const fn get_on_thumb_tint(&self) -> Color {
        self.thumb.on_tint()
    }

    /// Set the on thumb tint.
    pub fn set_on_thumb_tint(&mut self, color: Color) {
        self.thumb.set_on_tint(color);
    }

    /// Thumb shadow color.
    #[must_use]
    pub const fn get_shadow_color(&self) -> Color {
        self.thumb.shadow_color()
    }

    /// Set the thumb shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.thumb.set_shadow_color(color);
    }

    /// Track color.
    #[must_use]
    pub const fn get_track_color(&self) -> Color {
        self.track_color
    }

    /// Set the track color.
    pub fn set_track_color(&mut self, color: Color) {
        self.track_color = color;
    }

    /// The thumb.
    #[must_use]
    pub const fn thumb(&self) -> &ThumbGlyph {
        &self.thumb
    }

    /// Gesture state.
    #[must_use]
    pub const fn gestures(&self) -> &GestureTracker {
        &self.gestures
    }

    /// Geometry for the current bounds.
    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.bounds, self.border_margin)
    }

    /// The thumb's resting frame while off.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        self.geometry().thumb_rect()
    }

    /// How far the thumb can slide.
    #[must_use]
    pub fn max_travel(&self) -> f32 {
        self.geometry().max_travel()
    }

    /// Advance animations by `dt` seconds. Returns whether anything is
    /// still moving.
    pub fn update(&mut self, dt: f64) -> bool {
        self.gestures.next_turn();

        let mut moving = false;
        if let Some(motion) = self.thumb_motion.as_mut() {
            motion.update(dt);
            let x = motion.value() as f32;
            let done = motion.is_complete();
            self.thumb.set_frame(self.thumb.frame().with_x(x));
            if done {
                self.thumb_motion = None;
            } else {
                moving = true;
            }
        }
        self.thumb.update(dt) || moving
    }

    fn snap_thumb(&mut self) {
        self.thumb_motion = None;
        self.thumb
            .set_frame(self.geometry().resting_rect(self.on));
    }

    fn drag_thumb(&mut self, start_thumb_rect: Rect, dx: f32) {
        let geometry = self.geometry();
        let x = geometry.clamp_thumb_x(start_thumb_rect.x + dx);
        self.thumb_motion = None;
        self.thumb.set_frame(start_thumb_rect.with_x(x));
        self.thumb.set_progress(geometry.scrub_fraction(x, self.on));
    }

    fn changed(&self, before: bool) -> Option<Box<dyn Any + Send>> {
        if self.on == before {
            return None;
        }
        log::info!("switch changed to {}", self.on);
        Some(Box::new(SwitchChanged { on: self.on }))
    }
}

impl Widget for SwitchControl {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds.size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if self.gestures.is_idle() {
            self.snap_thumb();
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(self.bounds, self.bounds.height * 0.5, self.track_color);
        self.thumb.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let input = GestureInput::from_event(event)?;
        let hit = event
            .position()
            .is_some_and(|p| self.bounds.contains_point(&p));
        let action = self.gestures.handle(input, hit, self.thumb.frame())?;

        match action {
            GestureAction::Begin => {
                self.thumb.begin_scrub();
                None
            }
            GestureAction::Drag {
                start_thumb_rect,
                dx,
            } => {
                self.drag_thumb(start_thumb_rect, dx);
                None
            }
            GestureAction::Release => {
                let before = self.on;
                let settles_on = self.geometry().settles_on(self.thumb.frame());
                self.set_on(settles_on, true);
                self.changed(before)
            }
            GestureAction::Tap => {
                let before = self.on;
                self.thumb.toggle(true);
                self.set_on(!before, true);
                self.changed(before)
            }
            GestureAction::Revert => {
                self.set_on(self.on, true);
                None
            }
            GestureAction::Abort => {
                self.thumb.end_scrub(self.on);
                None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
