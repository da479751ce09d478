//! Animated on/off switch widget.
//!
//! A [`SwitchControl`] is a capsule track with a round thumb. The thumb
//! carries two sign strokes that morph from an "x" (off) into a check mark
//! (on). Tapping flips the value with an animation; dragging the thumb
//! scrubs the same animation by hand and settles on whichever side the
//! thumb is released nearer to.
//!
//! The widget is render-agnostic: it paints through [`pmz_core::Canvas`]
//! and receives input as [`pmz_core::Event`]s.
//!
//! # Examples
//!
//! ```
//! use pmz_core::{Event, MouseButton, Point, Widget};
//! use pmz_switch::{SwitchChanged, SwitchControl};
//!
//! let mut switch = SwitchControl::new(None);
//! switch.event(&Event::MouseDown {
//!     position: Point::new(10.0, 15.0),
//!     button: MouseButton::Left,
//! });
//! let message = switch.event(&Event::MouseUp {
//!     position: Point::new(10.0, 15.0),
//!     button: MouseButton::Left,
//! });
//!
//! let changed = message.and_then(|m| m.downcast::<SwitchChanged>().ok());
//! assert_eq!(changed.map(|c| c.on), Some(true));
//! assert!(switch.is_on());
//! ```

mod config;
mod error;
pub mod gesture;
pub mod glyph;
mod switch;
mod thumb;
mod track;

pub use config::{
    default_frame, SwitchConfig, DEFAULT_ANIMATION_DURATION, DEFAULT_BORDER_MARGIN,
    DEFAULT_HEIGHT, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH,
};
pub use error::ConfigError;
pub use gesture::{GestureAction, GestureInput, GesturePhase, GestureTracker, PointerSource};
pub use glyph::{BackgroundPose, GlyphMetrics, GlyphPose, StrokePose};
pub use switch::{SwitchChanged, SwitchControl};
pub use thumb::ThumbGlyph;
pub use track::TrackGeometry;
