//! Input events for widgets.
//!
//! Hosts translate their native mouse, touch and pointer callbacks into
//! [`Event`]s. Positions are in the same coordinate space as the bounds a
//! widget receives in `layout`.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// An input event delivered to [`Widget::event`](crate::Widget::event).
///
/// Mouse, touch and pointer-events input are kept as separate families so
/// a widget can follow one press without confusing it with another device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The mouse moved, pressed or not
    MouseMove {
        /// Cursor position
        position: Point,
    },
    /// A mouse button went down
    MouseDown {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// A mouse button came up
    MouseUp {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// A finger touched down
    TouchStart {
        /// Identifies the finger until it lifts
        id: TouchId,
        /// Contact position
        position: Point,
    },
    /// A finger moved
    TouchMove {
        /// Identifies the finger
        id: TouchId,
        /// Contact position
        position: Point,
    },
    /// A finger lifted
    TouchEnd {
        /// Identifies the finger
        id: TouchId,
        /// Last contact position
        position: Point,
    },
    /// The system took a touch away (e.g. an enclosing scroll view)
    TouchCancel {
        /// Identifies the finger
        id: TouchId,
    },
    /// A pointer-events press
    PointerDown {
        /// Identifies the pointer until it is released
        pointer_id: PointerId,
        /// Device kind
        pointer_type: PointerType,
        /// Press position
        position: Point,
        /// False for the extra fingers of a multi-touch press
        is_primary: bool,
        /// Pressed button, for devices that have buttons
        button: Option<MouseButton>,
    },
    /// A pointer-events move
    PointerMove {
        /// Identifies the pointer
        pointer_id: PointerId,
        /// New position
        position: Point,
    },
    /// A pointer-events release
    PointerUp {
        /// Identifies the pointer
        pointer_id: PointerId,
        /// Release position
        position: Point,
    },
    /// The system took a pointer away
    PointerCancel {
        /// Identifies the pointer
        pointer_id: PointerId,
    },
    /// A tap the host's own gesture recognizer detected. Hosts that have
    /// one usually send it right after the raw release of the same press.
    GestureTap {
        /// Tap position
        position: Point,
    },
}

impl Event {
    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match *self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. }
            | Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. }
            | Self::GestureTap { position } => Some(position),
            Self::TouchCancel { .. } | Self::PointerCancel { .. } => None,
        }
    }
}

/// Identifies one finger for the lifetime of its touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Identifies one pointer for the lifetime of its press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Device behind a pointer-events pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse
    #[default]
    Mouse,
    /// Finger
    Touch,
    /// Stylus
    Pen,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}
