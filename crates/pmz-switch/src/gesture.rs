//! Pointer gesture tracking.
//!
//! Raw mouse, touch and pointer events are first normalized into
//! [`GestureInput`]s, then fed through a [`GestureTracker`] which decides
//! whether a press ends up as a tap, a drag, or nothing at all.

use pmz_core::{Event, MouseButton, Point, PointerId, Rect, TouchId};

/// Where a pointer sequence comes from. A sequence only accepts follow-up
/// events from the source that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// The (left) mouse button
    Mouse,
    /// A touch point
    Touch(TouchId),
    /// A pointer-events pointer
    Pointer(PointerId),
}

/// A normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Press
    Begin {
        /// Pressing source
        source: PointerSource,
        /// Press position
        position: Point,
    },
    /// Move while pressed
    Continue {
        /// Moving source
        source: PointerSource,
        /// New position
        position: Point,
    },
    /// Release
    End {
        /// Releasing source
        source: PointerSource,
        /// Release position
        position: Point,
    },
    /// System cancellation
    Cancel {
        /// Cancelled source
        source: PointerSource,
    },
    /// Tap recognized by the host
    Tap {
        /// Tap position
        position: Point,
    },
}

impl GestureInput {
    /// Normalize a widget event. Non-left mouse buttons and secondary
    /// pointers are dropped.
    #[must_use]
    pub fn from_event(event: &Event) -> Option<Self> {
        let input = match *event {
            Event::MouseDown { position, button } => {
                if button != MouseButton::Left {
                    return None;
                }
                Self::Begin {
                    source: PointerSource::Mouse,
                    position,
                }
            }
            Event::MouseMove { position } => Self::Continue {
                source: PointerSource::Mouse,
                position,
            },
            Event::MouseUp { position, button } => {
                if button != MouseButton::Left {
                    return None;
                }
                Self::End {
                    source: PointerSource::Mouse,
                    position,
                }
            }
            Event::TouchStart { id, position } => Self::Begin {
                source: PointerSource::Touch(id),
                position,
            },
            Event::TouchMove { id, position } => Self::Continue {
                source: PointerSource::Touch(id),
                position,
            },
            Event::TouchEnd { id, position } => Self::End {
                source: PointerSource::Touch(id),
                position,
            },
            Event::TouchCancel { id } => Self::Cancel {
                source: PointerSource::Touch(id),
            },
            Event::PointerDown {
                pointer_id,
                position,
                is_primary,
                button,
                ..
            } => {
                if !is_primary || button.is_some_and(|b| b != MouseButton::Left) {
                    return None;
                }
                Self::Begin {
                    source: PointerSource::Pointer(pointer_id),
                    position,
                }
            }
            Event::PointerMove {
                pointer_id,
                position,
            } => Self::Continue {
                source: PointerSource::Pointer(pointer_id),
                position,
            },
            Event::PointerUp {
                pointer_id,
                position,
            } => Self::End {
                source: PointerSource::Pointer(pointer_id),
                position,
            },
            Event::PointerCancel { pointer_id } => Self::Cancel {
                source: PointerSource::Pointer(pointer_id),
            },
            Event::GestureTap { position } => Self::Tap { position },
        };
        Some(input)
    }
}

/// State kept for one pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Source that started the sequence
    pub source: PointerSource,
    /// Press position
    pub start_point: Point,
    /// Thumb frame at press time
    pub start_thumb_rect: Rect,
}

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// No sequence in progress
    #[default]
    Idle,
    /// Pressed, not moved yet
    TapPending(GestureSession),
    /// Pressed and dragging
    Tracking(GestureSession),
}

impl GesturePhase {
    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Idle => None,
            Self::TapPending(session) | Self::Tracking(session) => Some(session),
        }
    }
}

/// What the control should do in response to an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// A sequence started: attach a scrub
    Begin,
    /// The thumb was dragged `dx` away from where it was at press time
    Drag {
        /// Thumb frame at press time
        start_thumb_rect: Rect,
        /// Horizontal pointer delta since the press
        dx: f32,
    },
    /// A drag was released: settle on the nearer side
    Release,
    /// Flip the value
    Tap,
    /// A drag was cancelled: go back to the pre-gesture value
    Revert,
    /// A press was cancelled before it moved: drop the scrub
    Abort,
}

/// The Idle / `TapPending` / Tracking state machine.
///
/// A release after a drag (or a raw-sequence tap) arms "ignore next tap",
/// which swallows the host-recognized [`GestureInput::Tap`] for the same
/// press. The flag is cleared by [`next_turn`](Self::next_turn), by the
/// next press, and by a cancelled drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    ignore_tap: bool,
}

impl GestureTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether no sequence is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    /// Whether the next host tap will be swallowed.
    #[must_use]
    pub const fn ignores_tap(&self) -> bool {
        self.ignore_tap
    }

    /// End of the current event turn: a pending "ignore next tap" lapses
    /// once no sequence is in progress.
    pub fn next_turn(&mut self) {
        if self.is_idle() {
            self.ignore_tap = false;
        }
    }

    /// Feed one input. `hit` says whether the input's position lies inside
    /// the control; `thumb_rect` is the thumb's displayed frame.
    pub fn handle(
        &mut self,
        input: GestureInput,
        hit: bool,
        thumb_rect: Rect,
    ) -> Option<GestureAction> {
        match input {
            GestureInput::Begin { source, position } => {
                if !self.is_idle() || !hit {
                    return None;
                }
                self.ignore_tap = false;
                self.phase = GesturePhase::TapPending(GestureSession {
                    source,
                    start_point: position,
                    start_thumb_rect: thumb_rect,
                });
                log::debug!(
                    "gesture began at ({}, {}) from {source:?}",
                    position.x,
                    position.y
                );
                Some(GestureAction::Begin)
            }
            GestureInput::Continue { source, position } => {
                let session = *self.phase.session().filter(|s| s.source == source)?;
                if matches!(self.phase, GesturePhase::TapPending(_)) {
                    log::debug!("gesture became a drag");
                }
                self.ignore_tap = true;
                self.phase = GesturePhase::Tracking(session);
                Some(GestureAction::Drag {
                    start_thumb_rect: session.start_thumb_rect,
                    dx: position.x - session.start_point.x,
                })
            }
            GestureInput::End { source, .. } => match self.phase {
                GesturePhase::TapPending(session) if session.source == source => {
                    self.phase = GesturePhase::Idle;
                    self.ignore_tap = true;
                    log::debug!("gesture ended as a tap");
                    Some(GestureAction::Tap)
                }
                GesturePhase::Tracking(session) if session.source == source => {
                    self.phase = GesturePhase::Idle;
                    log::debug!("drag released");
                    Some(GestureAction::Release)
                }
                _ => None,
            },
            GestureInput::Cancel { source } => match self.phase {
                GesturePhase::TapPending(session) if session.source == source => {
                    self.phase = GesturePhase::Idle;
                    log::debug!("press cancelled");
                    Some(GestureAction::Abort)
                }
                GesturePhase::Tracking(session) if session.source == source => {
                    self.phase = GesturePhase::Idle;
                    self.ignore_tap = false;
                    log::debug!("drag cancelled");
                    Some(GestureAction::Revert)
                }
                _ => None,
            },
            GestureInput::Tap { .. } => {
                if !self.is_idle() || !hit {
                    return None;
                }
                if self.ignore_tap {
                    log::debug!("host tap swallowed");
                    return None;
                }
                Some(GestureAction::Tap)
            }
        }
    }
}
