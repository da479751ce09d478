//! Core types and traits for the PMZ switch.
//!
//! This crate provides the render-agnostic foundation the switch widget is
//! built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Animation: [`Easing`], [`EasedValue`], [`Track`], [`Timeline`]

mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{EasedValue, Easing, Interpolate, Timeline, Track};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, Shadow, Transform2D};
pub use event::{Event, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TypeId, Widget};
