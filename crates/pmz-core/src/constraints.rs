//! Layout constraints handed to [`Widget::measure`](crate::Widget::measure).

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// The range of sizes a parent accepts from a child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Smallest acceptable width
    pub min_width: f32,
    /// Largest acceptable width
    pub max_width: f32,
    /// Smallest acceptable height
    pub min_height: f32,
    /// Largest acceptable height
    pub max_height: f32,
}

impl Constraints {
    /// Constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// The acceptable size closest to `preferred`.
    #[must_use]
    pub fn constrain(&self, preferred: Size) -> Size {
        Size::new(
            preferred.width.clamp(self.min_width, self.max_width),
            preferred.height.clamp(self.min_height, self.max_height),
        )
    }
}
