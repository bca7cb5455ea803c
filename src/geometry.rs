//! Minimal world-space value types consumed by the grid.
//!
//! The grid only reads positions and box corners; it never does geometry on
//! them beyond mapping coordinates to cells.

use serde::{Deserialize, Serialize};

/// A point in world coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Vec2 {
    /// Creates a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box in world coordinates
///
/// `(x, y)` is the top-left corner; the box extends `width` to the right and
/// `height` downwards (screen convention, y grows down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Extent to the right of `x`
    pub width: f64,
    /// Extent below `y`
    pub height: f64,
}

impl Rect {
    /// Creates a box from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a box from its two opposite corners (`min_x`, `min_y`, `max_x`, `max_y`)
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Creates a box of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Corner at (`x`, `y`)
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Corner at (`x + width`, `y + height`)
    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Midpoint of the box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    /// Tuple order is (x, y, width, height)
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }
}
