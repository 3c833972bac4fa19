//! Geometric primitives for shape placement.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in frame space
//! - [`Size`] - Width and height dimensions
//! - [`Extent`] - The visual extent of a shape (a radius or a size)
//!
//! # Coordinate System
//!
//! Frames use the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are whole, non-negative pixel values.

use serde::Deserialize;

/// A 2D point in frame coordinate space.
///
/// # Examples
///
/// ```
/// # use motif_core::geometry::Point;
/// let p = Point::new(10, 20);
/// assert_eq!(p.x(), 10);
/// assert_eq!(p.y(), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> u32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> u32 {
        self.y
    }
}

/// Width and height dimensions.
///
/// Deserializes from a `[width, height]` pair, which is how frame sizes are
/// written in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> u32 {
        self.height
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// The visual extent of a shape.
///
/// Circles are measured by their radius, rectangles by their size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Radius(u32),
    Size(Size),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3, 4);
        assert_eq!(point.x(), 3);
        assert_eq!(point.y(), 4);
    }

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_size_from_tuple() {
        let size = Size::from((1300, 500));
        assert_eq!(size.width(), 1300);
        assert_eq!(size.height(), 500);
    }
}
