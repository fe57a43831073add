//! Point structure for representing coordinates

use std::fmt;

/// An immutable two-dimensional point
///
/// `x` holds the longitude and `y` the latitude when the point is
/// interpreted in a geographic coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Get the X coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the Y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitude of a geographic point, same as `x`
    pub fn lon(&self) -> f64 {
        self.x
    }

    /// Latitude of a geographic point, same as `y`
    pub fn lat(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
