//! Coordinate handling for point encoding
//!
//! This module provides the point value and the coordinate systems
//! that decide how a point is packed and formatted.

mod point;
mod system;

// Re-export key types
pub use self::point::Point;
pub use self::system::{Axis, CoordinateSystem, Quantization};
