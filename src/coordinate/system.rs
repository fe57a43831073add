//! Coordinate systems supported by the codecs
//!
//! Each system declares the valid domain of both axes, how the integer
//! codec quantizes them, and the text template used by the text codec.

use std::fmt;
use std::str::FromStr;

use crate::codec::constants::{bounds, cartesian, geo};
use crate::codec::errors::{CodecError, CodecResult};
use crate::codec::text::{PointTemplate, POINT_TEMPLATE};

/// One of the two axes of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Longitude in geographic systems
    X,
    /// Latitude in geographic systems
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// How a coordinate system squeezes one axis into a 32-bit lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantization {
    /// Uniform grid with a fixed step per axis, in coordinate units
    FixedPoint { x_step: f64, y_step: f64 },
    /// Sign, exponent and rounded significand, so the error scales with the value
    FloatingPoint { exponent_bits: u32, significand_bits: u32 },
}

/// Identifier for the supported coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Longitude/latitude in degrees
    Geographic,
    /// Unbounded planar x/y
    Cartesian,
}

impl CoordinateSystem {
    /// Every supported coordinate system
    pub const ALL: [CoordinateSystem; 2] = [CoordinateSystem::Geographic, CoordinateSystem::Cartesian];

    /// Canonical name, accepted back by `from_str`
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Geographic => "geo",
            CoordinateSystem::Cartesian => "cartesian",
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> &'static str {
        match self {
            CoordinateSystem::Geographic => "Geographic longitude/latitude in degrees (WGS 84)",
            CoordinateSystem::Cartesian => "Planar cartesian x/y in arbitrary units",
        }
    }

    /// Declared valid range of an axis
    ///
    /// Cartesian axes accept every finite double.
    pub fn domain(&self, axis: Axis) -> (f64, f64) {
        match (self, axis) {
            (CoordinateSystem::Geographic, Axis::X) => (geo::MIN_LON_INCL, geo::MAX_LON_INCL),
            (CoordinateSystem::Geographic, Axis::Y) => (geo::MIN_LAT_INCL, geo::MAX_LAT_INCL),
            (CoordinateSystem::Cartesian, _) => (f64::MIN, f64::MAX),
        }
    }

    /// Check whether a value lies inside the domain of an axis
    ///
    /// NaN and infinities are never inside.
    pub fn contains(&self, axis: Axis, value: f64) -> bool {
        let (min, max) = self.domain(axis);
        value >= min && value <= max
    }

    /// Validates a coordinate against the domain of its axis
    pub fn check(&self, axis: Axis, value: f64) -> CodecResult<f64> {
        if self.contains(axis, value) {
            Ok(value)
        } else {
            Err(CodecError::OutOfRange { system: *self, axis, value })
        }
    }

    /// Quantization used by the integer codec
    pub fn quantization(&self) -> Quantization {
        match self {
            CoordinateSystem::Geographic => Quantization::FixedPoint {
                x_step: geo::LON_DECODE,
                y_step: geo::LAT_DECODE,
            },
            CoordinateSystem::Cartesian => Quantization::FloatingPoint {
                exponent_bits: cartesian::EXPONENT_BITS,
                significand_bits: cartesian::SIGNIFICAND_BITS,
            },
        }
    }

    /// Error the integer codec may introduce for a coordinate of this magnitude
    pub fn integer_error_bound(&self, value: f64) -> f64 {
        match self {
            CoordinateSystem::Geographic => bounds::ABSOLUTE_ERROR,
            CoordinateSystem::Cartesian => (value / bounds::RELATIVE_DIVISOR).abs(),
        }
    }

    /// Error the text codec may introduce, identical for every system
    pub fn text_error_bound(&self) -> f64 {
        bounds::ABSOLUTE_ERROR
    }

    /// Template used to format and parse the text form
    pub fn template(&self) -> &'static PointTemplate {
        &POINT_TEMPLATE
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoordinateSystem {
    type Err = CodecError;

    /// Parse a coordinate system name (e.g. "geo", "EPSG:4326", "cartesian")
    fn from_str(name: &str) -> CodecResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "geo" | "geographic" | "geo_point" | "wgs84" | "epsg:4326" => Ok(CoordinateSystem::Geographic),
            "cartesian" | "cartesian_point" | "xy" | "planar" => Ok(CoordinateSystem::Cartesian),
            _ => Err(CodecError::UnknownCoordinateSystem(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_domain() {
        let system = CoordinateSystem::Geographic;
        assert_eq!(system.domain(Axis::X), (-180.0, 180.0));
        assert_eq!(system.domain(Axis::Y), (-90.0, 90.0));
        assert!(system.contains(Axis::X, 180.0));
        assert!(!system.contains(Axis::X, 200.0));
        assert!(!system.contains(Axis::Y, -90.5));
        assert!(!system.contains(Axis::Y, f64::NAN));
    }

    #[test]
    fn test_cartesian_domain_is_all_finite_values() {
        let system = CoordinateSystem::Cartesian;
        assert!(system.contains(Axis::X, f64::MAX));
        assert!(system.contains(Axis::Y, f64::MIN));
        assert!(system.contains(Axis::Y, 1e-310));
        assert!(!system.contains(Axis::X, f64::INFINITY));
        assert!(!system.contains(Axis::X, f64::NEG_INFINITY));
        assert!(!system.contains(Axis::Y, f64::NAN));
    }

    #[test]
    fn test_error_bounds() {
        assert_eq!(CoordinateSystem::Geographic.integer_error_bound(1000.0), 1e-5);
        assert_eq!(CoordinateSystem::Cartesian.integer_error_bound(-2e5), 2.0);
        for system in CoordinateSystem::ALL {
            assert_eq!(system.text_error_bound(), 1e-5);
        }
    }

    #[test]
    fn test_quantization() {
        match CoordinateSystem::Geographic.quantization() {
            Quantization::FixedPoint { x_step, y_step } => {
                assert!(x_step < 1e-7);
                assert!(y_step < x_step);
            },
            other => panic!("unexpected quantization {:?}", other),
        }
        assert_eq!(
            CoordinateSystem::Cartesian.quantization(),
            Quantization::FloatingPoint { exponent_bits: 12, significand_bits: 19 }
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("geo".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Geographic);
        assert_eq!(" EPSG:4326 ".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Geographic);
        assert_eq!("Cartesian".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Cartesian);
        for system in CoordinateSystem::ALL {
            assert_eq!(system.name().parse::<CoordinateSystem>().unwrap(), system);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        match "mercator".parse::<CoordinateSystem>() {
            Err(CodecError::UnknownCoordinateSystem(name)) => assert_eq!(name, "mercator"),
            other => panic!("expected UnknownCoordinateSystem, got {:?}", other),
        }
    }
}
