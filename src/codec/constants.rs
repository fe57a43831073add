//! Encoding constants
//!
//! Lane layouts, quantization steps and well-known binary markers used by
//! the codecs, kept here so the encoders read without magic numbers.

/// Geographic domain and fixed-point quantization
pub mod geo {
    pub const MIN_LON_INCL: f64 = -180.0;
    pub const MAX_LON_INCL: f64 = 180.0;
    pub const MIN_LAT_INCL: f64 = -90.0;
    pub const MAX_LAT_INCL: f64 = 90.0;

    /// Encoded longitude units per degree (2^32 / 360)
    pub const LON_SCALE: f64 = (1u64 << 32) as f64 / 360.0;
    /// Encoded latitude units per degree (2^32 / 180)
    pub const LAT_SCALE: f64 = (1u64 << 32) as f64 / 180.0;
    /// Degrees per encoded longitude unit
    pub const LON_DECODE: f64 = 1.0 / LON_SCALE;
    /// Degrees per encoded latitude unit
    pub const LAT_DECODE: f64 = 1.0 / LAT_SCALE;
}

/// Cartesian floating-point quantization
///
/// A lane holds the sign, a 12-bit exponent that counts subnormal binades
/// as well as normal ones, and 19 significand bits.
pub mod cartesian {
    /// Exponent bits per lane, enough for all 2098 binades of a finite double
    pub const EXPONENT_BITS: u32 = 12;
    /// Significand bits kept per lane after the sign and exponent
    pub const SIGNIFICAND_BITS: u32 = 19;
    pub const SIGNIFICAND_MASK: u32 = (1 << SIGNIFICAND_BITS) - 1;
    /// Fraction bits of an IEEE 754 double
    pub const FRACTION_BITS: u32 = 52;
    pub const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
    /// Fraction bits dropped when narrowing to a lane
    pub const DROPPED_BITS: u32 = FRACTION_BITS - SIGNIFICAND_BITS;
    /// Half of the dropped range, added before truncation to round to nearest
    pub const ROUNDING_BIAS: u64 = 1 << (DROPPED_BITS - 1);
    /// Added to a biased IEEE exponent so that subnormals fit below it
    pub const NORMAL_EXPONENT_SHIFT: u64 = 52;
    /// Extended exponent of 2^0; extended exponent 1 is 2^-1074
    pub const EXPONENT_OFFSET: i32 = 1075;
    /// Extended exponent of f64::MAX
    pub const MAX_EXPONENT: u64 = 2046 + NORMAL_EXPONENT_SHIFT;
    /// First extended pattern past f64::MAX, which no lane may round up to
    pub const OVERFLOW_BITS: u64 = (MAX_EXPONENT + 1) << FRACTION_BITS;
    pub const SIGN_BIT: u64 = 1 << 63;
    pub const LANE_SIGN_BIT: u32 = 1 << 31;
}

/// Layout of the packed 64-bit value
pub mod lanes {
    pub const LANE_BITS: u32 = 32;
    pub const LOW_LANE_MASK: u64 = 0xFFFF_FFFF;
}

/// Round-trip bounds promised by the codecs
pub mod bounds {
    /// Absolute error allowed after a text round trip, and after an integer
    /// round trip of a geographic point
    pub const ABSOLUTE_ERROR: f64 = 1e-5;
    /// Divisor of the coordinate magnitude giving the cartesian integer bound
    pub const RELATIVE_DIVISOR: f64 = 1e5;
}

/// Well-known text tokens
pub mod wkt {
    pub const POINT_KEYWORD: &str = "POINT";
    pub const EMPTY_KEYWORD: &str = "EMPTY";
}

/// Well-known binary layout
pub mod wkb {
    /// Byte order marker for big-endian (XDR)
    pub const BIG_ENDIAN_MARKER: u8 = 0x00;
    /// Byte order marker for little-endian (NDR)
    pub const LITTLE_ENDIAN_MARKER: u8 = 0x01;
    /// Geometry type code of a two-dimensional point
    pub const POINT_TYPE: u32 = 1;
    /// Marker byte, type word and two doubles
    pub const POINT_LENGTH: usize = 1 + 4 + 8 + 8;
}
