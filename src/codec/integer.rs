//! Integer codec
//!
//! Packs both coordinates of a point into a single `i64`, one signed
//! 32-bit lane per axis, so the two axes decode independently.
//!
//! Geographic points use a fixed-point grid: latitude goes to the high
//! lane and longitude to the low lane, each floored onto a step of
//! 180/2^32 and 360/2^32 degrees. Cartesian points have no bounded domain,
//! so each axis is narrowed to a 32-bit float of its own: the sign, a 12-bit
//! exponent wide enough to give subnormals their own binades, and 19
//! significand bits rounded to nearest, stored as sortable bits. The error
//! then scales with the magnitude of the value, down to the smallest
//! subnormal. Here x goes to the high lane and y to the low lane.

use log::debug;

use crate::codec::constants::{cartesian, geo, lanes};
use crate::codec::errors::CodecResult;
use crate::coordinate::{Axis, CoordinateSystem, Point};

/// Packs a point into a single 64-bit integer
///
/// # Arguments
/// * `point` - The point to encode
/// * `system` - Coordinate system interpreting the point
///
/// # Returns
/// The packed value, or `OutOfRange` when a coordinate lies outside the
/// domain of the system (NaN and infinities are outside every domain)
pub fn pack(point: &Point, system: CoordinateSystem) -> CodecResult<i64> {
    let (x, y) = match (system.check(Axis::X, point.x()), system.check(Axis::Y, point.y())) {
        (Ok(x), Ok(y)) => (x, y),
        (Err(e), _) | (_, Err(e)) => {
            debug!("Rejecting {} point {}: {}", system, point, e);
            return Err(e);
        }
    };

    let encoded = match system {
        CoordinateSystem::Geographic => join_lanes(encode_latitude(y), encode_longitude(x)),
        CoordinateSystem::Cartesian => join_lanes(encode_sortable(x), encode_sortable(y)),
    };
    Ok(encoded)
}

/// Unpacks a 64-bit integer into a point
///
/// Every input decodes; no validation is applied to the bit pattern.
pub fn unpack(encoded: i64, system: CoordinateSystem) -> Point {
    let (high, low) = split_lanes(encoded);
    match system {
        CoordinateSystem::Geographic => Point::new(decode_longitude(low), decode_latitude(high)),
        CoordinateSystem::Cartesian => Point::new(decode_sortable(high), decode_sortable(low)),
    }
}

fn join_lanes(high: i32, low: i32) -> i64 {
    ((high as i64) << lanes::LANE_BITS) | (low as u32 as i64)
}

fn split_lanes(encoded: i64) -> (i32, i32) {
    let high = (encoded >> lanes::LANE_BITS) as i32;
    let low = (encoded as u64 & lanes::LOW_LANE_MASK) as u32 as i32;
    (high, low)
}

/// Quantizes a latitude in [-90, 90] onto the 32-bit grid
pub(crate) fn encode_latitude(latitude: f64) -> i32 {
    // `as` saturates, so 90 degrees lands on i32::MAX
    (latitude * geo::LAT_SCALE).floor() as i32
}

pub(crate) fn decode_latitude(encoded: i32) -> f64 {
    encoded as f64 * geo::LAT_DECODE
}

/// Quantizes a longitude in [-180, 180] onto the 32-bit grid
pub(crate) fn encode_longitude(longitude: f64) -> i32 {
    (longitude * geo::LON_SCALE).floor() as i32
}

pub(crate) fn decode_longitude(encoded: i32) -> f64 {
    encoded as f64 * geo::LON_DECODE
}

/// Narrows a finite double to a sortable 32-bit lane
pub(crate) fn encode_sortable(value: f64) -> i32 {
    let bits = value.to_bits();
    let sign = if bits & cartesian::SIGN_BIT != 0 { cartesian::LANE_SIGN_BIT } else { 0 };
    let magnitude = extend_exponent(bits & !cartesian::SIGN_BIT);

    // A carry out of the significand bumps the exponent, which is still the
    // correctly rounded value, unless it would pass f64::MAX
    let rounded = magnitude + cartesian::ROUNDING_BIAS;
    let magnitude = if rounded >= cartesian::OVERFLOW_BITS { magnitude } else { rounded };

    let lane = sign | (magnitude >> cartesian::DROPPED_BITS) as u32;
    sortable_bits(lane as i32)
}

pub(crate) fn decode_sortable(encoded: i32) -> f64 {
    let lane = sortable_bits(encoded) as u32;
    let magnitude = lane & !cartesian::LANE_SIGN_BIT;

    let value = if magnitude == 0 {
        0.0
    } else {
        let exponent = (magnitude >> cartesian::SIGNIFICAND_BITS) as i32;
        let significand = (magnitude & cartesian::SIGNIFICAND_MASK) | (1 << cartesian::SIGNIFICAND_BITS);
        scale_by_power_of_two(
            significand as f64,
            exponent - cartesian::EXPONENT_OFFSET - cartesian::SIGNIFICAND_BITS as i32,
        )
    };

    if lane & cartesian::LANE_SIGN_BIT != 0 { -value } else { value }
}

/// Rewrites the magnitude bits of a double as `exponent << 52 | fraction`
/// with an exponent where 1 is 2^-1074, normalizing subnormals so they keep
/// a full fraction. Zero stays zero.
fn extend_exponent(magnitude: u64) -> u64 {
    let exponent = magnitude >> cartesian::FRACTION_BITS;
    let fraction = magnitude & cartesian::FRACTION_MASK;

    if exponent != 0 {
        ((exponent + cartesian::NORMAL_EXPONENT_SHIFT) << cartesian::FRACTION_BITS) | fraction
    } else if fraction == 0 {
        0
    } else {
        // Subnormal: the leading one moves into the implicit bit
        let top = 63 - fraction.leading_zeros();
        let normalized = (fraction << (cartesian::FRACTION_BITS - top)) & cartesian::FRACTION_MASK;
        ((top as u64 + 1) << cartesian::FRACTION_BITS) | normalized
    }
}

/// Multiplies by 2^exponent, stepping so only the final product can round
fn scale_by_power_of_two(mut value: f64, mut exponent: i32) -> f64 {
    while exponent > 1000 {
        value *= power_of_two(1000);
        exponent -= 1000;
    }
    while exponent < -1000 {
        value *= power_of_two(-1000);
        exponent += 1000;
    }
    value * power_of_two(exponent)
}

/// Exact 2^exponent for exponents in the normal range [-1022, 1023]
fn power_of_two(exponent: i32) -> f64 {
    f64::from_bits(((exponent + 1023) as u64) << cartesian::FRACTION_BITS)
}

/// Flips the magnitude bits of negative values so that signed integer order
/// matches numeric order. Applying it twice gives back the input.
pub(crate) fn sortable_bits(bits: i32) -> i32 {
    bits ^ ((bits >> 31) & 0x7FFF_FFFF)
}
