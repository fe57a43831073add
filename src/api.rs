use log::debug;

use crate::codec::{self, CodecResult};
use crate::coordinate::{CoordinateSystem, Point};
use crate::io::byte_order::ByteOrder;

/// Main interface to the pointkit library
///
/// Binds every codec to one coordinate system, so callers pick the system
/// once and then encode and decode without passing it around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointCodec {
    system: CoordinateSystem,
}

impl PointCodec {
    /// Create a codec for the given coordinate system
    pub fn new(system: CoordinateSystem) -> Self {
        PointCodec { system }
    }

    /// Create a codec from a coordinate system name
    ///
    /// # Arguments
    /// * `name` - A name such as "geo" or "cartesian"
    ///
    /// # Returns
    /// The codec, or `UnknownCoordinateSystem` for an unrecognized name
    pub fn from_name(name: &str) -> CodecResult<Self> {
        let system = name.parse::<CoordinateSystem>()?;
        debug!("Using coordinate system: {}", system.description());
        Ok(Self::new(system))
    }

    /// The coordinate system this codec is bound to
    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    /// Pack a point into a single 64-bit integer
    pub fn pack(&self, point: &Point) -> CodecResult<i64> {
        codec::pack(point, self.system)
    }

    /// Unpack a 64-bit integer into a point
    pub fn unpack(&self, encoded: i64) -> Point {
        codec::unpack(encoded, self.system)
    }

    /// Format a point as `POINT (<x> <y>)`
    pub fn format(&self, point: &Point) -> String {
        codec::format(point, self.system)
    }

    /// Parse a point from its text form
    pub fn parse(&self, text: &str) -> CodecResult<Point> {
        codec::parse(text, self.system)
    }

    /// Encode a point as well-known binary
    pub fn to_wkb(&self, point: &Point, byte_order: ByteOrder) -> CodecResult<Vec<u8>> {
        codec::to_wkb(point, byte_order)
    }

    /// Decode a point from well-known binary
    pub fn from_wkb(&self, bytes: &[u8]) -> CodecResult<Point> {
        codec::from_wkb(bytes)
    }
}

impl Default for PointCodec {
    fn default() -> Self {
        Self::new(CoordinateSystem::Geographic)
    }
}

impl From<CoordinateSystem> for PointCodec {
    fn from(system: CoordinateSystem) -> Self {
        Self::new(system)
    }
}
