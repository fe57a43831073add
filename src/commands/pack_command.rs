//! Integer codec commands

use clap::ArgMatches;
use log::info;

use crate::api::PointCodec;
use crate::commands::command_traits::Command;
use crate::commands::{point_arg, required_arg};
use crate::codec::errors::CodecResult;
use crate::coordinate::Point;

/// Command packing a point into a 64-bit integer
pub struct PackCommand {
    codec: PointCodec,
    point: Point,
}

impl PackCommand {
    /// Create a new pack command from `<X> <Y>` arguments
    pub fn new(args: &ArgMatches, codec: PointCodec) -> CodecResult<Self> {
        Ok(PackCommand {
            codec,
            point: point_arg(args)?,
        })
    }
}

impl Command for PackCommand {
    fn execute(&self) -> CodecResult<String> {
        let packed = self.codec.pack(&self.point)?;
        info!("Packed {} point {} into {:#018x}", self.codec.system(), self.point, packed);
        Ok(packed.to_string())
    }
}

/// Command unpacking a 64-bit integer into a point
pub struct UnpackCommand {
    codec: PointCodec,
    value: i64,
}

impl UnpackCommand {
    /// Create a new unpack command from a `<VALUE>` argument
    pub fn new(args: &ArgMatches, codec: PointCodec) -> CodecResult<Self> {
        Ok(UnpackCommand {
            codec,
            value: *required_arg::<i64>(args, "value")?,
        })
    }
}

impl Command for UnpackCommand {
    fn execute(&self) -> CodecResult<String> {
        let point = self.codec.unpack(self.value);
        info!("Unpacked {} into {} point {}", self.value, self.codec.system(), point);
        Ok(self.codec.format(&point))
    }
}
