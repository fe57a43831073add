//! Well-known binary commands
//!
//! WKB is read and written as hexadecimal text.

use clap::ArgMatches;
use log::info;

use crate::api::PointCodec;
use crate::commands::command_traits::Command;
use crate::commands::{point_arg, required_arg};
use crate::codec::errors::CodecResult;
use crate::coordinate::Point;
use crate::io::byte_order::ByteOrder;
use crate::utils::string_utils::{from_hex, to_hex};

/// Command encoding a point as hex WKB
pub struct ToWkbCommand {
    codec: PointCodec,
    point: Point,
    byte_order: ByteOrder,
}

impl ToWkbCommand {
    /// Create a new to-wkb command
    ///
    /// # Arguments
    /// * `args` - Subcommand matches holding `<X> <Y>` and `--byte-order`
    /// * `codec` - Codec for the selected coordinate system
    /// * `default_order` - Byte order used when `--byte-order` is absent
    pub fn new(args: &ArgMatches, codec: PointCodec, default_order: ByteOrder) -> CodecResult<Self> {
        let byte_order = match args.get_one::<String>("byte-order") {
            Some(name) => name.parse::<ByteOrder>()?,
            None => default_order,
        };

        Ok(ToWkbCommand {
            codec,
            point: point_arg(args)?,
            byte_order,
        })
    }
}

impl Command for ToWkbCommand {
    fn execute(&self) -> CodecResult<String> {
        let bytes = self.codec.to_wkb(&self.point, self.byte_order)?;
        info!("Encoded point {} as {} bytes of WKB ({})", self.point, bytes.len(), self.byte_order);
        Ok(to_hex(&bytes))
    }
}

/// Command decoding a point from hex WKB
pub struct FromWkbCommand {
    codec: PointCodec,
    bytes: Vec<u8>,
}

impl FromWkbCommand {
    /// Create a new from-wkb command from a `<HEX>` argument
    pub fn new(args: &ArgMatches, codec: PointCodec) -> CodecResult<Self> {
        let hex = required_arg::<String>(args, "hex")?;
        Ok(FromWkbCommand {
            codec,
            bytes: from_hex(hex)?,
        })
    }
}

impl Command for FromWkbCommand {
    fn execute(&self) -> CodecResult<String> {
        let point = self.codec.from_wkb(&self.bytes)?;
        Ok(self.codec.format(&point))
    }
}
