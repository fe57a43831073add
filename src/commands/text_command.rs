//! Text codec commands

use clap::ArgMatches;
use log::info;

use crate::api::PointCodec;
use crate::commands::command_traits::Command;
use crate::commands::{point_arg, required_arg};
use crate::codec::errors::CodecResult;
use crate::coordinate::Point;

/// Command formatting a point as text
pub struct FormatCommand {
    codec: PointCodec,
    point: Point,
}

impl FormatCommand {
    /// Create a new format command from `<X> <Y>` arguments
    pub fn new(args: &ArgMatches, codec: PointCodec) -> CodecResult<Self> {
        Ok(FormatCommand {
            codec,
            point: point_arg(args)?,
        })
    }
}

impl Command for FormatCommand {
    fn execute(&self) -> CodecResult<String> {
        Ok(self.codec.format(&self.point))
    }
}

/// Command parsing a point from text
pub struct ParseCommand {
    codec: PointCodec,
    text: String,
}

impl ParseCommand {
    /// Create a new parse command from a `<TEXT>` argument
    pub fn new(args: &ArgMatches, codec: PointCodec) -> CodecResult<Self> {
        Ok(ParseCommand {
            codec,
            text: required_arg::<String>(args, "text")?.clone(),
        })
    }
}

impl Command for ParseCommand {
    fn execute(&self) -> CodecResult<String> {
        let point = self.codec.parse(&self.text)?;
        info!("Parsed {} point {}", self.codec.system(), point);
        Ok(format!("{} {}", point.x(), point.y()))
    }
}
