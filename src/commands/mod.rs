//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod pack_command;
pub mod text_command;
pub mod wkb_command;

pub use command_traits::{Command, CommandFactory};
pub use pack_command::{PackCommand, UnpackCommand};
pub use text_command::{FormatCommand, ParseCommand};
pub use wkb_command::{FromWkbCommand, ToWkbCommand};

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::debug;

use crate::api::PointCodec;
use crate::codec::errors::{CodecError, CodecResult};
use crate::coordinate::{CoordinateSystem, Point};
use crate::utils::config::CliConfig;

/// Builds the command-line interface
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("pointkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pack points into 64-bit integers and convert them to and from text")
        .subcommand_required(true)
        .arg(
            Arg::new("system")
                .short('s')
                .long("system")
                .help("Coordinate system (geo, cartesian)")
                .value_name("NAME")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("pack")
                .about("Pack a point into a 64-bit integer")
                .arg(coordinate_arg("x", 1))
                .arg(coordinate_arg("y", 2)),
        )
        .subcommand(
            ClapCommand::new("unpack")
                .about("Unpack a 64-bit integer into a point")
                .arg(
                    Arg::new("value")
                        .help("Packed value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("format")
                .about("Format a point as POINT (<x> <y>)")
                .arg(coordinate_arg("x", 1))
                .arg(coordinate_arg("y", 2)),
        )
        .subcommand(
            ClapCommand::new("parse")
                .about("Parse a point from POINT (<x> <y>) text")
                .arg(
                    Arg::new("text")
                        .help("Point text, e.g. 'POINT (12.5 -3.25)'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("to-wkb")
                .about("Encode a point as hexadecimal well-known binary")
                .arg(coordinate_arg("x", 1))
                .arg(coordinate_arg("y", 2))
                .arg(
                    Arg::new("byte-order")
                        .long("byte-order")
                        .help("Byte order of the output (little, big)")
                        .value_name("ORDER")
                        .required(false),
                ),
        )
        .subcommand(
            ClapCommand::new("from-wkb")
                .about("Decode a point from hexadecimal well-known binary")
                .arg(
                    Arg::new("hex")
                        .help("Hexadecimal WKB")
                        .required(true)
                        .index(1),
                ),
        )
}

fn coordinate_arg(name: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help(if name == "x" { "X coordinate (longitude)" } else { "Y coordinate (latitude)" })
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
        .index(index)
}

/// Reads a required argument, reporting a missing one as malformed input
pub(crate) fn required_arg<'a, T>(args: &'a ArgMatches, name: &str) -> CodecResult<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(name)
        .ok_or_else(|| CodecError::MalformedInput(format!("Missing argument: {}", name)))
}

/// Reads the `<X> <Y>` arguments of a subcommand
pub(crate) fn point_arg(args: &ArgMatches) -> CodecResult<Point> {
    let x = *required_arg::<f64>(args, "x")?;
    let y = *required_arg::<f64>(args, "y")?;
    Ok(Point::new(x, y))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PointkitCommandFactory;

impl PointkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PointkitCommandFactory
    }

    /// Picks the coordinate system from `--system`, falling back to the config
    fn resolve_codec(args: &ArgMatches, sub_args: &ArgMatches, config: &CliConfig) -> CodecResult<PointCodec> {
        let name = sub_args.get_one::<String>("system").or_else(|| args.get_one::<String>("system"));
        let system = match name {
            Some(name) => name.parse::<CoordinateSystem>()?,
            None => config.system,
        };
        debug!("Using coordinate system: {}", system.description());
        Ok(PointCodec::new(system))
    }
}

impl Default for PointkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for PointkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &CliConfig) -> CodecResult<Box<dyn Command>> {
        let (name, sub_args) = args.subcommand()
            .ok_or_else(|| CodecError::MalformedInput("No command given".to_string()))?;
        let codec = Self::resolve_codec(args, sub_args, config)?;

        match name {
            "pack" => Ok(Box::new(PackCommand::new(sub_args, codec)?)),
            "unpack" => Ok(Box::new(UnpackCommand::new(sub_args, codec)?)),
            "format" => Ok(Box::new(FormatCommand::new(sub_args, codec)?)),
            "parse" => Ok(Box::new(ParseCommand::new(sub_args, codec)?)),
            "to-wkb" => Ok(Box::new(ToWkbCommand::new(sub_args, codec, config.wkb_byte_order)?)),
            "from-wkb" => Ok(Box::new(FromWkbCommand::new(sub_args, codec)?)),
            other => Err(CodecError::MalformedInput(format!("Unknown command: {}", other))),
        }
    }
}
