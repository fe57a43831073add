//! Configuration file handling
//!
//! The command-line front end reads its defaults from an optional TOML
//! file:
//!
//! ```toml
//! [codec]
//! system = "geo"
//! wkb_byte_order = "little"
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::str::FromStr;

use log::{debug, LevelFilter};

use crate::codec::errors::{CodecError, CodecResult};
use crate::coordinate::CoordinateSystem;
use crate::io::byte_order::ByteOrder;

/// Defaults for the command-line front end
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Coordinate system used when `--system` is not given
    pub system: CoordinateSystem,
    /// Byte order used by `to-wkb` when `--byte-order` is not given
    pub wkb_byte_order: ByteOrder,
    /// Log level used when `--verbose` is not given
    pub log_level: LevelFilter,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            system: CoordinateSystem::Geographic,
            wkb_byte_order: ByteOrder::LittleEndian,
            log_level: LevelFilter::Warn,
        }
    }
}

impl FromStr for CliConfig {
    type Err = CodecError;

    /// Parse configuration from a TOML string
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    fn from_str(content: &str) -> CodecResult<Self> {
        let toml_table: toml::Table = content.parse()?;
        let mut config = CliConfig::default();

        if let Some(system) = Self::get_str(&toml_table, "codec", "system")? {
            config.system = system.parse()?;
        }
        if let Some(byte_order) = Self::get_str(&toml_table, "codec", "wkb_byte_order")? {
            config.wkb_byte_order = byte_order.parse()?;
        }
        if let Some(level) = Self::get_str(&toml_table, "logging", "level")? {
            config.log_level = level.parse::<LevelFilter>()
                .map_err(|_| CodecError::Config(format!("Invalid log level: {}", level)))?;
        }

        Ok(config)
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> CodecResult<Self> {
        debug!("Loading configuration from {}", path);
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Helper to read an optional string from a table
    fn get_str<'a>(toml_table: &'a toml::Table, table: &str, key: &str) -> CodecResult<Option<&'a str>> {
        match toml_table.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(value) => value.as_str()
                .map(Some)
                .ok_or_else(|| CodecError::Config(format!("{}.{} must be a string", table, key))),
        }
    }
}
