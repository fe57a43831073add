//! Byte order handling for well-known binary
//!
//! This module implements the Strategy pattern for reading and writing
//! the words of a WKB geometry in either byte order.

use std::fmt;
use std::io::{Read, Result, Write};
use std::str::FromStr;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::codec::constants::wkb;
use crate::codec::errors::{CodecError, CodecResult};

/// Byte order of a WKB geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (NDR)
    #[default]
    LittleEndian,
    /// Big-endian byte order (XDR)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the leading marker byte of a geometry
    pub fn detect(reader: &mut dyn Read) -> CodecResult<Self> {
        let marker = reader.read_u8()
            .map_err(|_| CodecError::MalformedInput("Missing WKB byte order marker".to_string()))?;
        Self::from_marker(marker)
    }

    /// Maps a marker byte to its byte order
    pub fn from_marker(marker: u8) -> CodecResult<Self> {
        match marker {
            wkb::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            wkb::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(CodecError::MalformedInput(format!("Invalid WKB byte order marker: {:#04x}", marker))),
        }
    }

    /// Marker byte written in front of a geometry
    pub fn marker(&self) -> u8 {
        match self {
            ByteOrder::LittleEndian => wkb::LITTLE_ENDIAN_MARKER,
            ByteOrder::BigEndian => wkb::BIG_ENDIAN_MARKER,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (NDR)",
            ByteOrder::BigEndian => "Big Endian (XDR)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = CodecError;

    fn from_str(name: &str) -> CodecResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "little" | "little-endian" | "le" | "ndr" => Ok(ByteOrder::LittleEndian),
            "big" | "big-endian" | "be" | "xdr" => Ok(ByteOrder::BigEndian),
            _ => Err(CodecError::Config(format!("Unknown byte order: {}", name))),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;

    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64>;

    /// Write a u32 value
    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()>;

    /// Write an f64 value
    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<LittleEndian>(value)
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<LittleEndian>(value)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<BigEndian>(value)
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<BigEndian>(value)
    }
}
