//! Error types for point encoding and decoding

use std::fmt;
use std::io;

use crate::coordinate::{Axis, CoordinateSystem};

/// Errors raised by the point codecs and their configuration
#[derive(Debug)]
pub enum CodecError {
    /// A coordinate lies outside the domain of the coordinate system
    OutOfRange {
        system: CoordinateSystem,
        axis: Axis,
        value: f64,
    },
    /// Input text or bytes do not describe a point
    MalformedInput(String),
    /// No coordinate system is registered under this name
    UnknownCoordinateSystem(String),
    /// Invalid configuration value
    Config(String),
    /// I/O error
    Io(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::OutOfRange { system, axis, value } => {
                let (min, max) = system.domain(*axis);
                write!(f, "{} {} value {} is out of range [{}, {}]",
                       system, axis, value, min, max)
            },
            CodecError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            CodecError::UnknownCoordinateSystem(name) => write!(f, "Unknown coordinate system: {}", name),
            CodecError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CodecError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(error: io::Error) -> Self {
        CodecError::Io(error)
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(error: toml::de::Error) -> Self {
        CodecError::Config(format!("Failed to parse TOML: {}", error))
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
