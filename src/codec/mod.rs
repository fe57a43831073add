//! Point codecs
//!
//! This module implements the integer, text and well-known binary
//! encodings of a point.

pub mod constants;
pub mod errors;
pub mod integer;
pub mod text;
pub mod wkb;
#[cfg(test)]
mod tests;

pub use errors::{CodecError, CodecResult};
pub use integer::{pack, unpack};
pub use text::{format, parse, PointTemplate};
pub use wkb::{from_wkb, read_wkb, to_wkb, write_wkb};
