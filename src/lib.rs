pub mod io;
pub mod codec;
pub mod coordinate;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PointCodec;

pub use codec::{format, from_wkb, pack, parse, to_wkb, unpack, CodecError, CodecResult};
pub use coordinate::{Axis, CoordinateSystem, Point, Quantization};
pub use io::byte_order::ByteOrder;
