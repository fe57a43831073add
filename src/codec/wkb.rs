//! Well-known binary codec
//!
//! A WKB point is a byte order marker, the geometry type word and the two
//! coordinates as IEEE 754 doubles. The round trip is exact.

use std::io::{Cursor, Read, Write};

use log::debug;

use crate::codec::constants::wkb;
use crate::codec::errors::{CodecError, CodecResult};
use crate::coordinate::Point;
use crate::io::byte_order::ByteOrder;

/// Encodes a point as WKB
pub fn to_wkb(point: &Point, byte_order: ByteOrder) -> CodecResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(wkb::POINT_LENGTH);
    write_wkb(&mut buffer, point, byte_order)?;
    Ok(buffer)
}

/// Writes the WKB form of a point to any writer
pub fn write_wkb(writer: &mut dyn Write, point: &Point, byte_order: ByteOrder) -> CodecResult<()> {
    let handler = byte_order.create_handler();
    writer.write_all(&[byte_order.marker()])?;
    handler.write_u32(writer, wkb::POINT_TYPE)?;
    handler.write_f64(writer, point.x())?;
    handler.write_f64(writer, point.y())?;
    Ok(())
}

/// Decodes a WKB point
///
/// The input must hold exactly one point, in either byte order.
pub fn from_wkb(bytes: &[u8]) -> CodecResult<Point> {
    let mut cursor = Cursor::new(bytes);
    let point = read_wkb(&mut cursor)?;

    if (cursor.position() as usize) < bytes.len() {
        return Err(CodecError::MalformedInput(format!(
            "Unexpected {} trailing bytes after WKB point",
            bytes.len() - cursor.position() as usize
        )));
    }
    Ok(point)
}

/// Reads one WKB point from a reader
pub fn read_wkb(reader: &mut dyn Read) -> CodecResult<Point> {
    let byte_order = ByteOrder::detect(reader)?;
    debug!("Detected WKB byte order: {}", byte_order.name());
    let handler = byte_order.create_handler();

    let geometry_type = handler.read_u32(reader).map_err(truncated)?;
    if geometry_type != wkb::POINT_TYPE {
        return Err(CodecError::MalformedInput(format!(
            "Unsupported WKB geometry type: {}",
            geometry_type
        )));
    }

    let x = handler.read_f64(reader).map_err(truncated)?;
    let y = handler.read_f64(reader).map_err(truncated)?;
    Ok(Point::new(x, y))
}

fn truncated(error: std::io::Error) -> CodecError {
    CodecError::MalformedInput(format!("Truncated WKB point: {}", error))
}
