//! Text codec
//!
//! Formats points as well-known text (`POINT (<x> <y>)`) and parses them
//! back. Numbers are written with the shortest decimal representation that
//! reads back to the same `f64`, so a format/parse cycle is exact.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::codec::constants::wkt;
use crate::codec::errors::{CodecError, CodecResult};
use crate::coordinate::{Axis, CoordinateSystem, Point};

lazy_static! {
    // Leading word and whatever follows it, e.g. "POINT" and "(1 2)"
    static ref GEOMETRY_PATTERN: Regex =
        Regex::new(r"(?s)^\s*(?P<keyword>[A-Za-z]+)\s*(?P<body>.*?)\s*$")
            .expect("geometry pattern is valid");
    // Decimal number with optional sign, fraction and exponent
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?$")
            .expect("number pattern is valid");
}

/// Text layout shared by the coordinate systems
#[derive(Debug)]
pub struct PointTemplate {
    keyword: &'static str,
}

/// The `POINT (<x> <y>)` template
pub static POINT_TEMPLATE: PointTemplate = PointTemplate {
    keyword: wkt::POINT_KEYWORD,
};

impl PointTemplate {
    /// Geometry keyword that opens the text form
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Renders a coordinate pair
    pub fn render(&self, x: f64, y: f64) -> String {
        format!("{} ({} {})", self.keyword, x, y)
    }

    /// Reads a coordinate pair back from text produced by `render`
    pub fn read(&self, text: &str) -> CodecResult<(f64, f64)> {
        let captures = GEOMETRY_PATTERN.captures(text)
            .ok_or_else(|| malformed(format!("Expected '{} (<x> <y>)', got '{}'", self.keyword, text)))?;

        let keyword = &captures["keyword"];
        let body = &captures["body"];

        if !keyword.eq_ignore_ascii_case(self.keyword) {
            return Err(malformed(format!("Unsupported geometry type: {}", keyword)));
        }
        if body.eq_ignore_ascii_case(wkt::EMPTY_KEYWORD) {
            return Err(malformed(format!("{} EMPTY has no coordinates", self.keyword)));
        }

        let inner = body.strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| malformed(format!("Mismatched parentheses in '{}'", text)))?;

        let tokens: Vec<&str> = inner.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(malformed(format!(
                "Expected 2 coordinates, found {} in '{}'",
                tokens.len(), text
            )));
        }

        let x = parse_coordinate(tokens[0], Axis::X)?;
        let y = parse_coordinate(tokens[1], Axis::Y)?;
        Ok((x, y))
    }
}

/// Formats a point as text
///
/// Non-finite coordinates are written as-is and will not parse back.
pub fn format(point: &Point, system: CoordinateSystem) -> String {
    system.template().render(point.x(), point.y())
}

/// Parses a point from text
///
/// No domain validation is applied, so a geographic point may come back
/// with coordinates that `pack` would reject.
pub fn parse(text: &str, system: CoordinateSystem) -> CodecResult<Point> {
    let (x, y) = system.template().read(text).map_err(|e| {
        debug!("Failed to parse {} point: {}", system, e);
        e
    })?;
    Ok(Point::new(x, y))
}

fn parse_coordinate(token: &str, axis: Axis) -> CodecResult<f64> {
    if !NUMBER_PATTERN.is_match(token) {
        return Err(malformed(format!("Invalid {} coordinate: '{}'", axis, token)));
    }

    let value = token.parse::<f64>()
        .map_err(|e| malformed(format!("Invalid {} coordinate '{}': {}", axis, token, e)))?;

    if !value.is_finite() {
        return Err(malformed(format!("{} coordinate '{}' overflows", axis, token)));
    }
    Ok(value)
}

fn malformed(msg: String) -> CodecError {
    CodecError::MalformedInput(msg)
}
