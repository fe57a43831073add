//! String utility functions
//!
//! Utilities for moving binary encodings through text, as the
//! command-line front end prints and reads WKB as hexadecimal.

use crate::codec::errors::{CodecError, CodecResult};

/// Encodes bytes as lowercase hexadecimal
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes hexadecimal text, ignoring an optional `0x` prefix and whitespace
pub fn from_hex(text: &str) -> CodecResult<Vec<u8>> {
    let trimmed = text.trim();
    let digits: Vec<u8> = trimmed.strip_prefix("0x")
        .unwrap_or(trimmed)
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if let Some(bad) = digits.iter().find(|b| !b.is_ascii_hexdigit()) {
        return Err(CodecError::MalformedInput(
            format!("Invalid hex digit '{}' in '{}'", *bad as char, text),
        ));
    }
    if digits.len() % 2 != 0 {
        return Err(CodecError::MalformedInput(format!("Odd number of hex digits in '{}'", text)));
    }

    Ok(digits.chunks(2).map(|pair| (hex_value(pair[0]) << 4) | hex_value(pair[1])).collect())
}

/// Value of a single ASCII hex digit, already checked by the caller
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
