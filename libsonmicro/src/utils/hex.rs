//! Hexadecimal helpers for UIDs, block dumps and trace logging.

use std::fmt::Write;

/// Lowercase hex without separators.
///
/// Example: `&[0x04, 0xa1]` -> `"04a1"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! never fails writing to a String
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with a single space between bytes, as used in frame traces.
///
/// Example: `&[0xff, 0x00, 0x01]` -> `"ff 00 01"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Parse a hex string, ignoring ASCII whitespace and `:` separators.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}

/// Parse a six-byte MIFARE key such as `"FF FF FF FF FF FF"`.
pub fn parse_key(s: &str) -> Result<[u8; 6], String> {
    let bytes = parse_hex(s)?;
    <[u8; 6]>::try_from(bytes.as_slice())
        .map_err(|_| format!("key must be 6 bytes, got {}", bytes.len()))
}
