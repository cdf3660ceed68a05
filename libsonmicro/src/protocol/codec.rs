// libsonmicro/src/protocol/codec.rs

//! Value and command codecs.
//!
//! Value blocks carry a signed 32-bit integer in four bytes with the least
//! significant byte first (`bytes[3]` is the most significant byte). Data
//! written by older firmware used the mirrored order; `decode_legacy_value`
//! reads that layout.

use crate::Result;
use crate::constants::LEGACY_VALUE_BOUND;

use super::Frame;
use super::commands::Command;

/// Decode a value in the module's order (`bytes[3]` most significant).
pub fn decode_value(bytes: [u8; 4]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Decode a value in the legacy order (`bytes[0]` most significant).
pub fn decode_legacy_value(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

/// Encode a value in the module's order; inverse of `decode_value`.
pub fn encode_value(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Heuristic: whether a value decoded in the module's order looks like a
/// genuine counter rather than legacy-ordered bytes.
pub fn is_plausible_value(value: i32) -> bool {
    (-LEGACY_VALUE_BOUND..=LEGACY_VALUE_BOUND).contains(&value)
}

/// Decode stored value bytes, falling back to the legacy order when the
/// module-order reading fails the plausibility check.
///
/// Returns the value, the bytes re-encoded in the module's order, and
/// whether the legacy order was used.
pub fn normalize_value(bytes: [u8; 4]) -> (i32, [u8; 4], bool) {
    let value = decode_value(bytes);
    if is_plausible_value(value) {
        return (value, bytes, false);
    }
    let legacy = decode_legacy_value(bytes);
    (legacy, encode_value(legacy), true)
}

/// Encode a Command into a full wire frame (header/length/checksum).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}
