//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::codec::encode_value;
use crate::reader::Reader;
use crate::transport::MockTransport;
use crate::Result;

/// Sample UID as sent on the wire (least significant byte first).
#[doc(hidden)]
pub const SAMPLE_UID_WIRE: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

/// Select-tag response payload for a card of `type_byte` with the sample UID.
#[doc(hidden)]
pub fn select_payload(type_byte: u8) -> Vec<u8> {
    let mut payload = vec![crate::constants::CMD_SELECT_TAG, type_byte];
    payload.extend_from_slice(&SAMPLE_UID_WIRE);
    payload
}

/// Successful value-sized response payload: `[opcode, block, value(4)]`.
#[doc(hidden)]
pub fn value_payload(opcode: u8, block: u8, value: i32) -> Vec<u8> {
    let mut payload = vec![opcode, block];
    payload.extend_from_slice(&encode_value(value));
    payload
}

/// Build a MockTransport pre-seeded with response frames around the given
/// payloads.
#[doc(hidden)]
pub fn mock_with_frames(payloads: &[&[u8]]) -> MockTransport {
    let mut mock = MockTransport::new();
    for p in payloads {
        mock.push_frame(p);
    }
    mock
}

/// Convenience: a Reader whose mock transport answers a select-tag with
/// `type_byte`, then the given payloads. The selection is performed and
/// `block` is set before returning.
#[doc(hidden)]
pub fn selected_mock_reader(
    type_byte: u8,
    block: u8,
    payloads: &[&[u8]],
) -> Result<Reader<MockTransport>> {
    let select = select_payload(type_byte);
    let mut frames: Vec<&[u8]> = vec![select.as_slice()];
    frames.extend_from_slice(payloads);
    let mut reader = Reader::new(mock_with_frames(&frames));
    reader.set_block(block);
    reader.select_tag()?;
    Ok(reader)
}
