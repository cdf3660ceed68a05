// fixtures.rs: commonly used response frames, written out as the bytes a
// module puts on the wire

use libsonmicro::protocol::Frame;

fn frame(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).unwrap()
}

/// Select response: Standard 1K, UID (wire order) 11 22 33 44 55 66.
pub fn select_1k_frame() -> Vec<u8> {
    frame("ff 00 08 83 02 11 22 33 44 55 66 f2")
}

/// Select response: Ultralight with a 7-byte UID.
pub fn select_ultralight_frame() -> Vec<u8> {
    Frame::encode(&[0x83, 0x01, 0x04, 0x80, 0x9a, 0x12, 0x34, 0x56, 0x78]).unwrap()
}

/// Select response with no tag in the field.
pub fn select_no_tag_frame() -> Vec<u8> {
    frame("ff 00 02 83 4e d3")
}

/// Auth response: login successful.
pub fn auth_ok_frame() -> Vec<u8> {
    frame("ff 00 02 85 4c d3")
}

/// Value-sized response frame for `opcode` on `block` carrying `bytes`.
pub fn value_frame(opcode: u8, block: u8, bytes: [u8; 4]) -> Vec<u8> {
    let mut payload = vec![opcode, block];
    payload.extend_from_slice(&bytes);
    Frame::encode(&payload).unwrap()
}

/// Raw block read response whose first four data bytes are `bytes`.
pub fn raw_block_frame(block: u8, bytes: [u8; 4]) -> Vec<u8> {
    let mut payload = vec![0x86, block];
    payload.extend_from_slice(&bytes);
    payload.extend_from_slice(&[0u8; 12]);
    Frame::encode(&payload).unwrap()
}

/// Failure response for `opcode` carrying `status`.
pub fn status_frame(opcode: u8, status: u8) -> Vec<u8> {
    Frame::encode(&[opcode, status]).unwrap()
}
