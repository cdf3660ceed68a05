#[path = "../common/mod.rs"]
mod common;

use libsonmicro::protocol::{Frame, checksum};

#[test]
fn fixture_frames_decode() {
    let resp = Frame::decode(&common::fixtures::select_1k_frame()).expect("frame decode");
    assert_eq!(resp.length(), 8);
    assert_eq!(resp.command(), 0x83);
    assert_eq!(resp.data(), &[0x02, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);

    let resp = Frame::decode(&common::fixtures::auth_ok_frame()).expect("frame decode");
    assert_eq!(resp.status(), 0x4C);
}

#[test]
fn checksum_covers_length_and_payload() {
    let payload = [0x8A, 0x05, 0x10, 0x00, 0x00, 0x00];
    let frame = Frame::encode(&payload).unwrap();
    assert_eq!(*frame.last().unwrap(), checksum(&payload));
    assert_eq!(checksum(&payload), (6u32 + 0x8A + 0x05 + 0x10) as u8);
}
