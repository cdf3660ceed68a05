use libsonmicro::protocol::Command;
use libsonmicro::protocol::codec::encode_command_frame;
use libsonmicro::types::{AuthKey, KeyType};

#[test]
fn select_tag_frame() {
    let frame = encode_command_frame(&Command::SelectTag).unwrap();
    assert_eq!(frame, hex::decode("ff00018384").unwrap());
}

#[test]
fn authenticate_frames() {
    let stored = Command::Authenticate {
        block: 1,
        key: AuthKey::new(KeyType::stored_b(1).unwrap(), [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]),
    };
    let frame = encode_command_frame(&stored).unwrap();
    assert_eq!(frame.len(), 2 + 1 + 9 + 1);
    assert_eq!(frame[2], 9);

    let default_key = Command::Authenticate {
        block: 1,
        key: AuthKey::default(),
    };
    let frame = encode_command_frame(&default_key).unwrap();
    assert_eq!(frame, vec![0xFF, 0x00, 0x03, 0x85, 0x01, 0xFF, 0x88]);
}

#[test]
fn response_capacities() {
    assert_eq!(Command::SelectTag.response_capacity(), 10);
    assert_eq!(Command::ReadBlock { block: 1 }.response_capacity(), 20);
    assert_eq!(Command::ReadValue { block: 1 }.response_capacity(), 8);
    assert_eq!(
        Command::Decrement { block: 1, delta: 1 }.response_capacity(),
        10
    );
}
