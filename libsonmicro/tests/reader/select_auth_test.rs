#[path = "../common/mod.rs"]
mod common;

use libsonmicro::prelude::*;
use libsonmicro::transport::MockTransport;

#[test]
fn select_1k_reverses_uid() {
    let reader = common::selected_reader(common::fixtures::select_1k_frame(), vec![]).unwrap();
    assert_eq!(reader.card_type(), CardType::Standard1K);
    assert_eq!(reader.uid().len(), 6);
    assert_eq!(reader.uid().as_bytes(), &[0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(reader.uid().to_hex(), "665544332211");
}

#[test]
fn select_then_authenticate_then_read() {
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![
            common::fixtures::auth_ok_frame(),
            common::fixtures::value_frame(0x87, 5, [0x2C, 0x01, 0x00, 0x00]),
        ],
    )
    .unwrap();
    reader.set_block(5);
    reader.set_auth(KeyType::KEY_A, [0xFF; 6]);

    reader.authenticate().unwrap();
    assert_eq!(reader.auth_response(), AuthResponse::Success);

    let reading = reader.read_value().unwrap();
    assert_eq!(reading.value, 300);
    assert_eq!(reading.source, ValueSource::ValueBlock);
    assert_eq!(reader.transport().sent_opcodes(), vec![0x83, 0x85, 0x87]);
}

#[test]
fn authenticate_ultralight_sends_nothing() {
    let mut reader =
        common::selected_reader(common::fixtures::select_ultralight_frame(), vec![]).unwrap();
    let written = reader.transport().sent.len();
    reader.authenticate().unwrap();
    assert_eq!(reader.transport().sent.len(), written);
    assert_eq!(reader.uid().len(), 7);
}

#[test]
fn no_tag_in_field() {
    let mut mock = MockTransport::new();
    mock.push_response(common::fixtures::select_no_tag_frame());
    let mut reader = ReaderBuilder::new().with_transport(mock).build().unwrap();
    assert!(matches!(reader.select_tag(), Err(Error::NoTag { status: 0x4E })));
    assert_eq!(reader.card_type(), CardType::Undefined);
    assert!(matches!(reader.authenticate(), Err(Error::NoCardSelected)));
}
