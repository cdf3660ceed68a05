#[path = "../common/mod.rs"]
mod common;

use libsonmicro::prelude::*;
use libsonmicro::protocol::codec::{decode_value, encode_value};

#[test]
fn out_of_range_value_is_renormalised() {
    // Decodes to 0x00F00001 in the module's order: outside the plausible range.
    let stored = encode_value(0x00F0_0001);
    assert_eq!(stored, [0x01, 0x00, 0xF0, 0x00]);

    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![common::fixtures::value_frame(0x87, 4, stored)],
    )
    .unwrap();
    reader.set_block(4);

    let reading = reader.read_value().unwrap();
    assert!(reading.legacy_order);
    assert_eq!(reading.value, 0x0100_F000);
    assert_eq!(reader.value(), 0x0100_F000);
    // block data now holds the value in the module's order
    assert_eq!(reader.block_data().value_bytes(), encode_value(0x0100_F000));
    assert_eq!(decode_value(reader.block_data().value_bytes()), reading.value);
}

#[test]
fn in_range_value_is_kept() {
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![common::fixtures::value_frame(0x87, 4, encode_value(-0xF0000))],
    )
    .unwrap();
    reader.set_block(4);
    let reading = reader.read_value().unwrap();
    assert!(!reading.legacy_order);
    assert_eq!(reading.value, -0xF0000);
}

#[test]
fn legacy_decrement_reads_once_and_writes_once() {
    let previous = 500;
    let delta = 25;
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![
            common::fixtures::status_frame(0x8E, 0x46),
            common::fixtures::raw_block_frame(6, encode_value(previous)),
            common::fixtures::value_frame(0x8A, 6, encode_value(previous - delta)),
        ],
    )
    .unwrap();
    reader.set_block(6);
    reader.set_legacy_value_fallback(true);

    let reading = reader.decrement(delta).unwrap();
    assert_eq!(reading.source, ValueSource::Recomputed);
    assert_eq!(reading.value, previous - delta);
    assert_eq!(reader.value(), previous - delta);
    assert_eq!(reader.error_byte(), 0x46);

    let t = reader.transport();
    assert_eq!(t.sent_opcodes(), vec![0x83, 0x8E, 0x86, 0x8A]);
    // the write carries the locally decremented value
    let write = t.sent.last().unwrap();
    assert_eq!(&write[5..9], &encode_value(previous - delta));
}

#[test]
fn legacy_decrement_stops_when_raw_read_fails() {
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![
            common::fixtures::status_frame(0x8E, 0x46),
            common::fixtures::status_frame(0x86, 0x4E),
        ],
    )
    .unwrap();
    reader.set_block(6);
    reader.set_legacy_value_fallback(true);

    assert!(matches!(
        reader.decrement(1),
        Err(Error::CardFailure {
            command: 0x86,
            status: 0x4E
        })
    ));
    assert_eq!(reader.transport().sent_opcodes(), vec![0x83, 0x8E, 0x86]);
}

#[test]
fn legacy_read_fallback_only_for_its_status() {
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![common::fixtures::status_frame(0x87, 0x4E)],
    )
    .unwrap();
    reader.set_block(4);
    reader.set_legacy_value_fallback(true);

    assert!(matches!(
        reader.read_value(),
        Err(Error::CardFailure { status: 0x4E, .. })
    ));
    assert_eq!(reader.transport().sent_opcodes(), vec![0x83, 0x87]);
}
