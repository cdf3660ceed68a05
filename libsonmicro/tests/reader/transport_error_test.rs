#[path = "../common/mod.rs"]
mod common;

use libsonmicro::prelude::*;
use libsonmicro::transport::MockTransport;

type Op = fn(&mut Reader<MockTransport>) -> bool;

fn ops() -> Vec<(&'static str, Op)> {
    let ops: [(&'static str, Op); 7] = [
        ("authenticate", |r| r.authenticate().is_ok()),
        ("read_value", |r| r.read_value().is_ok()),
        ("read_block", |r| r.read_block().is_ok()),
        ("write_value", |r| r.write_value(1).is_ok()),
        ("increment", |r| r.increment(1).is_ok()),
        ("decrement", |r| r.decrement(1).is_ok()),
        ("select_tag", |r| r.select_tag().is_ok()),
    ];
    ops.to_vec()
}

#[test]
fn timeout_deselects_card() {
    for (name, op) in ops() {
        let mut reader =
            common::selected_reader(common::fixtures::select_1k_frame(), vec![]).unwrap();
        reader.set_block(4);
        assert!(!op(&mut reader), "{} should fail", name);
        assert_eq!(reader.card_type(), CardType::Undefined, "after {}", name);
    }
}

#[test]
fn corrupt_frame_deselects_card() {
    for (name, op) in ops() {
        let mut reader = common::selected_reader(
            common::fixtures::select_1k_frame(),
            vec![vec![0xFF, 0x00, 0x02, 0x00, 0x00, 0x02]],
        )
        .unwrap();
        reader.set_block(4);
        assert!(!op(&mut reader), "{} should fail", name);
        assert_eq!(reader.card_type(), CardType::Undefined, "after {}", name);
        assert_eq!(reader.transport().unread(), 0, "after {}", name);
    }
}

#[test]
fn deselected_card_refuses_card_commands() {
    for (name, op) in ops() {
        if name == "select_tag" {
            continue;
        }
        let mut reader =
            common::selected_reader(common::fixtures::select_1k_frame(), vec![]).unwrap();
        reader.set_block(4);
        reader.set_legacy_value_fallback(true);
        assert!(!op(&mut reader), "{} should time out", name);
        let sent = reader.transport().sent.len();

        reader
            .transport_mut()
            .push_response(common::fixtures::value_frame(0x8D, 4, [1, 0, 0, 0]));
        assert!(!op(&mut reader), "{} should need a selection", name);
        assert_eq!(reader.transport().sent.len(), sent, "{} sent a frame", name);
        assert_eq!(reader.card_type(), CardType::Undefined, "after {}", name);
    }
}

#[test]
fn card_failure_keeps_card() {
    let mut reader = common::selected_reader(
        common::fixtures::select_1k_frame(),
        vec![common::fixtures::status_frame(0x8A, 0x55)],
    )
    .unwrap();
    reader.set_block(4);
    assert!(reader.write_value(7).is_err());
    assert_eq!(reader.card_type(), CardType::Standard1K);
    assert_eq!(reader.error_byte(), 0x55);
}
