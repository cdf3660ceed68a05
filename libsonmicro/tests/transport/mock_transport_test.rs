use libsonmicro::transport::{MockTransport, Transport};

#[test]
fn mock_transport_releases_response_after_write() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01, 0x02]);
    assert_eq!(m.available().unwrap(), 0);
    m.write_all(&[0xAA]).unwrap();
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.available().unwrap(), 2);
}

#[test]
fn stale_bytes_can_be_drained() {
    let mut m = MockTransport::new();
    m.push_stale(&[0x01, 0x02, 0x03]);
    assert_eq!(m.drain().unwrap(), 3);
    assert_eq!(m.unread(), 0);
    assert!(m.read_byte().is_err());
}
