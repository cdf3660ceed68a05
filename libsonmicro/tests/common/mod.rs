#![allow(dead_code)]

pub mod fixtures;

use libsonmicro::Result;
use libsonmicro::reader::Reader;
use libsonmicro::transport::MockTransport;

/// Reader over a mock that first answers select-tag with `select` and then
/// the given raw frames.
pub fn selected_reader(select: Vec<u8>, frames: Vec<Vec<u8>>) -> Result<Reader<MockTransport>> {
    let mut mock = MockTransport::new();
    mock.push_response(select);
    for f in frames {
        mock.push_response(f);
    }
    let mut reader = Reader::new(mock);
    reader.select_tag()?;
    Ok(reader)
}
