// libsonmicro/src/protocol/frame.rs

use crate::constants::{FRAME_HEADER, RESPONSE_BUFFER_LEN};
use crate::protocol::checksum::checksum;
use crate::{Error, Result};

/// SM130 frame helper. Provides encode/decode of the wire frame
/// Format: [Header(2)] [Len(1)] [Command(1)] [Data(n)] [CSUM(1)]
/// Header: 0xFF 0x00
/// Len counts Command + Data; CSUM = (Len + sum(Command, Data)) mod 256
pub struct Frame;

impl Frame {
    /// Encode a command (opcode + arguments) into a full wire frame.
    ///
    /// The length byte limits a command to 1..=255 bytes.
    pub fn encode(cmd: &[u8]) -> Result<Vec<u8>> {
        if cmd.is_empty() || cmd.len() > u8::MAX as usize {
            return Err(Error::InvalidCommand { length: cmd.len() });
        }

        let mut out = Vec::with_capacity(2 + 1 + cmd.len() + 1);
        out.extend_from_slice(&FRAME_HEADER);
        out.push(cmd.len() as u8);
        out.extend_from_slice(cmd);
        out.push(checksum(cmd));
        Ok(out)
    }

    /// Decode one complete frame held in memory into the `[Len, Command,
    /// Data...]` layout returned by the exchange primitive.
    pub fn decode(frame: &[u8]) -> Result<ResponseFrame> {
        if frame.len() < 4 {
            return Err(Error::Underrun {
                expected: 4,
                received: frame.len(),
            });
        }

        let head = [frame[0], frame[1]];
        if head != FRAME_HEADER {
            return Err(Error::FrameFormat { head });
        }

        let len = frame[2];
        if len as usize >= RESPONSE_BUFFER_LEN {
            return Err(Error::ResponseTooLarge {
                length: len,
                capacity: RESPONSE_BUFFER_LEN,
            });
        }

        let required_len = 2 + 1 + (len as usize) + 1;
        if frame.len() < required_len {
            return Err(Error::Underrun {
                expected: required_len,
                received: frame.len(),
            });
        }

        let payload = &frame[3..3 + len as usize];
        let expected = checksum(payload);
        let actual = frame[3 + len as usize];
        if actual != expected {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: Some(actual),
            });
        }

        let mut resp = ResponseFrame::new(len);
        for &b in payload {
            resp.push(b);
        }
        Ok(resp)
    }
}

/// Fixed-capacity response payload laid out as `[Len, Command, Data...]`.
///
/// Bytes past the received length read as zero, so status lookups on a
/// short response never index out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFrame {
    buf: [u8; RESPONSE_BUFFER_LEN],
    len: usize,
}

impl ResponseFrame {
    pub(crate) fn new(length: u8) -> Self {
        let mut buf = [0u8; RESPONSE_BUFFER_LEN];
        buf[0] = length;
        Self { buf, len: 1 }
    }

    pub(crate) fn push(&mut self, b: u8) {
        if self.len < RESPONSE_BUFFER_LEN {
            self.buf[self.len] = b;
            self.len += 1;
        }
    }

    /// Declared payload length (echoed command + data).
    pub fn length(&self) -> u8 {
        self.buf[0]
    }

    /// Echoed command byte.
    pub fn command(&self) -> u8 {
        self.byte(1)
    }

    /// Byte at `idx` in the `[Len, Command, Data...]` layout.
    pub fn byte(&self, idx: usize) -> u8 {
        if idx < self.len { self.buf[idx] } else { 0 }
    }

    /// First data byte; the module's status code on failures.
    pub fn status(&self) -> u8 {
        self.byte(2)
    }

    /// Four bytes starting at `idx`.
    pub fn word_at(&self, idx: usize) -> [u8; 4] {
        [
            self.byte(idx),
            self.byte(idx + 1),
            self.byte(idx + 2),
            self.byte(idx + 3),
        ]
    }

    /// Data bytes following the echoed command.
    pub fn data(&self) -> &[u8] {
        if self.len > 2 { &self.buf[2..self.len] } else { &[] }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
