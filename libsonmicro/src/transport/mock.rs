// libsonmicro/src/transport/mock.rs

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and releases
/// one queued response after each write, the way the module answers a
/// request.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    /// Every pause requested by the driver, in order.
    pub pauses: Vec<Duration>,
    rx: VecDeque<u8>,
    /// Testing hook: polls to wait before a response becomes readable
    response_delay: usize,
    held: Option<(Vec<u8>, usize)>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes to be returned after the next write.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue a well-formed response frame around `payload`
    /// (echoed command + data).
    pub fn push_frame(&mut self, payload: &[u8]) {
        let frame = Frame::encode(payload).expect("mock payload must be encodable");
        self.push_response(frame);
    }

    /// Bytes already sitting in the receive buffer, as if left over from an
    /// earlier exchange.
    pub fn push_stale(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Hold each response back for `polls` pauses after the write.
    pub fn set_response_delay(&mut self, polls: usize) {
        self.response_delay = polls;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Opcodes of every written frame, in order.
    pub fn sent_opcodes(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter_map(|frame| frame.get(3).copied())
            .collect()
    }

    /// Bytes still unread in the receive buffer.
    pub fn unread(&self) -> usize {
        self.rx.len()
    }

    fn release(&mut self, resp: Vec<u8>) {
        self.rx.extend(resp);
    }
}

impl Transport for MockTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        if let Some(resp) = self.responses.pop_front() {
            if self.response_delay == 0 {
                self.release(resp);
            } else {
                self.held = Some((resp, self.response_delay));
            }
        }
        Ok(())
    }

    fn available(&mut self) -> Result<usize> {
        Ok(self.rx.len())
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.rx.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "mock transport has no data",
            ))
        })
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
        if let Some((resp, remaining)) = self.held.take() {
            if remaining <= 1 {
                self.release(resp);
            } else {
                self.held = Some((resp, remaining - 1));
            }
        }
    }
}
