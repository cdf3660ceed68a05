// libsonmicro/src/error.rs

use thiserror::Error;

use crate::types::{AuthResponse, CardType};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("no response within the wait budget")]
    Timeout,

    #[error("frame format error: bad header {head:02x?}")]
    FrameFormat { head: [u8; 2] },

    #[error("command mismatch: expected {expected:#04x}, got {actual:#04x}")]
    CommandMismatch { expected: u8, actual: u8 },

    #[error("response too large: length {length} does not fit capacity {capacity}")]
    ResponseTooLarge { length: u8, capacity: usize },

    #[error("invalid command: {length} bytes (expected 1..=255)")]
    InvalidCommand { length: usize },

    #[error("stream ended mid-frame: expected {expected} payload bytes, got {received}")]
    Underrun { expected: usize, received: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:02x?}")]
    ChecksumMismatch { expected: u8, actual: Option<u8> },

    #[error("card failure: command {command:#04x} returned status {status:#04x}")]
    CardFailure { command: u8, status: u8 },

    #[error("no tag in field (status {status:#04x})")]
    NoTag { status: u8 },

    #[error("no card selected")]
    NoCardSelected,

    #[error("authentication rejected: {0:?}")]
    AuthRejected(AuthResponse),

    #[error("unsupported card type: {0:?}")]
    UnsupportedCard(CardType),

    #[error("block {0} is reserved")]
    ReservedBlock(u8),

    #[error("no transport configured")]
    TransportMissing,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装は `serial` feature でのみ有効
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),
}

impl Error {
    /// True for failures of the byte stream or framing layer, as opposed
    /// to a well-formed response in which the module reports a failure.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Timeout
            | Error::FrameFormat { .. }
            | Error::CommandMismatch { .. }
            | Error::ResponseTooLarge { .. }
            | Error::Underrun { .. }
            | Error::ChecksumMismatch { .. }
            | Error::Io(_) => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }

    /// Status byte reported by the module, for card-level failures.
    pub fn status_byte(&self) -> Option<u8> {
        match self {
            Error::CardFailure { status, .. } | Error::NoTag { status } => Some(*status),
            Error::AuthRejected(code) => Some(code.as_byte()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
