// libsonmicro/src/prelude.rs

pub use crate::protocol::{Command, ResponseFrame};
pub use crate::reader::{PollPolicy, Reader, ReaderBuilder, ReaderConfig, Session};
pub use crate::transport::Transport;
pub use crate::{
    AuthKey, AuthResponse, BlockData, CardType, Error, KeyType, Result, Uid, ValueReading,
    ValueSource,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
