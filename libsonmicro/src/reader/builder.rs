// libsonmicro/src/reader/builder.rs

use crate::reader::handle::Reader;
use crate::transport::Transport;
use crate::types::{AuthKey, KeyType};
use crate::utils::PollPolicy;
use crate::{Error, Result};

/// Reader configuration applied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    pub poll: PollPolicy,
    /// Retry failed value operations through raw block access for cards
    /// written in the legacy layout.
    pub legacy_value_fallback: bool,
    /// Initially selected block.
    pub block: u8,
    pub auth: AuthKey,
}

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder<T: Transport> {
    transport: Option<T>,
    config: ReaderConfig,
}

impl<T: Transport> ReaderBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: ReaderConfig::default(),
        }
    }

    /// Provide the transport (serial port, MockTransport, ...).
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn poll_policy(mut self, poll: PollPolicy) -> Self {
        self.config.poll = poll;
        self
    }

    pub fn legacy_value_fallback(mut self, enabled: bool) -> Self {
        self.config.legacy_value_fallback = enabled;
        self
    }

    pub fn block(mut self, block: u8) -> Self {
        self.config.block = block;
        self
    }

    pub fn auth(mut self, key_type: KeyType, key: [u8; 6]) -> Self {
        self.config.auth = AuthKey::new(key_type, key);
        self
    }

    /// Consume the builder. Requires a transport; otherwise returns
    /// `TransportMissing`.
    pub fn build(self) -> Result<Reader<T>> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::TransportMissing),
        }
    }
}

impl<T: Transport> Default for ReaderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
