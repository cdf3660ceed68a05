//! Timeout helpers used across the crate.
//!
//! The SM130 answers within a few tens of milliseconds; the driver polls
//! the transport for the start of a response instead of blocking on it.

use std::time::Duration;

/// Delay between writing a request and the first availability poll.
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 20;

/// Delay between availability polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Number of availability polls before giving up.
pub const DEFAULT_POLL_ATTEMPTS: usize = 90;

/// Pause after a checksum failure so the module finishes transmitting
/// before the receive buffer is drained.
pub const DEFAULT_CHECKSUM_SETTLE_MS: u64 = 200;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// How long the exchange primitive waits for a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub attempts: usize,
    pub checksum_settle: Duration,
}

impl PollPolicy {
    /// Worst-case time spent waiting before a `Timeout` is reported.
    pub fn budget(&self) -> Duration {
        self.initial_delay + self.interval * self.attempts as u32
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: ms(DEFAULT_INITIAL_DELAY_MS),
            interval: ms(DEFAULT_POLL_INTERVAL_MS),
            attempts: DEFAULT_POLL_ATTEMPTS,
            checksum_settle: ms(DEFAULT_CHECKSUM_SETTLE_MS),
        }
    }
}
