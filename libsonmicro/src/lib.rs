// libsonmicro/src/lib.rs

//! libsonmicro
//!
//! Pure Rust driver for SonMicro SM130 serial RFID reader modules
//! (MIFARE Ultralight / Classic 1K / Classic 4K).
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the domain types in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
