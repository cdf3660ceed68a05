// libsonmicro/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod exchange;
pub mod frame;

pub use checksum::checksum;
pub use codec::{decode_legacy_value, decode_value, encode_value};
pub use commands::Command;
pub use exchange::exchange;
pub use frame::{Frame, ResponseFrame};
