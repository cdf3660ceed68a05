// libsonmicro/src/reader/mod.rs

pub mod builder;
pub mod handle;
pub mod session;
pub mod value;

pub use builder::{ReaderBuilder, ReaderConfig};
pub use handle::Reader;
pub use session::Session;
pub use crate::utils::PollPolicy;
