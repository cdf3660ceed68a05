//! Utilities for libsonmicro: small, reusable helpers used across the crate.
//!
//! Hex helpers for UID rendering and trace output, and the timing defaults
//! of the response poll loop.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
