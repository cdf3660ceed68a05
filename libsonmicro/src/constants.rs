// libsonmicro/src/constants.rs
//! Common protocol constants used across the crate

/// Frame header shared by requests and responses: 0xFF 0x00
pub const FRAME_HEADER: [u8; 2] = [0xFF, 0x00];

/// Bytes that must be buffered before a response header is parsed
/// (header(2) + length(1) + echoed command(1)).
pub const MIN_RESPONSE_PREFIX: usize = 4;

/// Largest response payload the driver ever asks for (raw block read).
pub const RESPONSE_BUFFER_LEN: usize = 20;

/// Command opcodes
pub const CMD_FIRMWARE: u8 = 0x81;
pub const CMD_SELECT_TAG: u8 = 0x83;
pub const CMD_AUTHENTICATE: u8 = 0x85;
pub const CMD_READ_BLOCK: u8 = 0x86;
pub const CMD_READ_VALUE: u8 = 0x87;
pub const CMD_WRITE_VALUE: u8 = 0x8A;
pub const CMD_WRITE_ULTRALIGHT: u8 = 0x8B;
pub const CMD_INCREMENT: u8 = 0x8D;
pub const CMD_DECREMENT: u8 = 0x8E;

/// Response length (echoed command + data) of a successful value-sized
/// exchange: read value, write, increment and decrement.
pub const VALUE_RESPONSE_LEN: u8 = 0x06;

/// Response length of a successful raw 16-byte block read.
pub const BLOCK_RESPONSE_LEN: u8 = 0x12;

/// Shortest select-tag response that carries a tag type and UID.
pub const SELECT_MIN_RESPONSE_LEN: u8 = 6;

/// Key types below this value carry six bytes of key material on the wire.
pub const KEY_MATERIAL_THRESHOLD: u8 = 0x30;

/// Status returned by the value-block read on blocks written in the legacy
/// raw layout.
pub const STATUS_LEGACY_VALUE_READ: u8 = 0x49;

/// Status returned by decrement on blocks written in the legacy raw layout.
pub const STATUS_LEGACY_DECREMENT: u8 = 0x46;

/// Values decoded outside `-LEGACY_VALUE_BOUND..=LEGACY_VALUE_BOUND` are
/// assumed to be stored in the legacy byte order. This bound is a heuristic
/// carried over from deployed data, not a documented protocol rule.
pub const LEGACY_VALUE_BOUND: i32 = 0xF0000;
