// libsonmicro/src/types.rs

use crate::Error;

/// Card family reported by the select-tag response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// No successful selection, or the last card-facing exchange failed.
    #[default]
    Undefined,
    Ultralight,
    Standard1K,
    Classic4K,
    /// A tag answered with a type byte this driver does not know.
    Unknown,
}

impl CardType {
    /// Map the type byte of a select-tag response.
    pub fn from_type_byte(b: u8) -> Self {
        match b {
            0x01 => Self::Ultralight,
            0x02 => Self::Standard1K,
            0x03 => Self::Classic4K,
            _ => Self::Unknown,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

/// Card UID - 最大 7 バイト, most-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid {
    bytes: [u8; Uid::MAX_LEN],
    len: u8,
}

impl Uid {
    pub const MAX_LEN: usize = 7;

    /// Build a UID from bytes already in most-significant-first order.
    pub fn from_msb_first(bytes: &[u8]) -> crate::Result<Self> {
        Self::try_from(bytes)
    }

    /// Build a UID from the least-significant-first order used on the wire.
    pub fn from_wire(bytes: &[u8]) -> crate::Result<Self> {
        let mut uid = Self::try_from(bytes)?;
        uid.bytes[..bytes.len()].reverse();
        Ok(uid)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper-case hex without separators, e.g. `"04A1B2C3D4E5"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes()).to_ascii_uppercase()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > Self::MAX_LEN {
            return Err(Error::ResponseTooLarge {
                length: bytes.len() as u8,
                capacity: Self::MAX_LEN,
            });
        }
        let mut arr = [0u8; Self::MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// Authentication key type byte.
///
/// 0xAA / 0xBB select key A / key B, 0xFF is key A with the transport key,
/// and 0x10..=0x2F reference keys stored in the module's EEPROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyType(u8);

impl KeyType {
    pub const KEY_A: Self = Self(0xAA);
    pub const KEY_B: Self = Self(0xBB);
    pub const DEFAULT: Self = Self(0xFF);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Stored A-key slot `n` (1..=16), or `None` when out of range.
    pub fn stored_a(n: u8) -> Option<Self> {
        (1..=16).contains(&n).then(|| Self(0x10 + n - 1))
    }

    /// Stored B-key slot `n` (1..=16), or `None` when out of range.
    pub fn stored_b(n: u8) -> Option<Self> {
        (1..=16).contains(&n).then(|| Self(0x20 + n - 1))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether the authenticate command appends six bytes of key material
    /// for this key type.
    pub fn sends_key_material(&self) -> bool {
        self.0 < crate::constants::KEY_MATERIAL_THRESHOLD
    }
}

impl Default for KeyType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Key type plus the six key bytes used by `authenticate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthKey {
    pub key_type: KeyType,
    pub key: [u8; 6],
}

impl AuthKey {
    pub fn new(key_type: KeyType, key: [u8; 6]) -> Self {
        Self { key_type, key }
    }
}

impl Default for AuthKey {
    fn default() -> Self {
        Self::new(KeyType::DEFAULT, [0xFF; 6])
    }
}

/// Authentication result codes. `NoCardSelected` and `Failure` are raised
/// by the driver itself and never sent by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthResponse {
    Success,
    NoTag,
    LoginFailed,
    InvalidEepromKey,
    NoCardSelected,
    Failure,
    Other(u8),
}

impl AuthResponse {
    pub fn from_byte(b: u8) -> Self {
        match b {
            0x4C => Self::Success,
            0x4E => Self::NoTag,
            0x55 => Self::LoginFailed,
            0x45 => Self::InvalidEepromKey,
            0xFE => Self::NoCardSelected,
            0xFF => Self::Failure,
            other => Self::Other(other),
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Success => 0x4C,
            Self::NoTag => 0x4E,
            Self::LoginFailed => 0x55,
            Self::InvalidEepromKey => 0x45,
            Self::NoCardSelected => 0xFE,
            Self::Failure => 0xFF,
            Self::Other(b) => *b,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl Default for AuthResponse {
    fn default() -> Self {
        // Matches the session state before any selection happened.
        Self::NoCardSelected
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The leading four bytes, which hold a value for value-block operations.
    pub fn value_bytes(&self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    pub fn set_value_bytes(&mut self, bytes: [u8; 4]) {
        self.0[..4].copy_from_slice(&bytes);
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

/// Where a value reported by `read_value` / `decrement` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueSource {
    /// Dedicated value-block read.
    ValueBlock,
    /// Raw 16-byte block read (Ultralight, or the legacy read fallback).
    RawBlock,
    /// Result of the module's own arithmetic.
    Card,
    /// Legacy decrement emulated by the driver (read, subtract, write).
    Recomputed,
}

/// Value plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueReading {
    pub value: i32,
    pub source: ValueSource,
    /// The stored bytes were re-decoded in the legacy byte order.
    pub legacy_order: bool,
}
