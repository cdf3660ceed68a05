// libsonmicro/src/reader/session.rs

use crate::types::{AuthKey, AuthResponse, BlockData, CardType, Uid};

/// Per-reader session state. Only `Reader` operations mutate it.
///
/// `uid` and `card_type` describe the card found by the most recent
/// successful `select_tag`; a transport failure in any card-facing
/// operation resets `card_type` to `Undefined`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) card_type: CardType,
    pub(crate) uid: Uid,
    pub(crate) block: u8,
    pub(crate) auth: AuthKey,
    pub(crate) auth_response: AuthResponse,
    pub(crate) error_byte: u8,
    pub(crate) block_data: BlockData,
    pub(crate) value: i32,
    pub(crate) legacy_value_fallback: bool,
}

impl Session {
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn block(&self) -> u8 {
        self.block
    }

    pub fn auth(&self) -> &AuthKey {
        &self.auth
    }

    /// Result of the last authentication attempt.
    pub fn auth_response(&self) -> AuthResponse {
        self.auth_response
    }

    /// Status byte of the most recent card-level failure.
    pub fn error_byte(&self) -> u8 {
        self.error_byte
    }

    pub fn block_data(&self) -> &BlockData {
        &self.block_data
    }

    /// Value decoded by the last successful value operation.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn legacy_value_fallback(&self) -> bool {
        self.legacy_value_fallback
    }
}
