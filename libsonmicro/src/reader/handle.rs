// libsonmicro/src/reader/handle.rs

use crate::constants::SELECT_MIN_RESPONSE_LEN;
use crate::protocol::{self, Command, ResponseFrame};
use crate::reader::builder::ReaderConfig;
use crate::reader::session::Session;
use crate::transport::Transport;
use crate::types::{AuthKey, AuthResponse, BlockData, CardType, KeyType, Uid};
use crate::utils::PollPolicy;
use crate::{Error, Result};

/// SM130 reader handle. Owns the transport and the session state; one
/// command is in flight at a time.
pub struct Reader<T: Transport> {
    pub(crate) transport: T,
    pub(crate) poll: PollPolicy,
    pub(crate) session: Session,
}

impl<T: Transport> Reader<T> {
    /// Create a Reader with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    pub fn with_config(transport: T, config: ReaderConfig) -> Self {
        let session = Session {
            block: config.block,
            auth: config.auth,
            legacy_value_fallback: config.legacy_value_fallback,
            ..Session::default()
        };
        Self {
            transport,
            poll: config.poll,
            session,
        }
    }

    /// Send one command and return its response payload.
    pub(crate) fn exchange(&mut self, cmd: Command) -> Result<ResponseFrame> {
        protocol::exchange(
            &mut self.transport,
            &cmd.encode(),
            cmd.response_capacity(),
            &self.poll,
        )
    }

    /// Like `exchange`, but a transport-level failure deselects the card.
    pub(crate) fn card_exchange(&mut self, cmd: Command) -> Result<ResponseFrame> {
        self.exchange(cmd).map_err(|e| {
            if e.is_transport() {
                self.fail(&e);
            }
            e
        })
    }

    pub(crate) fn fail(&mut self, cause: &Error) {
        if self.session.card_type.is_selected() {
            log::debug!("deselecting {:?} card: {}", self.session.card_type, cause);
        }
        self.session.card_type = CardType::Undefined;
    }

    /// Record the status byte of a response that reports a failure.
    pub(crate) fn card_failure(&mut self, command: u8, resp: &ResponseFrame) -> Error {
        let status = resp.status();
        self.session.error_byte = status;
        log::debug!(
            "command {:#04x} failed: length {:#04x}, status {:#04x}",
            command,
            resp.length(),
            status
        );
        Error::CardFailure { command, status }
    }

    /// Select the tag in the field.
    ///
    /// On success the card type and UID are stored in the session and the
    /// type is returned. The UID is cleared before the command is sent.
    pub fn select_tag(&mut self) -> Result<CardType> {
        self.session.uid.clear();

        let resp = self.card_exchange(Command::SelectTag)?;
        let len = resp.length();
        if len < SELECT_MIN_RESPONSE_LEN {
            let status = resp.status();
            self.session.card_type = CardType::Undefined;
            self.session.error_byte = status;
            log::debug!("no tag in field (length {}, status {:#04x})", len, status);
            return Err(Error::NoTag { status });
        }

        // [Len, 0x83, Type, UID (least significant byte first)...]
        let uid_len = len as usize - 2;
        let uid = match Uid::from_wire(&resp.as_bytes()[3..3 + uid_len]) {
            Ok(uid) => uid,
            Err(e) => {
                self.session.card_type = CardType::Undefined;
                return Err(e);
            }
        };
        let card_type = CardType::from_type_byte(resp.byte(2));

        self.session.uid = uid;
        self.session.card_type = card_type;
        log::debug!("selected {:?} card {}", card_type, uid.to_hex());
        Ok(card_type)
    }

    /// Authenticate the current block with the configured key.
    ///
    /// Ultralight cards need no authentication and succeed without traffic.
    pub fn authenticate(&mut self) -> Result<()> {
        match self.session.card_type {
            CardType::Undefined => {
                self.session.auth_response = AuthResponse::NoCardSelected;
                return Err(Error::NoCardSelected);
            }
            CardType::Ultralight => {
                self.session.auth_response = AuthResponse::Success;
                return Ok(());
            }
            CardType::Standard1K | CardType::Classic4K | CardType::Unknown => {}
        }

        let cmd = Command::Authenticate {
            block: self.session.block,
            key: self.session.auth,
        };
        let resp = match self.card_exchange(cmd) {
            Ok(resp) => resp,
            Err(e) => {
                self.session.auth_response = AuthResponse::Failure;
                return Err(e);
            }
        };

        let code = AuthResponse::from_byte(resp.status());
        self.session.auth_response = code;
        if code.is_success() {
            log::debug!("authenticated block {}", self.session.block);
            Ok(())
        } else {
            self.session.error_byte = code.as_byte();
            log::debug!("authentication of block {} rejected: {:?}", self.session.block, code);
            Err(Error::AuthRejected(code))
        }
    }

    /// Query the module's firmware version string.
    pub fn firmware_version(&mut self) -> Result<String> {
        let resp = self.exchange(Command::Firmware)?;
        let text = String::from_utf8_lossy(resp.data());
        Ok(text.trim_end_matches('\0').to_string())
    }

    pub fn set_block(&mut self, block: u8) {
        self.session.block = block;
    }

    pub fn block(&self) -> u8 {
        self.session.block
    }

    /// Configure the key used by subsequent `authenticate` calls.
    pub fn set_auth(&mut self, key_type: KeyType, key: [u8; 6]) {
        self.session.auth = AuthKey::new(key_type, key);
    }

    pub fn auth(&self) -> &AuthKey {
        &self.session.auth
    }

    pub fn set_legacy_value_fallback(&mut self, enabled: bool) {
        self.session.legacy_value_fallback = enabled;
    }

    pub fn legacy_value_fallback(&self) -> bool {
        self.session.legacy_value_fallback
    }

    pub fn card_type(&self) -> CardType {
        self.session.card_type
    }

    pub fn uid(&self) -> &Uid {
        &self.session.uid
    }

    pub fn value(&self) -> i32 {
        self.session.value
    }

    pub fn block_data(&self) -> &BlockData {
        &self.session.block_data
    }

    pub fn error_byte(&self) -> u8 {
        self.session.error_byte
    }

    pub fn auth_response(&self) -> AuthResponse {
        self.session.auth_response
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
