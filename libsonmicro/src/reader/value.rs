// libsonmicro/src/reader/value.rs

//! Block and value-block operations on the selected card.

use crate::constants::{
    BLOCK_RESPONSE_LEN, STATUS_LEGACY_DECREMENT, STATUS_LEGACY_VALUE_READ, VALUE_RESPONSE_LEN,
};
use crate::protocol::Command;
use crate::protocol::codec::{decode_value, normalize_value};
use crate::reader::handle::Reader;
use crate::transport::Transport;
use crate::types::{BlockData, CardType, ValueReading, ValueSource};
use crate::{Error, Result};

impl<T: Transport> Reader<T> {
    /// Read the raw 16-byte block selected with `set_block`.
    ///
    /// Block 0 holds manufacturer data and is refused without traffic.
    pub fn read_block(&mut self) -> Result<BlockData> {
        self.require_selection()?;
        let block = self.session.block;
        if block < 1 {
            return Err(Error::ReservedBlock(block));
        }

        let cmd = Command::ReadBlock { block };
        let resp = self.card_exchange(cmd)?;
        if resp.length() != BLOCK_RESPONSE_LEN {
            return Err(self.card_failure(cmd.opcode(), &resp));
        }

        // [0x12, 0x86, block, data(16)]
        let mut data = [0u8; 16];
        data.copy_from_slice(&resp.as_bytes()[3..19]);
        self.session.block_data = BlockData::from_bytes(data);
        log::debug!("block {}: {}", block, self.session.block_data.to_hex());
        Ok(self.session.block_data)
    }

    fn read_value_block(&mut self) -> Result<()> {
        let cmd = Command::ReadValue {
            block: self.session.block,
        };
        let resp = self.card_exchange(cmd)?;
        if resp.length() != VALUE_RESPONSE_LEN {
            return Err(self.card_failure(cmd.opcode(), &resp));
        }
        self.session.block_data.set_value_bytes(resp.word_at(3));
        Ok(())
    }

    /// Read the value stored in the current block.
    ///
    /// Ultralight cards are read as raw blocks; 1K/4K cards use the value
    /// block command, retried as a raw read when the legacy fallback is
    /// enabled and the module reports a legacy-layout block. Values that
    /// decode out of range are treated as legacy byte order and the stored
    /// block data is rewritten in the module's order.
    pub fn read_value(&mut self) -> Result<ValueReading> {
        let source = match self.session.card_type {
            CardType::Ultralight => {
                self.read_block()?;
                ValueSource::RawBlock
            }
            CardType::Standard1K | CardType::Classic4K => match self.read_value_block() {
                Ok(()) => ValueSource::ValueBlock,
                Err(Error::CardFailure {
                    status: STATUS_LEGACY_VALUE_READ,
                    ..
                }) if self.session.legacy_value_fallback => {
                    log::warn!(
                        "block {} is not a value block, retrying as legacy raw block",
                        self.session.block
                    );
                    self.read_block()?;
                    ValueSource::RawBlock
                }
                Err(e) => return Err(e),
            },
            CardType::Undefined => return Err(Error::NoCardSelected),
            CardType::Unknown => return Err(Error::UnsupportedCard(CardType::Unknown)),
        };

        let (value, canonical, legacy_order) =
            normalize_value(self.session.block_data.value_bytes());
        if legacy_order {
            log::warn!(
                "block {} holds a legacy-ordered value, normalised to {}",
                self.session.block,
                value
            );
            self.session.block_data.set_value_bytes(canonical);
        }
        self.session.value = value;

        Ok(ValueReading {
            value,
            source,
            legacy_order,
        })
    }

    /// Write `value` to the current block and return the value the module
    /// echoes back.
    pub fn write_value(&mut self, value: i32) -> Result<i32> {
        let block = self.session.block;
        let cmd = match self.session.card_type {
            CardType::Ultralight => Command::WriteUltralight { block, value },
            CardType::Standard1K | CardType::Classic4K => Command::WriteValue { block, value },
            CardType::Undefined => return Err(Error::NoCardSelected),
            CardType::Unknown => return Err(Error::UnsupportedCard(CardType::Unknown)),
        };

        let resp = self.card_exchange(cmd)?;
        if resp.length() != VALUE_RESPONSE_LEN {
            return Err(self.card_failure(cmd.opcode(), &resp));
        }
        self.store_value_bytes(resp.word_at(3));
        Ok(self.session.value)
    }

    /// Increment the value block by `delta`; returns the new value.
    pub fn increment(&mut self, delta: i32) -> Result<i32> {
        self.require_selection()?;
        let cmd = Command::Increment {
            block: self.session.block,
            delta,
        };
        let resp = self.card_exchange(cmd)?;
        if resp.length() != VALUE_RESPONSE_LEN {
            return Err(self.card_failure(cmd.opcode(), &resp));
        }
        self.store_value_bytes(resp.word_at(3));
        Ok(self.session.value)
    }

    /// Decrement the value block by `delta`.
    ///
    /// With the legacy fallback enabled, a block the module refuses to
    /// decrement is read raw, decremented locally and written back. That
    /// path is not atomic: a failed write leaves the card untouched and the
    /// session holding the raw read.
    pub fn decrement(&mut self, delta: i32) -> Result<ValueReading> {
        self.require_selection()?;
        let cmd = Command::Decrement {
            block: self.session.block,
            delta,
        };
        let resp = self.card_exchange(cmd)?;
        if resp.length() == VALUE_RESPONSE_LEN {
            let value = decode_value(resp.word_at(3));
            self.session.value = value;
            return Ok(ValueReading {
                value,
                source: ValueSource::Card,
                legacy_order: false,
            });
        }

        let err = self.card_failure(cmd.opcode(), &resp);
        if !(self.session.legacy_value_fallback && resp.status() == STATUS_LEGACY_DECREMENT) {
            return Err(err);
        }

        log::warn!(
            "block {} refused decrement, emulating on legacy raw block",
            self.session.block
        );
        self.read_block()?;
        let previous = decode_value(self.session.block_data.value_bytes());
        let value = self.write_value(previous.wrapping_sub(delta))?;
        Ok(ValueReading {
            value,
            source: ValueSource::Recomputed,
            legacy_order: false,
        })
    }

    /// Card commands need a successful `select_tag` first; a transport
    /// failure clears it.
    fn require_selection(&self) -> Result<()> {
        if self.session.card_type.is_selected() {
            Ok(())
        } else {
            Err(Error::NoCardSelected)
        }
    }

    fn store_value_bytes(&mut self, bytes: [u8; 4]) {
        self.session.block_data.set_value_bytes(bytes);
        self.session.value = decode_value(bytes);
    }
}
