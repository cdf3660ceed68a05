// libsonmicro/src/protocol/commands.rs

use crate::constants::*;
use crate::protocol::codec::encode_value;
use crate::types::AuthKey;

/// High-level Command enum. Each variant knows its opcode, its wire
/// payload and the response capacity the driver reserves for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Firmware,
    SelectTag,
    Authenticate { block: u8, key: AuthKey },
    ReadBlock { block: u8 },
    ReadValue { block: u8 },
    WriteValue { block: u8, value: i32 },
    WriteUltralight { block: u8, value: i32 },
    Increment { block: u8, delta: i32 },
    Decrement { block: u8, delta: i32 },
}

impl Command {
    /// Return the opcode as defined by the SM130 command set.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Firmware => CMD_FIRMWARE,
            Self::SelectTag => CMD_SELECT_TAG,
            Self::Authenticate { .. } => CMD_AUTHENTICATE,
            Self::ReadBlock { .. } => CMD_READ_BLOCK,
            Self::ReadValue { .. } => CMD_READ_VALUE,
            Self::WriteValue { .. } => CMD_WRITE_VALUE,
            Self::WriteUltralight { .. } => CMD_WRITE_ULTRALIGHT,
            Self::Increment { .. } => CMD_INCREMENT,
            Self::Decrement { .. } => CMD_DECREMENT,
        }
    }

    /// Size of the `[Len, Command, Data...]` buffer reserved for the reply.
    /// A reply whose declared length reaches this value is rejected.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::Firmware | Self::SelectTag => 10,
            Self::Authenticate { .. } => 3,
            Self::ReadBlock { .. } => 20,
            Self::ReadValue { .. } | Self::WriteValue { .. } | Self::WriteUltralight { .. } => 8,
            Self::Increment { .. } | Self::Decrement { .. } => 10,
        }
    }

    /// Encode the command into the raw payload (opcode + arguments).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.opcode()];
        match self {
            Self::Firmware | Self::SelectTag => {}
            Self::Authenticate { block, key } => {
                out.push(*block);
                out.push(key.key_type.as_u8());
                if key.key_type.sends_key_material() {
                    out.extend_from_slice(&key.key);
                }
            }
            Self::ReadBlock { block } | Self::ReadValue { block } => out.push(*block),
            Self::WriteValue { block, value }
            | Self::WriteUltralight { block, value }
            | Self::Increment {
                block,
                delta: value,
            }
            | Self::Decrement {
                block,
                delta: value,
            } => {
                out.push(*block);
                out.extend_from_slice(&encode_value(*value));
            }
        }
        out
    }
}
