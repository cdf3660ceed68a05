// libsonmicro/src/protocol/exchange.rs

//! The request/response primitive. Every command goes through `exchange`;
//! nothing else in the crate writes to or reads from the transport.

use crate::constants::{FRAME_HEADER, MIN_RESPONSE_PREFIX, RESPONSE_BUFFER_LEN};
use crate::protocol::frame::{Frame, ResponseFrame};
use crate::transport::Transport;
use crate::utils::{PollPolicy, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Send `cmd` (opcode + arguments) and read back one response frame.
///
/// `capacity` is the size of the `[Len, Command, Data...]` buffer the caller
/// reserves; a declared length of `capacity` or more is rejected. On any
/// failure the receive buffer is drained so the next exchange starts on a
/// frame boundary.
pub fn exchange<T: Transport + ?Sized>(
    transport: &mut T,
    cmd: &[u8],
    capacity: usize,
    poll: &PollPolicy,
) -> Result<ResponseFrame> {
    let frame = Frame::encode(cmd)?;
    let opcode = cmd[0];
    let capacity = capacity.min(RESPONSE_BUFFER_LEN);

    let stale = transport.drain()?;
    if stale > 0 {
        log::debug!("dropped {} stale bytes before command {:#04x}", stale, opcode);
    }

    log::trace!("-> {}", bytes_to_hex_spaced(&frame));
    transport.write_all(&frame)?;

    transport.pause(poll.initial_delay);
    let mut attempts = 0;
    while transport.available()? < MIN_RESPONSE_PREFIX && attempts < poll.attempts {
        transport.pause(poll.interval);
        attempts += 1;
    }

    let ready = transport.available()?;
    if ready < MIN_RESPONSE_PREFIX {
        log::debug!(
            "command {:#04x}: timed out with {} bytes available",
            opcode,
            ready
        );
        resync(transport);
        return Err(Error::Timeout);
    }

    match read_response(transport, opcode, capacity) {
        Ok(resp) => {
            log::trace!("<- {}", bytes_to_hex_spaced(resp.as_bytes()));
            Ok(resp)
        }
        Err(e) => {
            log::debug!("command {:#04x}: {}", opcode, e);
            if matches!(e, Error::ChecksumMismatch { .. }) {
                transport.pause(poll.checksum_settle);
            }
            resync(transport);
            Err(e)
        }
    }
}

fn read_response<T: Transport + ?Sized>(
    transport: &mut T,
    opcode: u8,
    capacity: usize,
) -> Result<ResponseFrame> {
    let head = [transport.read_byte()?, transport.read_byte()?];
    if head != FRAME_HEADER {
        return Err(Error::FrameFormat { head });
    }

    let len = transport.read_byte()?;
    let echo = transport.read_byte()?;
    let mut resp = ResponseFrame::new(len);
    resp.push(echo);
    let mut sum = len.wrapping_add(echo);

    if echo != opcode {
        return Err(Error::CommandMismatch {
            expected: opcode,
            actual: echo,
        });
    }

    // `len` counts the echoed command + data; the buffer also holds `len`.
    if len as usize >= capacity {
        return Err(Error::ResponseTooLarge {
            length: len,
            capacity,
        });
    }

    for received in 1..len as usize {
        if transport.available()? == 0 {
            return Err(Error::Underrun {
                expected: len as usize,
                received,
            });
        }
        let b = transport.read_byte()?;
        sum = sum.wrapping_add(b);
        resp.push(b);
    }

    if transport.available()? == 0 {
        return Err(Error::ChecksumMismatch {
            expected: sum,
            actual: None,
        });
    }
    let actual = transport.read_byte()?;
    if actual != sum {
        return Err(Error::ChecksumMismatch {
            expected: sum,
            actual: Some(actual),
        });
    }

    Ok(resp)
}

fn resync<T: Transport + ?Sized>(transport: &mut T) {
    if let Err(e) = transport.drain() {
        log::debug!("drain after failed exchange: {}", e);
    }
}
