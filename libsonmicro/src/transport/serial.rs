// libsonmicro/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Baud rate the SM130 ships with.
pub const DEFAULT_BAUD_RATE: u32 = 19200;

/// Timeout applied to single blocking reads and writes.
pub const DEFAULT_IO_TIMEOUT_MS: u64 = 1000;

/// Serial port transport backed by the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` (e.g. `/dev/ttyUSB0`, `COM3`) at `baud_rate`, 8N1.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(Duration::from_millis(DEFAULT_IO_TIMEOUT_MS))
            .open()?;
        log::debug!("opened {} at {} baud", path, baud_rate);
        Ok(Self { port })
    }

    /// Open `path` at the module's factory baud rate.
    pub fn open_default(path: &str) -> Result<Self> {
        Self::open(path, DEFAULT_BAUD_RATE)
    }

    /// Wrap an already-configured port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn available(&mut self) -> Result<usize> {
        Ok(self.port.bytes_to_read()? as usize)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.port.read_exact(&mut b).map_err(Error::Io)?;
        Ok(b[0])
    }

    fn drain(&mut self) -> Result<usize> {
        let pending = self.port.bytes_to_read()? as usize;
        self.port.clear(ClearBuffer::Input)?;
        Ok(pending)
    }
}
