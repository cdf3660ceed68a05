// libsonmicro/src/transport/traits.rs

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts the byte stream away from protocol/reader
/// logic. Implementations only move bytes; framing lives in `protocol`.
pub trait Transport {
    /// Write all bytes to the module.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Number of bytes that can be read without blocking.
    fn available(&mut self) -> Result<usize>;

    /// Read a single byte, blocking until one arrives or the transport's
    /// own timeout expires.
    fn read_byte(&mut self) -> Result<u8>;

    /// Wait between availability polls. Fakes override this to avoid
    /// sleeping in tests.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Discard everything currently buffered and return how many bytes
    /// were dropped.
    fn drain(&mut self) -> Result<usize> {
        let mut dropped = 0;
        while self.available()? > 0 {
            self.read_byte()?;
            dropped += 1;
        }
        Ok(dropped)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_all(data)
    }

    fn available(&mut self) -> Result<usize> {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }

    fn drain(&mut self) -> Result<usize> {
        (**self).drain()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_all(data)
    }

    fn available(&mut self) -> Result<usize> {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }

    fn drain(&mut self) -> Result<usize> {
        (**self).drain()
    }
}
