//! Serial transport and idle primitives for the console loop.

use core::time::Duration;

/// Byte-oriented console transport (UART, USB CDC, stdio...)
pub trait Transport {
    /// Read one byte without blocking; `None` when nothing arrived yet.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write bytes to the terminal. Write failures are not reported.
    fn write(&mut self, bytes: &[u8]);

    /// Write a string slice.
    fn write_str(&mut self, s: &str) {
        self.write(s.as_bytes());
    }
}

/// Cooperative yield used when the transport has no input.
pub trait Idle {
    fn sleep(&mut self, duration: Duration);
}

/// Whole milliseconds for a tick-based delay: at least 1, saturating at `u32::MAX`.
pub fn delay_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis().max(1)).unwrap_or(u32::MAX)
}
