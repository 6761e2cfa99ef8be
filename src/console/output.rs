//! Bounded output chunk buffer
//!
//! Handlers write into it through `core::fmt::Write`. Writes past the end
//! are truncated, never an error, so a handler can format freely.

use crate::config::MAX_OUTPUT_LENGTH;

/// Output buffer for one handler invocation
pub struct OutputBuffer<const N: usize = MAX_OUTPUT_LENGTH> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> OutputBuffer<N> {
    /// Create empty buffer
    pub const fn new() -> Self {
        assert!(N > 0, "output buffer needs room for the terminator");

        Self {
            buf: [0u8; N],
            len: 0,
            truncated: false,
        }
    }

    /// Usable capacity (storage minus terminator slot)
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Reset for the next chunk
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
        self.truncated = false;
    }

    /// Append raw bytes, truncating at capacity
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let available = self.capacity() - self.len;
        let to_copy = bytes.len().min(available);
        self.buf[self.len..self.len + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.len += to_copy;
        self.buf[self.len] = 0;
        if to_copy < bytes.len() {
            self.truncated = true;
        }
    }

    /// Chunk ready for the transport
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get chunk as string slice
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            // Truncation may split a multi-byte char
            Err(e) => core::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Get chunk length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if any write since the last clear was cut short
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for OutputBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Write for OutputBuffer<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}
