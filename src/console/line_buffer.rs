//! Line buffer for console input

use crate::config::MAX_INPUT_LENGTH;

/// Fixed-capacity line input buffer.
///
/// `N` is the storage size. One slot stays reserved for the terminator, so
/// the visible line never exceeds `N - 1` bytes. Editing only happens at
/// the end of the line, so the cursor always equals the length.
#[derive(Clone, PartialEq, Eq)]
pub struct LineBuffer<const N: usize = MAX_INPUT_LENGTH> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create empty buffer
    pub const fn new() -> Self {
        assert!(N > 0, "line buffer needs room for the terminator");

        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Visible capacity (storage minus terminator slot)
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Append a byte at the cursor.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len >= self.capacity() {
            return false;
        }
        self.buf[self.len] = c;
        self.len += 1;
        self.buf[self.len] = 0;
        true
    }

    /// Remove the byte before the cursor.
    ///
    /// Returns `false` on an empty buffer.
    pub fn backspace(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        self.buf[self.len] = 0;
        true
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf = [0u8; N];
        self.len = 0;
    }

    /// Replace contents, truncated to the visible capacity
    pub fn set(&mut self, s: &str) {
        self.clear();
        let bytes = s.as_bytes();
        let copy_len = bytes.len().min(self.capacity());
        self.buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
        self.len = copy_len;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Cursor position (insertion point)
    pub fn cursor(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if another byte would be dropped
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("line", &self.as_str())
            .field("cursor", &self.len)
            .finish()
    }
}
