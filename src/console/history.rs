//! Last-command slot for history recall
//!
//! Single entry, overwritten on every submitted line. Lives in RAM only.

use super::line_buffer::LineBuffer;
use crate::config::MAX_INPUT_LENGTH;

/// Copy of the most recently submitted line
#[derive(Debug, Default)]
pub struct LastCommand<const N: usize = MAX_INPUT_LENGTH> {
    line: LineBuffer<N>,
}

impl<const N: usize> LastCommand<N> {
    /// Create empty slot
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Overwrite the slot with a submitted line (truncated to capacity)
    pub fn record(&mut self, line: &str) {
        self.line.set(line);
    }

    /// Line to recall; empty before the first submission
    pub fn get(&self) -> &str {
        self.line.as_str()
    }

    /// Check if nothing was submitted yet (or the last submission was blank)
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}
