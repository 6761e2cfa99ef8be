//! Escape sequence detector
//!
//! Sits in front of the line editor. Only cursor-up is acted on (recall the
//! last command); every other sequence is swallowed.

use heapless::Vec;

use crate::config::{ESCAPE_CODE_SIZE, MIN_ESCAPE_CODE_SIZE};

/// ESC introducer byte
pub const ESC: u8 = 0x1B;

/// Cursor-up in normal (`ESC [ A`) and application (`ESC O A`) cursor mode,
/// without the introducer.
const CURSOR_UP: [&[u8]; 2] = [b"[A", b"OA"];

/// What the caller should do with a byte after the detector saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    /// Not part of a sequence, hand it to the line editor
    Forward,
    /// Swallowed by the detector
    Consumed,
    /// Cursor-up completed: replace the line with the last command
    RecallLast,
}

/// Escape sequence state machine
#[derive(Debug, Default)]
pub struct EscapeDetector {
    active: bool,
    collected: Vec<u8, ESCAPE_CODE_SIZE>,
}

impl EscapeDetector {
    /// Create idle detector
    pub const fn new() -> Self {
        Self {
            active: false,
            collected: Vec::new(),
        }
    }

    /// Check if a sequence is being collected
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bytes collected so far in the current sequence
    pub fn collected(&self) -> &[u8] {
        &self.collected
    }

    /// Feed one input byte
    pub fn feed(&mut self, byte: u8) -> EscapeAction {
        if !self.active {
            if byte == ESC {
                self.active = true;
                self.collected.clear();
                return EscapeAction::Consumed;
            }
            return EscapeAction::Forward;
        }

        if self.collected.push(byte).is_err() {
            log::trace!("escape sequence overflow, discarded {:02x?}", self.collected.as_slice());
            self.reset();
            return EscapeAction::Consumed;
        }

        if self.collected.len() < MIN_ESCAPE_CODE_SIZE {
            return EscapeAction::Consumed;
        }

        let recall = CURSOR_UP
            .iter()
            .any(|seq| self.collected.eq_ignore_ascii_case(seq));
        if !recall {
            log::trace!("unhandled escape sequence {:02x?}", self.collected.as_slice());
        }
        self.reset();

        if recall {
            EscapeAction::RecallLast
        } else {
            EscapeAction::Consumed
        }
    }

    /// Drop any partial sequence
    pub fn reset(&mut self) {
        self.active = false;
        self.collected.clear();
    }
}
