//! Command line parser
//!
//! The command name is split off eagerly; parameters are tokenized lazily
//! and copied out into owned strings only once the arity is known.

use core::str::{FromStr, SplitAsciiWhitespace};

use heapless::{String, Vec};

use super::ConsoleError;
use crate::config::{MAX_INPUT_LENGTH, MAX_PARAMS};

/// A completed line split into command name and raw parameter text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The command name (first token), empty for a blank line
    pub command: &'a str,
    /// Everything after the command name
    pub rest: &'a str,
}

impl<'a> ParsedCommand<'a> {
    /// Lazily iterate parameter tokens
    pub fn tokens(&self) -> SplitAsciiWhitespace<'a> {
        self.rest.split_ascii_whitespace()
    }

    /// Get parameter token by index (0-based)
    pub fn token(&self, idx: usize) -> Option<&'a str> {
        self.tokens().nth(idx)
    }

    /// Number of parameter tokens
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    /// Check for a blank line
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Split a line into command name and parameter text
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    let line = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let end = line
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(line.len());

    ParsedCommand {
        command: &line[..end],
        rest: &line[end..],
    }
}

/// Expected parameter count of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many parameters
    Fixed(usize),
    /// Any number, up to `MAX_PARAMS`
    Variable,
}

/// One parameter, copied out of the input line
pub type Param = String<MAX_INPUT_LENGTH>;

/// Owned parameters handed to a handler
///
/// Copies, not views: the input line is cleared and reused as soon as the
/// dispatch cycle ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    values: Vec<Param, MAX_PARAMS>,
}

impl Params {
    /// Create empty parameter list
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Extract parameters for a command of the given arity.
    ///
    /// A fixed-arity command must get exactly its count; nothing is copied
    /// when the count is wrong.
    pub fn extract(cmd: &ParsedCommand<'_>, arity: Arity) -> Result<Self, ConsoleError> {
        let found = cmd.token_count();

        if let Arity::Fixed(expected) = arity {
            if found != expected {
                return Err(ConsoleError::ArgumentCountMismatch { expected, found });
            }
        }
        if found > MAX_PARAMS {
            return Err(ConsoleError::BufferOverflow);
        }

        let mut params = Self::new();
        for token in cmd.tokens() {
            let mut value = Param::new();
            // A token is a slice of a line no longer than MAX_INPUT_LENGTH
            value.push_str(token).map_err(|_| ConsoleError::BufferOverflow)?;
            params.values.push(value).map_err(|_| ConsoleError::BufferOverflow)?;
        }
        Ok(params)
    }

    /// Get parameter by index (0-based)
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(|v| v.as_str())
    }

    /// Parse parameter `idx` (0-based) as a number
    ///
    /// Errors report the 1-based position the user typed.
    pub fn parse<T: FromStr>(&self, idx: usize) -> Result<T, ConsoleError> {
        self.get(idx)
            .and_then(|v| v.parse().ok())
            .ok_or(ConsoleError::ArgumentParseInvalid { index: idx + 1 })
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate parameters in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.as_str())
    }
}
