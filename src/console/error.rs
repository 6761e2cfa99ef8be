//! Console error types

use thiserror::Error;

/// Console error with code and message
///
/// Every variant is terminal to the current command only. The dispatcher
/// prints it and the console carries on with the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// E01: First token names no registered command
    #[error("E01: command not recognized, enter 'help' to list commands")]
    CommandNotFound,
    /// E02: Wrong number of parameters for a fixed-arity command
    #[error("E02: expected {expected} parameter(s), got {found}")]
    ArgumentCountMismatch { expected: usize, found: usize },
    /// E03: Parameter is not a valid number (1-based index)
    #[error("E03: parameter {index} is not a valid number")]
    ArgumentParseInvalid { index: usize },
    /// E04: Parameter parsed but outside the allowed range (1-based index)
    #[error("E04: parameter {index} out of range")]
    ArgumentOutOfRange { index: usize },
    /// E05: A device collaborator reported a failure
    #[error("E05: {0}")]
    HandlerIoFailure(#[from] DeviceError),
    /// E06: Input does not fit the fixed parameter storage
    #[error("E06: too many parameters")]
    BufferOverflow,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::CommandNotFound => "E01",
            Self::ArgumentCountMismatch { .. } => "E02",
            Self::ArgumentParseInvalid { .. } => "E03",
            Self::ArgumentOutOfRange { .. } => "E04",
            Self::HandlerIoFailure(_) => "E05",
            Self::BufferOverflow => "E06",
        }
    }
}

/// Failure reported by a board collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// LED driver rejected the write or the commit
    #[error("LED driver error")]
    Led,
    /// Display flush failed
    #[error("could not update the display")]
    Display,
    /// The board has no such peripheral wired up
    #[error("peripheral not attached")]
    NotAttached,
}

/// Command registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command with this name is already registered
    #[error("command '{0}' already registered")]
    Duplicate(&'static str),
    /// No free slot left in the registry
    #[error("command registry full")]
    Full,
    /// The console already started processing input
    #[error("registry locked after console start")]
    Locked,
}
