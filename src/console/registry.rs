//! Command registry
//!
//! Ordered, fixed-capacity table of command descriptors. Filled during
//! start-up, then locked once the console starts reading input.

use core::fmt::Write;

use heapless::Vec;

use super::parser::{parse_line, Arity, Params};
use super::{ConsoleError, RegistryError};
use crate::config::MAX_COMMANDS;

/// Whether a handler has more output to stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Output complete, stop invoking
    Done,
    /// Flush this chunk and invoke again
    More,
}

/// Everything a handler gets besides its output sink
pub struct Invocation<'a, B> {
    /// Owned parameters, already arity-checked
    pub params: &'a Params,
    /// Board collaborators
    pub board: &'a mut B,
    /// The registry the command was found in
    pub commands: &'a Registry<B>,
    /// 0 on the first invocation, +1 after every `Progress::More`
    pub call: usize,
}

/// Handler signature: write one chunk into `out`, report progress
pub type Handler<B> = fn(&mut Invocation<'_, B>, &mut dyn Write) -> Result<Progress, ConsoleError>;

/// Command descriptor
pub struct CommandDescriptor<B> {
    pub name: &'static str,
    pub help: &'static str,
    pub handler: Handler<B>,
    pub arity: Arity,
}

impl<B> Clone for CommandDescriptor<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for CommandDescriptor<B> {}

impl<B> core::fmt::Debug for CommandDescriptor<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Ordered command table
pub struct Registry<B> {
    commands: Vec<CommandDescriptor<B>, MAX_COMMANDS>,
    locked: bool,
}

impl<B> Registry<B> {
    /// Create empty, unlocked registry
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            locked: false,
        }
    }

    /// Add a command. Names are unique; a duplicate is rejected.
    pub fn register(&mut self, cmd: CommandDescriptor<B>) -> Result<(), RegistryError> {
        if self.locked {
            return Err(RegistryError::Locked);
        }
        if self.lookup(cmd.name).is_some() {
            return Err(RegistryError::Duplicate(cmd.name));
        }
        self.commands.push(cmd).map_err(|_| RegistryError::Full)
    }

    /// Refuse further registration
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Check if registration is closed
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Exact, case-sensitive match on a command name
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor<B>> {
        if name.is_empty() {
            return None;
        }
        self.commands.iter().find(|c| c.name == name)
    }

    /// Look up the command named by the first token of a raw line
    pub fn find_for_line(&self, line: &str) -> Result<&CommandDescriptor<B>, ConsoleError> {
        self.lookup(parse_line(line).command)
            .ok_or(ConsoleError::CommandNotFound)
    }

    /// Get command by registration order
    pub fn get(&self, idx: usize) -> Option<&CommandDescriptor<B>> {
        self.commands.get(idx)
    }

    /// Iterate commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor<B>> {
        self.commands.iter()
    }

    /// All command names, for listings
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<B> Default for Registry<B> {
    fn default() -> Self {
        Self::new()
    }
}
