//! Main console struct integrating all components

use super::dispatcher::dispatch;
use super::escape::{EscapeAction, EscapeDetector};
use super::{
    CommandDescriptor, ConsoleError, LastCommand, LineBuffer, OutputBuffer, Registry,
    RegistryError,
};
use crate::config::ConsoleConfig;
use crate::hal::{Idle, Transport};

/// Backspace echo: move left, blank, move left
pub const ERASE_CHAR: &[u8] = b"\x08 \x08";

/// Erase the whole line and return the cursor to column 0
pub const ERASE_LINE: &[u8] = b"\x1b[2K\r";

/// Console session state.
///
/// Owns every buffer of the console; built once at start-up and driven one
/// byte at a time from a single task.
pub struct Console<B> {
    config: ConsoleConfig,
    registry: Registry<B>,
    line: LineBuffer,
    last: LastCommand,
    escape: EscapeDetector,
    output: OutputBuffer,
    /// Previous byte was CR, so an immediate LF belongs to the same Enter
    after_cr: bool,
}

impl<B> Console<B> {
    /// Create new console with an empty registry
    pub const fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            line: LineBuffer::new(),
            last: LastCommand::new(),
            escape: EscapeDetector::new(),
            output: OutputBuffer::new(),
            after_cr: false,
        }
    }

    /// Register a command. Fails once the console has started.
    pub fn register(&mut self, cmd: CommandDescriptor<B>) -> Result<(), RegistryError> {
        self.registry.register(cmd)
    }

    /// Mutable registry access for bulk registration
    pub fn registry_mut(&mut self) -> &mut Registry<B> {
        &mut self.registry
    }

    /// Registered commands
    pub fn registry(&self) -> &Registry<B> {
        &self.registry
    }

    /// Current input line
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// Last submitted line
    pub fn last_command(&self) -> &str {
        self.last.get()
    }

    /// Check if an escape sequence is being collected
    pub fn in_escape(&self) -> bool {
        self.escape.is_active()
    }

    /// Session settings
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Lock the registry and print the welcome banner and prompt
    pub fn start<T: Transport + ?Sized>(&mut self, io: &mut T) {
        self.registry.lock();
        io.write_str(self.config.banner);
        self.print_prompt(io);
        log::info!("console started, {} command(s)", self.registry.len());
    }

    /// Read one byte if available, otherwise yield for the idle delay
    ///
    /// Returns Some(result) if a command ran, None otherwise.
    pub fn poll<T, I>(
        &mut self,
        io: &mut T,
        board: &mut B,
        idle: &mut I,
    ) -> Option<Result<(), ConsoleError>>
    where
        T: Transport + ?Sized,
        I: Idle + ?Sized,
    {
        match io.read_byte() {
            Some(byte) => self.process_byte(byte, io, board),
            None => {
                idle.sleep(self.config.idle_delay);
                None
            }
        }
    }

    /// Print the banner, then serve input forever
    pub fn run<T, I>(&mut self, io: &mut T, board: &mut B, idle: &mut I) -> !
    where
        T: Transport + ?Sized,
        I: Idle + ?Sized,
    {
        self.start(io);
        loop {
            // Errors were already reported on the terminal
            let _ = self.poll(io, board, idle);
        }
    }

    /// Process a single input byte
    ///
    /// Returns Some(result) if a command ran, None if more input needed.
    pub fn process_byte<T: Transport + ?Sized>(
        &mut self,
        byte: u8,
        io: &mut T,
        board: &mut B,
    ) -> Option<Result<(), ConsoleError>> {
        self.registry.lock();

        let follows_cr = core::mem::replace(&mut self.after_cr, false);

        match self.escape.feed(byte) {
            EscapeAction::Forward => {}
            EscapeAction::Consumed => return None,
            EscapeAction::RecallLast => {
                self.recall_last(io);
                return None;
            }
        }

        match byte {
            // Enter
            b'\r' | b'\n' => {
                if byte == b'\n' && follows_cr {
                    return None;
                }
                self.after_cr = byte == b'\r';
                self.submit(io, board)
            }

            // Backspace / Delete
            0x08 | 0x7F => {
                if self.line.backspace() {
                    io.write(ERASE_CHAR);
                }
                None
            }

            // Printable character
            0x20..=0x7E => {
                if self.line.push(byte) {
                    io.write(&[byte]);
                } else {
                    log::trace!("line full, dropped {:#04x}", byte);
                }
                None
            }

            _ => {
                log::trace!("ignored input byte {:#04x}", byte);
                None
            }
        }
    }

    fn submit<T: Transport + ?Sized>(
        &mut self,
        io: &mut T,
        board: &mut B,
    ) -> Option<Result<(), ConsoleError>> {
        io.write(b"\r\n");
        self.last.record(self.line.as_str());

        let result = if self.line.as_str().trim().is_empty() {
            None
        } else {
            Some(dispatch(
                self.line.as_str(),
                &self.registry,
                board,
                &mut self.output,
                io,
            ))
        };

        self.line.clear();
        self.print_prompt(io);
        result
    }

    /// Replace the current line with the last submitted one
    fn recall_last<T: Transport + ?Sized>(&mut self, io: &mut T) {
        io.write(ERASE_LINE);
        self.print_prompt(io);

        self.line.set(self.last.get());
        io.write(self.line.as_bytes());
    }

    /// Print the prompt
    pub fn print_prompt<T: Transport + ?Sized>(&self, io: &mut T) {
        io.write_str(self.config.prompt);
    }
}
