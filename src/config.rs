//! Module: config
//!
//! Purpose: Capacities and runtime settings for the serial console.
//!
//! Capacities are compile-time constants so every buffer is statically sized.
//! Runtime settings (prompt, banner, idle delay, UART wiring) live in plain
//! structs with `Default` impls matching the reference board.

use core::time::Duration;

/// Input line buffer size, including the reserved terminator slot.
pub const MAX_INPUT_LENGTH: usize = 64;

/// Output chunk buffer size, including the reserved terminator slot.
pub const MAX_OUTPUT_LENGTH: usize = 128;

/// Maximum number of registered commands.
pub const MAX_COMMANDS: usize = 16;

/// Maximum number of parameters handed to a handler.
pub const MAX_PARAMS: usize = 8;

/// Bytes an escape sequence may collect after the ESC introducer.
pub const ESCAPE_CODE_SIZE: usize = 4;

/// Collected bytes needed before a sequence is matched.
pub const MIN_ESCAPE_CODE_SIZE: usize = 2;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prompt printed after the banner, after each line and on history recall.
    pub prompt: &'static str,
    /// Welcome text printed once when the console starts.
    pub banner: &'static str,
    /// How long the loop yields when the transport has no byte ready.
    pub idle_delay: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ",
            banner: concat!(
                env!("VERSION_STRING"),
                " CLI.\r\nType help to view a list of registered commands.\r\n"
            ),
            idle_delay: Duration::from_millis(10),
        }
    }
}

/// UART wiring for the console port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
    pub rx_pin: u8,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 43, // U0TXD
            rx_pin: 44, // U0RXD
        }
    }
}
