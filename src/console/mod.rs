//! Serial console for commands and diagnostics
//!
//! Byte-at-a-time polling from a single task.
//! Zero heap allocation - all buffers are fixed-capacity.

pub mod commands;
#[allow(clippy::module_inception)]
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod escape;
pub mod history;
pub mod line_buffer;
pub mod output;
pub mod parser;
pub mod registry;

pub use commands::{builtin_commands, register_builtins};
pub use console::Console;
pub use dispatcher::dispatch;
pub use error::{ConsoleError, DeviceError, RegistryError};
pub use escape::{EscapeAction, EscapeDetector};
pub use history::LastCommand;
pub use line_buffer::LineBuffer;
pub use output::OutputBuffer;
pub use parser::{parse_line, Arity, Params, ParsedCommand};
pub use registry::{CommandDescriptor, Handler, Invocation, Progress, Registry};
