//! # SerialCliConsole
//!
//! Line-oriented command console for an embedded board's serial port.
//!
//! ## Architecture
//!
//! ```text
//! Transport ──▶ EscapeDetector ──▶ line editor ──▶ dispatcher ──▶ handler
//!  (bytes)       (cursor-up)       (echo, BS)      (arity, loop)    │
//!     ▲                                                             │
//!     └──────────────────── OutputBuffer chunks ◀───────────────────┘
//! ```
//!
//! Everything runs on one task, one byte at a time. Handlers reach the
//! hardware only through the [`hal`] traits.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod hal;

pub use config::{ConsoleConfig, UartConfig, VERSION};
pub use console::{
    register_builtins, CommandDescriptor, Console, ConsoleError, DeviceError, Progress, Registry,
    RegistryError,
};
pub use hal::{Board, Idle, Transport};
