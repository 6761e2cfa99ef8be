//! Hardware Abstraction Layer for the serial console.
//!
//! Traits only. Console logic stays in `console`, the binary supplies the
//! concrete transport and board.

pub mod board;
pub mod serial;

pub use board::{Acceleration, Board, Circle, Color, Display, Imu, LedGrid, Rgb, SystemControl};
pub use serial::{delay_millis, Idle, Transport};
