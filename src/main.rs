//! SerialCliConsole - Main entry point
//!
//! On the board: console on UART0, served from the main task.
//! On a host: the same console over stdin/stdout with a simulated board.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

mod app;

#[cfg(target_os = "espidf")]
#[no_mangle]
fn main() {
    app::esp::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    app::host::run()
}
