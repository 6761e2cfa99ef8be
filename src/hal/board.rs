//! Board collaborators driven by the built-in commands.
//!
//! The console core never touches hardware directly. Each peripheral is a
//! narrow trait; a board implements all of them and gets [`Board`] for free.

use crate::console::DeviceError;

/// Acceleration sample in milli-g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Acceleration {
    pub x_mg: i32,
    pub y_mg: i32,
    pub z_mg: i32,
}

/// LED color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Monochrome display pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl TryFrom<u8> for Color {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            other => Err(other),
        }
    }
}

/// Circle outline in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: u8,
    pub y: u8,
    pub radius: u8,
    pub color: Color,
}

/// Inertial measurement unit.
pub trait Imu {
    /// Latest acceleration sample, `None` when no new data is ready.
    fn read_acceleration(&mut self) -> Option<Acceleration>;
}

/// Addressable LED grid (keypad backlight).
pub trait LedGrid {
    /// Number of addressable keys.
    const KEYS: u8 = 16;

    /// Stage a color for one key.
    fn set_led(&mut self, key: u8, color: Rgb) -> Result<(), DeviceError>;

    /// Latch staged colors onto the LEDs.
    fn commit(&mut self) -> Result<(), DeviceError>;
}

/// Frame-buffered display.
pub trait Display {
    /// Draw into the frame buffer; visible after [`Display::flush`].
    fn draw_circle(&mut self, circle: Circle);

    /// Push the frame buffer to the panel.
    fn flush(&mut self) -> Result<(), DeviceError>;
}

/// System-level control.
pub trait SystemControl {
    /// Restart the device. On hardware this does not return.
    fn reset(&mut self);
}

/// Everything the built-in commands need from a board.
pub trait Board: Imu + LedGrid + Display + SystemControl {}

impl<T: Imu + LedGrid + Display + SystemControl> Board for T {}
