//! Shared fakes for console integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use serial_cli_console::console::{register_builtins, Console, ConsoleError};
use serial_cli_console::hal::{
    Acceleration, Circle, Display, Idle, Imu, LedGrid, Rgb, SystemControl, Transport,
};
use serial_cli_console::{ConsoleConfig, DeviceError};

/// Transport fed from a script, recording every write call separately
#[derive(Default)]
pub struct RecordingTransport {
    pub input: VecDeque<u8>,
    pub writes: Vec<Vec<u8>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        Self {
            input: bytes.iter().copied().collect(),
            writes: Vec::new(),
        }
    }

    /// Everything written so far, concatenated
    pub fn output(&self) -> String {
        let bytes: Vec<u8> = self.writes.concat();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for RecordingTransport {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.writes.push(bytes.to_vec());
    }
}

/// Board recording every collaborator call
#[derive(Default)]
pub struct MockBoard {
    pub sample: Option<Acceleration>,
    pub led_sets: Vec<(u8, Rgb)>,
    pub commits: usize,
    pub fail_led: bool,
    pub circles: Vec<Circle>,
    pub flushes: usize,
    pub fail_flush: bool,
    pub resets: usize,
    /// Behave like a board with no LED grid or display wired
    pub detached: bool,
}

impl MockBoard {
    /// Number of collaborator calls of any kind
    pub fn calls(&self) -> usize {
        self.led_sets.len() + self.commits + self.circles.len() + self.flushes + self.resets
    }
}

impl Imu for MockBoard {
    fn read_acceleration(&mut self) -> Option<Acceleration> {
        self.sample
    }
}

impl LedGrid for MockBoard {
    fn set_led(&mut self, key: u8, color: Rgb) -> Result<(), DeviceError> {
        self.led_sets.push((key, color));
        if self.detached {
            Err(DeviceError::NotAttached)
        } else if self.fail_led {
            Err(DeviceError::Led)
        } else {
            Ok(())
        }
    }

    fn commit(&mut self) -> Result<(), DeviceError> {
        self.commits += 1;
        Ok(())
    }
}

impl Display for MockBoard {
    fn draw_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    fn flush(&mut self) -> Result<(), DeviceError> {
        self.flushes += 1;
        if self.detached {
            Err(DeviceError::NotAttached)
        } else if self.fail_flush {
            Err(DeviceError::Display)
        } else {
            Ok(())
        }
    }
}

impl SystemControl for MockBoard {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Idle primitive recording requested sleeps
#[derive(Default)]
pub struct RecordingIdle {
    pub sleeps: Vec<Duration>,
}

impl Idle for RecordingIdle {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

/// Console with every built-in registered
pub fn console() -> Console<MockBoard> {
    let mut console = Console::new(ConsoleConfig::default());
    register_builtins(console.registry_mut()).expect("builtins fit the registry");
    console
}

/// Feed bytes one at a time, collecting the results of completed commands
pub fn feed(
    console: &mut Console<MockBoard>,
    io: &mut RecordingTransport,
    board: &mut MockBoard,
    bytes: &[u8],
) -> Vec<Result<(), ConsoleError>> {
    bytes
        .iter()
        .filter_map(|&b| console.process_byte(b, io, board))
        .collect()
}

/// Dispatch a single line through a fresh console, returning result and output
pub fn run_line(board: &mut MockBoard, line: &str) -> (Option<Result<(), ConsoleError>>, String) {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut input = line.as_bytes().to_vec();
    input.push(b'\r');

    let mut results = feed(&mut console, &mut io, board, &input);
    (results.pop(), io.output())
}
