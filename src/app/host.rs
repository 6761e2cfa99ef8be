//! Host simulator: console on stdin/stdout, board actions logged to stderr.

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use serial_cli_console::hal::{Acceleration, Circle, Display, Imu, LedGrid, Rgb, SystemControl};
use serial_cli_console::{register_builtins, Console, ConsoleConfig, DeviceError, Idle, Transport};

/// Stdin is read on a helper thread so `read_byte` never blocks.
pub struct StdioTransport {
    rx: Receiver<u8>,
    stdout: io::Stdout,
}

impl StdioTransport {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for byte in io::stdin().lock().bytes() {
                match byte {
                    Ok(b) if tx.send(b).is_ok() => {}
                    _ => break,
                }
            }
        });

        Self {
            rx,
            stdout: io::stdout(),
        }
    }
}

impl Transport for StdioTransport {
    fn read_byte(&mut self) -> Option<u8> {
        match self.rx.try_recv() {
            Ok(b) => Some(b),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::info!("stdin closed, leaving console");
                std::process::exit(0);
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut out = self.stdout.lock();
        let _ = out.write_all(bytes);
        let _ = out.flush();
    }
}

pub struct ThreadIdle;

impl Idle for ThreadIdle {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Simulated board: a slowly tilting IMU, 16 LEDs, a frame counter display.
#[derive(Default)]
pub struct SimBoard {
    tick: i32,
    leds: [Rgb; 16],
    staged: [Rgb; 16],
    circles: usize,
    frames: usize,
}

impl Imu for SimBoard {
    fn read_acceleration(&mut self) -> Option<Acceleration> {
        self.tick += 1;
        // Every fourth read has no fresh sample
        if self.tick % 4 == 0 {
            return None;
        }
        Some(Acceleration {
            x_mg: (self.tick * 37) % 200 - 100,
            y_mg: (self.tick * 53) % 200 - 100,
            z_mg: 1000,
        })
    }
}

impl LedGrid for SimBoard {
    fn set_led(&mut self, key: u8, color: Rgb) -> Result<(), DeviceError> {
        let slot = self.staged.get_mut(key as usize).ok_or(DeviceError::Led)?;
        *slot = color;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), DeviceError> {
        self.leds = self.staged;
        log::info!("leds {:?}", self.leds);
        Ok(())
    }
}

impl Display for SimBoard {
    fn draw_circle(&mut self, circle: Circle) {
        self.circles += 1;
        log::info!("circle #{} {:?}", self.circles, circle);
    }

    fn flush(&mut self) -> Result<(), DeviceError> {
        self.frames += 1;
        log::info!("display frame {}", self.frames);
        Ok(())
    }
}

impl SystemControl for SimBoard {
    fn reset(&mut self) {
        log::warn!("device reset");
        std::process::exit(0);
    }
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut console = Console::new(ConsoleConfig::default());
    if let Err(e) = register_builtins(console.registry_mut()) {
        log::error!("command registration failed: {}", e);
        return;
    }

    let mut io = StdioTransport::spawn();
    console.run(&mut io, &mut SimBoard::default(), &mut ThreadIdle)
}
