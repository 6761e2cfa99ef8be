//! Command handlers

use core::fmt::Write;

use super::parser::Arity;
use super::registry::{CommandDescriptor, Invocation, Progress, Registry};
use super::{ConsoleError, RegistryError};
use crate::hal::{Board, Circle, Color, Rgb};

/// Clear-screen sequence (VT100 erase display)
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// All built-in commands, in listing order
pub fn builtin_commands<B: Board>() -> [CommandDescriptor<B>; 6] {
    [
        CommandDescriptor {
            name: "help",
            help: "help [command]: Lists all the registered commands",
            handler: cmd_help::<B>,
            arity: Arity::Variable,
        },
        CommandDescriptor {
            name: "cls",
            help: "cls: Clears the terminal screen",
            handler: cmd_cls::<B>,
            arity: Arity::Fixed(0),
        },
        CommandDescriptor {
            name: "reset",
            help: "reset: Resets the device",
            handler: cmd_reset::<B>,
            arity: Arity::Fixed(0),
        },
        CommandDescriptor {
            name: "imu",
            help: "imu: Returns a value from the IMU",
            handler: cmd_imu::<B>,
            arity: Arity::Fixed(0),
        },
        CommandDescriptor {
            name: "led",
            help: "led [keynum][R][G][B]: Sets the given LED to the given R,G,B values",
            handler: cmd_led::<B>,
            arity: Arity::Fixed(4),
        },
        CommandDescriptor {
            name: "draw",
            help: "draw [x][y][radius][color]: Draws a circle on the OLED, color (0) black (1) white",
            handler: cmd_draw::<B>,
            arity: Arity::Fixed(4),
        },
    ]
}

/// Register every built-in command
pub fn register_builtins<B: Board>(registry: &mut Registry<B>) -> Result<(), RegistryError> {
    for cmd in builtin_commands::<B>() {
        registry.register(cmd)?;
    }
    Ok(())
}

// --- Command Implementations ---

/// One command per invocation so long listings stream through the buffer.
fn cmd_help<B>(inv: &mut Invocation<'_, B>, out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    match inv.params.len() {
        0 => {}
        1 => {
            let name = inv.params.get(0).unwrap_or_default();
            let c = inv
                .commands
                .lookup(name)
                .ok_or(ConsoleError::CommandNotFound)?;
            let _ = write!(out, "{}\r\n", c.help);
            return Ok(Progress::Done);
        }
        found => return Err(ConsoleError::ArgumentCountMismatch { expected: 1, found }),
    }

    if let Some(c) = inv.commands.get(inv.call) {
        let _ = write!(out, "{}\r\n", c.help);
    }

    if inv.call + 1 < inv.commands.len() {
        Ok(Progress::More)
    } else {
        Ok(Progress::Done)
    }
}

fn cmd_cls<B>(_inv: &mut Invocation<'_, B>, out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    let _ = out.write_str(CLEAR_SCREEN);
    Ok(Progress::Done)
}

fn cmd_reset<B: Board>(inv: &mut Invocation<'_, B>, _out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    log::info!("reset requested");
    inv.board.reset();
    Ok(Progress::Done)
}

fn cmd_imu<B: Board>(inv: &mut Invocation<'_, B>, out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    match inv.board.read_acceleration() {
        Some(a) => {
            let _ = write!(
                out,
                "Acceleration [mg]: X {}\tY {}\tZ {}\r\n",
                a.x_mg, a.y_mg, a.z_mg
            );
        }
        None => {
            let _ = write!(out, "No data ready!\r\n");
        }
    }
    Ok(Progress::Done)
}

fn cmd_led<B: Board>(inv: &mut Invocation<'_, B>, out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    let key: u8 = inv.params.parse(0)?;
    if key >= B::KEYS {
        return Err(ConsoleError::ArgumentOutOfRange { index: 1 });
    }
    let color = Rgb {
        r: inv.params.parse(1)?,
        g: inv.params.parse(2)?,
        b: inv.params.parse(3)?,
    };

    inv.board.set_led(key, color)?;
    inv.board.commit()?;

    let _ = write!(
        out,
        "Success! Key:{} R:{} G:{} B:{}\r\n",
        key, color.r, color.g, color.b
    );
    Ok(Progress::Done)
}

fn cmd_draw<B: Board>(inv: &mut Invocation<'_, B>, out: &mut dyn Write) -> Result<Progress, ConsoleError> {
    let x: u8 = inv.params.parse(0)?;
    let y: u8 = inv.params.parse(1)?;
    let radius: u8 = inv.params.parse(2)?;
    let color = Color::try_from(inv.params.parse::<u8>(3)?)
        .map_err(|_| ConsoleError::ArgumentOutOfRange { index: 4 })?;

    inv.board.draw_circle(Circle { x, y, radius, color });
    inv.board.flush()?;

    let _ = write!(out, "Circle outline drawn at ({}, {}) r={}\r\n", x, y, radius);
    Ok(Progress::Done)
}
