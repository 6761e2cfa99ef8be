//! Command dispatcher
//!
//! Resolves a completed line to a command, checks its parameters and runs
//! the handler until it reports `Progress::Done`, flushing one chunk per call.

use core::fmt::Write;

use super::output::OutputBuffer;
use super::parser::{parse_line, Params};
use super::registry::{Invocation, Progress, Registry};
use super::ConsoleError;
use crate::hal::Transport;

/// Dispatch one completed line.
///
/// Errors are printed to `io` and returned; none of them are fatal.
pub fn dispatch<B, T, const N: usize>(
    line: &str,
    registry: &Registry<B>,
    board: &mut B,
    output: &mut OutputBuffer<N>,
    io: &mut T,
) -> Result<(), ConsoleError>
where
    T: Transport + ?Sized,
{
    let result = run(line, registry, board, output, io);

    if let Err(err) = result {
        log::warn!("'{}' failed: {}", parse_line(line).command, err);
        output.clear();
        let _ = write!(output, "{}\r\n", err);
        flush(output, io);
    }

    result
}

fn run<B, T, const N: usize>(
    line: &str,
    registry: &Registry<B>,
    board: &mut B,
    output: &mut OutputBuffer<N>,
    io: &mut T,
) -> Result<(), ConsoleError>
where
    T: Transport + ?Sized,
{
    let cmd = parse_line(line);
    let descriptor = registry
        .lookup(cmd.command)
        .ok_or(ConsoleError::CommandNotFound)?;

    // Arity is checked before the handler ever runs
    let params = Params::extract(&cmd, descriptor.arity)?;

    let mut invocation = Invocation {
        params: &params,
        board,
        commands: registry,
        call: 0,
    };

    loop {
        output.clear();
        let progress = (descriptor.handler)(&mut invocation, output);
        // Partial output still goes out before an error message
        flush(output, io);

        match progress? {
            Progress::Done => break,
            Progress::More => invocation.call += 1,
        }
    }

    log::debug!(
        "'{}' done: {} param(s), {} call(s)",
        descriptor.name,
        params.len(),
        invocation.call + 1
    );
    Ok(())
}

fn flush<T, const N: usize>(output: &OutputBuffer<N>, io: &mut T)
where
    T: Transport + ?Sized,
{
    if output.is_truncated() {
        log::warn!("output chunk truncated to {} bytes", output.capacity());
    }
    if !output.is_empty() {
        io.write(output.as_bytes());
    }
}
