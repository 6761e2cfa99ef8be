//! Console session tests: echo, editing, submission, loop

mod common;

use std::time::Duration;

use common::{console, feed, MockBoard, RecordingIdle, RecordingTransport};
use serial_cli_console::console::ConsoleError;
use serial_cli_console::console::commands::builtin_commands;
use serial_cli_console::RegistryError;

#[test]
fn test_printable_bytes_are_echoed() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"imu");

    assert_eq!(io.output(), "imu");
    assert_eq!(console.line().as_str(), "imu");
}

#[test]
fn test_ignored_bytes_are_not_echoed() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"\t\x01\xff\x80");

    assert!(io.writes.is_empty());
    assert!(console.line().as_str().is_empty());
}

#[test]
fn test_backspace_and_delete_erase() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"ledx\x08");
    assert_eq!(console.line().as_str(), "led");

    feed(&mut console, &mut io, &mut board, b"\x7f");
    assert_eq!(console.line().as_str(), "le");
    assert_eq!(io.output(), "ledx\x08 \x08\x08 \x08");
}

#[test]
fn test_backspace_on_empty_is_silent_noop() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"\x08\x7f\x08");

    assert!(io.writes.is_empty());
    assert_eq!(console.line().cursor(), 0);
}

#[test]
fn test_type_and_erase_restores_line() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"draw");
    let before = console.line().clone();

    feed(&mut console, &mut io, &mut board, b" 1 2\x08\x08\x08\x08");

    assert_eq!(console.line(), &before);
}

#[test]
fn test_full_line_drops_without_echo_and_never_dispatches() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    let input = vec![b'x'; 100];
    let results = feed(&mut console, &mut io, &mut board, &input);

    assert!(results.is_empty());
    assert_eq!(console.line().len(), 63);
    assert_eq!(io.writes.len(), 63);
}

#[test]
fn test_control_bytes_ignored() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"i\tm\x01u\xff");

    assert_eq!(console.line().as_str(), "imu");
}

#[test]
fn test_submit_dispatches_and_prompts() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    let results = feed(&mut console, &mut io, &mut board, b"reset\n");

    assert_eq!(results, [Ok(())]);
    assert_eq!(board.resets, 1);
    assert_eq!(io.output(), "reset\r\n> ");
    assert_eq!(console.line().as_str(), "");
    assert_eq!(console.last_command(), "reset");
}

#[test]
fn test_crlf_submits_once() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    let results = feed(&mut console, &mut io, &mut board, b"reset\r\n");

    assert_eq!(results.len(), 1);
    assert_eq!(board.resets, 1);
    assert_eq!(console.last_command(), "reset");
}

#[test]
fn test_separate_enters_each_submit() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"reset\r");
    feed(&mut console, &mut io, &mut board, b"\r");

    // The blank line is a submission of its own
    assert_eq!(console.last_command(), "");
    assert_eq!(board.resets, 1);
}

#[test]
fn test_blank_line_does_not_dispatch() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    let results = feed(&mut console, &mut io, &mut board, b"   \r");

    assert!(results.is_empty());
    assert_eq!(io.output(), "   \r\n> ");
}

#[test]
fn test_unknown_command_keeps_console_running() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    let results = feed(&mut console, &mut io, &mut board, b"frobnicate\rreset\r");

    assert_eq!(results, [Err(ConsoleError::CommandNotFound), Ok(())]);
    assert_eq!(board.resets, 1);
    assert_eq!(board.calls(), 1);
}

#[test]
fn test_registration_closed_after_start() {
    let mut console = console();
    let mut io = RecordingTransport::new();

    console.start(&mut io);

    let extra = builtin_commands::<MockBoard>()[0];
    assert_eq!(console.register(extra), Err(RegistryError::Locked));
    assert!(io.output().ends_with("> "));
    assert!(io.output().starts_with(console.config().banner));
}

#[test]
fn test_registration_closed_after_first_byte() {
    let mut console = console();
    let mut io = RecordingTransport::new();
    let mut board = MockBoard::default();

    feed(&mut console, &mut io, &mut board, b"i");

    let extra = builtin_commands::<MockBoard>()[1];
    assert_eq!(console.register(extra), Err(RegistryError::Locked));
}

#[test]
fn test_poll_idles_without_input() {
    let mut console = console();
    let mut io = RecordingTransport::with_input(b"reset\r");
    let mut board = MockBoard::default();
    let mut idle = RecordingIdle::default();

    let mut results = Vec::new();
    for _ in 0..8 {
        if let Some(r) = console.poll(&mut io, &mut board, &mut idle) {
            results.push(r);
        }
    }

    assert_eq!(results, [Ok(())]);
    assert_eq!(idle.sleeps, [Duration::from_millis(10); 2]);
}
