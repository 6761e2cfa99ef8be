//! Line buffer tests

use serial_cli_console::console::line_buffer::LineBuffer;

#[test]
fn test_line_buffer_push() {
    let mut buf: LineBuffer = LineBuffer::new();

    buf.push(b'h');
    buf.push(b'e');
    buf.push(b'l');
    buf.push(b'p');

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.cursor(), 4);
}

#[test]
fn test_line_buffer_backspace() {
    let mut buf: LineBuffer = LineBuffer::new();

    buf.set("help");
    assert!(buf.backspace());
    assert!(buf.backspace());

    assert_eq!(buf.as_str(), "he");
    assert_eq!(buf.cursor(), 2);
}

#[test]
fn test_line_buffer_backspace_empty() {
    let mut buf: LineBuffer = LineBuffer::new();

    assert!(!buf.backspace()); // should not underflow
    assert_eq!(buf.as_str(), "");
    assert_eq!(buf.cursor(), 0);
}

#[test]
fn test_line_buffer_clear() {
    let mut buf: LineBuffer = LineBuffer::new();

    buf.set("help");
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_set_from_str() {
    let mut buf: LineBuffer = LineBuffer::new();

    buf.set("led 0 255 0 0");
    assert_eq!(buf.as_str(), "led 0 255 0 0");
    assert_eq!(buf.cursor(), 13);
}

#[test]
fn test_line_buffer_overflow() {
    let mut buf: LineBuffer = LineBuffer::new();

    // Push 70 characters (buffer is 64 with one terminator slot)
    let accepted = (0..70u8).filter(|i| buf.push(b'a' + (i % 26))).count();

    assert_eq!(accepted, 63);
    assert_eq!(buf.len(), 63);
    assert!(buf.is_full());
    assert!(!buf.push(b'z'));
}

#[test]
fn test_line_buffer_set_truncates() {
    let mut buf = LineBuffer::<8>::new();

    buf.set("draw 10 10 5 1");
    assert_eq!(buf.as_str(), "draw 10");
    assert_eq!(buf.len(), buf.capacity());
}

#[test]
fn test_push_then_backspace_restores_state() {
    let mut buf: LineBuffer = LineBuffer::new();
    buf.set("led");
    let before = buf.clone();

    for &c in b" 0 255" {
        assert!(buf.push(c));
    }
    for _ in 0..6 {
        assert!(buf.backspace());
    }

    assert_eq!(buf, before);
    assert_eq!(buf.cursor(), before.cursor());
}
