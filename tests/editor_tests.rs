//! Line editor tests

use pico_cli::{ByteQueue, CancelStyle, EditorConfig, LineEditor, LineEvent};

type Sink = heapless::Vec<u8, 512>;

struct Rig<const L: usize> {
    queue: ByteQueue<128>,
    editor: LineEditor<L>,
    out: Sink,
}

impl<const L: usize> Rig<L> {
    fn new(config: EditorConfig) -> Self {
        Self {
            queue: ByteQueue::new(),
            editor: LineEditor::new(config),
            out: Sink::new(),
        }
    }

    fn feed(&mut self, input: &[u8], echo: bool) -> Option<LineEvent> {
        for &b in input {
            self.queue.put(b).unwrap();
        }
        self.editor.poll(&self.queue, &mut self.out, echo)
    }

    fn text(&self) -> &str {
        core::str::from_utf8(&self.out).unwrap()
    }
}

#[test]
fn test_editor_completes_on_cr() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"help\r", true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "help");
    assert_eq!(rig.text(), "help\r\n");
    assert!(!rig.editor.is_editing());
}

#[test]
fn test_editor_no_line_yet() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"hel", true), None);
    assert!(rig.editor.is_editing());
    assert_eq!(rig.feed(b"p\n", true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "help");
}

#[test]
fn test_editor_coalesces_terminator_runs() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"a\r\n\r\n\nb\r", true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "a");
    assert_eq!(rig.queue.peek(), Some(b'b'));

    assert_eq!(rig.editor.poll(&rig.queue, &mut rig.out, true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "b");
}

#[test]
fn test_editor_terminators_separate_when_not_coalescing() {
    let config = EditorConfig {
        coalesce_terminators: false,
        ..EditorConfig::new()
    };
    let mut rig: Rig<64> = Rig::new(config);

    assert_eq!(rig.feed(b"a\r\n", true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "a");
    assert_eq!(rig.editor.poll(&rig.queue, &mut rig.out, true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "");
}

#[test]
fn test_editor_kill_line() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"ab\x15", true), None);
    assert_eq!(rig.editor.line(), "");
    assert_eq!(rig.text(), "ab\x08 \x08\x08 \x08");
}

#[test]
fn test_editor_backspace_and_delete() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    rig.feed(b"echp\x7f\x08o\x7f", true);
    assert_eq!(rig.editor.line(), "ec");
}

#[test]
fn test_editor_escape_marker() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"abc\x1bok\r", true), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "ok");
    assert_eq!(rig.text(), "abc^[ \r\nok\r\n");
}

#[test]
fn test_editor_escape_silent() {
    let config = EditorConfig {
        cancel: CancelStyle::Silent,
        ..EditorConfig::new()
    };
    let mut rig: Rig<64> = Rig::new(config);

    assert_eq!(rig.feed(b"abc\x1b", true), None);
    assert_eq!(rig.editor.line(), "");
    assert_eq!(rig.text(), "abc");
}

#[test]
fn test_editor_escape_reprompt() {
    let config = EditorConfig {
        cancel: CancelStyle::Reprompt,
        ..EditorConfig::new()
    };
    let mut rig: Rig<64> = Rig::new(config);

    assert_eq!(rig.feed(b"abc\x1bxyz", true), Some(LineEvent::Cancelled));
    assert_eq!(rig.editor.line(), "");
    assert_eq!(rig.queue.len(), 3);
}

#[test]
fn test_editor_case_folding() {
    let mut folded: Rig<64> = Rig::new(EditorConfig::new());
    folded.feed(b"MCU Reset\r", true);
    assert_eq!(folded.editor.line(), "mcu reset");

    let config = EditorConfig {
        fold_case: false,
        ..EditorConfig::new()
    };
    let mut kept: Rig<64> = Rig::new(config);
    kept.feed(b"MCU Reset\r", true);
    assert_eq!(kept.editor.line(), "MCU Reset");
}

#[test]
fn test_editor_echo_disabled() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"se\x7fcret\x1b\x15pw\r", false), Some(LineEvent::Complete));
    assert_eq!(rig.editor.line(), "pw");
    // Only the line break is written.
    assert_eq!(rig.text(), "\r\n");
}

#[test]
fn test_editor_overflow_truncates() {
    let mut rig: Rig<8> = Rig::new(EditorConfig::new());

    assert_eq!(rig.feed(b"abcdefghij\r", true), Some(LineEvent::Overflow));
    assert_eq!(rig.editor.line(), "abcdefg");
    assert_eq!(rig.text(), "abcdefg");
    // The byte that did not fit is gone; the rest waits in the queue.
    assert_eq!(rig.queue.len(), 3);
}

#[test]
fn test_editor_next_line_clears_previous() {
    let mut rig: Rig<64> = Rig::new(EditorConfig::new());

    rig.feed(b"first\r", true);
    assert_eq!(rig.editor.line(), "first");
    rig.feed(b"x", true);
    assert_eq!(rig.editor.line(), "x");
}
