use heapless::String;

use crate::context::Output;
use crate::queue::ByteQueue;

const CTRL_U: u8 = 0x15;
const ESC: u8 = 0x1b;
const BS: u8 = 0x08;
const DEL: u8 = 0x7f;

const ERASE: &[u8] = b"\x08 \x08";
const CANCEL_MARKER: &[u8] = b"^[ \r\n";

/// What ESC does to the line being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CancelStyle {
    /// Drop the line without any output.
    Silent,
    /// Echo `^[` and a line break, then keep editing on the next line.
    Marker,
    /// Echo the marker and have the session print a fresh prompt.
    Reprompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditorConfig {
    /// Store printable input lowercased.
    pub fold_case: bool,
    pub cancel: CancelStyle,
    /// Swallow a CR/LF run that directly follows a terminator.
    pub coalesce_terminators: bool,
}

impl EditorConfig {
    pub const fn new() -> Self {
        Self {
            fold_case: true,
            cancel: CancelStyle::Marker,
            coalesce_terminators: true,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a [`LineEditor::poll`] that consumed a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// A terminator arrived; [`LineEditor::line`] holds the line.
    Complete,
    /// The line filled up before a terminator; what fit is kept.
    Overflow,
    /// ESC under [`CancelStyle::Reprompt`].
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingLine,
    Editing,
}

/// Byte-at-a-time line editor over a buffer of `L` bytes, one of which is
/// reserved, so a line holds at most `L - 1` characters.
pub struct LineEditor<const L: usize> {
    line: String<L>,
    state: State,
    config: EditorConfig,
}

impl<const L: usize> LineEditor<L> {
    pub const fn new(config: EditorConfig) -> Self {
        const { assert!(L > 1, "line buffer must hold at least one character") };
        Self {
            line: String::new(),
            state: State::AwaitingLine,
            config,
        }
    }

    /// The current or most recently finished line. A finished line stays
    /// readable until the first byte of the next one is consumed.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    pub fn is_editing(&self) -> bool {
        self.state == State::Editing
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Drain `queue` until a line finishes or the queue runs dry.
    ///
    /// Keystroke echo goes to `out` only when `echo` is set; the line break
    /// that ends a line is always written.
    pub fn poll<const N: usize>(
        &mut self,
        queue: &ByteQueue<N>,
        out: &mut dyn Output,
        echo: bool,
    ) -> Option<LineEvent> {
        while let Some(byte) = queue.get() {
            if self.state == State::AwaitingLine {
                self.line.clear();
                self.state = State::Editing;
            }
            if let Some(event) = self.consume(byte, queue, out, echo) {
                self.state = State::AwaitingLine;
                return Some(event);
            }
        }
        None
    }

    fn consume<const N: usize>(
        &mut self,
        byte: u8,
        queue: &ByteQueue<N>,
        out: &mut dyn Output,
        echo: bool,
    ) -> Option<LineEvent> {
        match byte {
            b'\r' | b'\n' => {
                if self.config.coalesce_terminators {
                    while let Some(b'\r' | b'\n') = queue.peek() {
                        queue.get();
                    }
                }
                out.write(crate::NEWLINE);
                let _ = out.flush();
                return Some(LineEvent::Complete);
            }
            CTRL_U => {
                for _ in 0..self.line.len() {
                    echo_bytes(out, echo, ERASE);
                }
                self.line.clear();
            }
            ESC => {
                self.line.clear();
                match self.config.cancel {
                    CancelStyle::Silent => {}
                    CancelStyle::Marker => echo_bytes(out, echo, CANCEL_MARKER),
                    CancelStyle::Reprompt => {
                        echo_bytes(out, echo, CANCEL_MARKER);
                        return Some(LineEvent::Cancelled);
                    }
                }
            }
            BS | DEL => {
                if self.line.pop().is_some() {
                    echo_bytes(out, echo, ERASE);
                }
            }
            b' '..=b'~' => {
                if self.line.len() >= L - 1 {
                    return Some(LineEvent::Overflow);
                }
                let ch = if self.config.fold_case {
                    byte.to_ascii_lowercase()
                } else {
                    byte
                };
                // Room was checked above.
                let _ = self.line.push(ch as char);
                echo_bytes(out, echo, &[ch]);
            }
            _ => {}
        }
        None
    }
}

fn echo_bytes(out: &mut dyn Output, echo: bool, bytes: &[u8]) {
    if echo {
        out.write(bytes);
        let _ = out.flush();
    }
}
