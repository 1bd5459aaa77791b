#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Heap-free command line interpreter for serial consoles.
//!
//! Bytes arrive through a [`ByteQueue`] (usually filled from an interrupt
//! handler or a reader thread), and the host calls [`Session::pump`] from its
//! main loop. Each pump edits the current line, and once a line is complete
//! it is tokenized and dispatched against a static [`CommandRegistry`].

#[macro_use]
mod fmt;

pub mod commands;
pub mod context;
pub mod dispatch;
pub mod editor;
pub mod queue;
pub mod session;
pub mod tokenizer;

// Common error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The input queue has no room for another byte.
    QueueFull,
    /// The line exceeded `LINE_MAX - 1` characters.
    LineTooLong,
    /// The line holds more tokens than the argument vector can take.
    TooManyArguments,
    /// Neither a built-in nor a registered command matched.
    UnknownCommand,
    /// A handler reported failure.
    HandlerFailed,
    /// A handler was called with a wrong argument count or value.
    InvalidArgument,
    /// The output sink failed to flush.
    Flush,
}

// Common constants
pub const INPUT_BUF_SIZE: usize = 128;
pub const LINE_MAX: usize = 64;
pub const ARGV_NUM: usize = 8;
pub const PROMPT: &str = "ucli>";
pub const NEWLINE: &[u8] = b"\r\n";

// Protocol strings, matched byte for byte by host tooling
pub const MSG_OK: &[u8] = b"Ok\r\n";
pub const MSG_ERROR: &[u8] = b"Error\r\n";
pub const MSG_UNKNOWN_COMMAND: &[u8] = b"Unknown command\r\n";
pub const MSG_TOO_MANY_ARGUMENTS: &[u8] =
    b"Error: The number of arguments exceeds maximum of CLI_ARGV_NUM\r\n";
pub const MSG_LINE_TOO_LONG: &[u8] =
    b"Error: The line length exceeds maximum of CLI_LINE_MAX\r\n";

pub use commands::{Command, CommandGroup, CommandRegistry, CommandResult, Handler, Visit};
pub use context::{Context, Output};
#[cfg(feature = "std")]
pub use context::StdOutput;
pub use editor::{CancelStyle, EditorConfig, LineEditor, LineEvent};
pub use queue::ByteQueue;
pub use session::{Config, Session};
pub use tokenizer::tokenize;
