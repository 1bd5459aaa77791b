//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use pico_cli::{Command, CommandResult, Context, Error, Output};

/// Output sink that keeps everything written to it.
#[derive(Default)]
pub struct Capture {
    pub data: Vec<u8>,
    pub flushes: usize,
}

impl Capture {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Output for Capture {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.data.extend_from_slice(bytes);
        bytes.len()
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Pins a closure to the handler signature.
pub fn handler<F>(f: F) -> F
where
    F: Fn(&mut Context<'_>, &[&str]) -> CommandResult + Sync,
{
    f
}

/// Records every argv a handler was called with.
#[derive(Default)]
pub struct Calls(Mutex<Vec<Vec<String>>>);

impl Calls {
    pub fn record(&self, argv: &[&str]) {
        self.0
            .lock()
            .unwrap()
            .push(argv.iter().map(|s| s.to_string()).collect());
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Vec<String>> {
        self.0.lock().unwrap().last().cloned()
    }
}

pub fn mcu_commands<'a>(h: &'a (dyn pico_cli::Handler + 'a)) -> [Command<'a>; 2] {
    [
        Command::new("reset", "[NUM]. Reset the mcu after NUM seconds", h),
        Command::new("sleep", "[NUM]. Put mcu in sleep mode for NUM seconds", h),
    ]
}
