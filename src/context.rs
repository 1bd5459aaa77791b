use crate::Error;
use crate::commands::CommandRegistry;

/// Byte sink the interpreter writes prompts, echo and responses to.
pub trait Output {
    /// Write `bytes`, returning how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> usize;

    fn flush(&mut self) -> Result<(), Error>;
}

impl<T: Output + ?Sized> Output for &mut T {
    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }

    fn flush(&mut self) -> Result<(), Error> {
        (**self).flush()
    }
}

/// Capture buffer; bytes past the capacity are dropped.
impl<const N: usize> Output for heapless::Vec<u8, N> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let room = N - self.len();
        let n = bytes.len().min(room);
        // Cannot fail, `n` fits in the remaining capacity.
        let _ = self.extend_from_slice(&bytes[..n]);
        n
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Standard output, the default sink on hosted targets.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOutput;

#[cfg(feature = "std")]
impl Output for StdOutput {
    fn write(&mut self, bytes: &[u8]) -> usize {
        use std::io::Write;
        std::io::stdout().write(bytes).unwrap_or(0)
    }

    fn flush(&mut self) -> Result<(), Error> {
        use std::io::Write;
        std::io::stdout().flush().map_err(|_| Error::Flush)
    }
}

/// Quit action used when the embedder registered none.
pub(crate) fn default_quit() {
    info!("quit requested");
    #[cfg(feature = "std")]
    std::process::exit(0);
    #[cfg(not(feature = "std"))]
    warn!("no quit callback registered, ignoring");
}

/// What a command handler gets to work with while it runs.
///
/// Borrowed from the session for the duration of one handler call.
pub struct Context<'c> {
    output: &'c mut dyn Output,
    echo: &'c mut bool,
    quit: &'c mut dyn FnMut(),
    registry: Option<&'c CommandRegistry<'c>>,
}

impl<'c> Context<'c> {
    pub fn new(
        output: &'c mut dyn Output,
        echo: &'c mut bool,
        quit: &'c mut dyn FnMut(),
        registry: Option<&'c CommandRegistry<'c>>,
    ) -> Self {
        Self {
            output,
            echo,
            quit,
            registry,
        }
    }

    pub fn write(&mut self, bytes: &[u8]) -> usize {
        self.output.write(bytes)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output.flush()
    }

    pub fn echo(&self) -> bool {
        *self.echo
    }

    pub fn set_echo(&mut self, on: bool) {
        *self.echo = on;
    }

    /// The session's command table, if it has one.
    pub fn registry(&self) -> Option<&'c CommandRegistry<'c>> {
        self.registry
    }

    /// Run the session's quit callback.
    pub fn quit(&mut self) {
        (self.quit)()
    }
}

impl core::fmt::Write for Context<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.output.write(s.as_bytes()) == s.len() {
            Ok(())
        } else {
            Err(core::fmt::Error)
        }
    }
}
