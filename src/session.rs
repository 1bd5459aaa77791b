use crate::commands::CommandRegistry;
use crate::context::{Context, Output, default_quit};
use crate::dispatch::dispatch;
use crate::editor::{EditorConfig, LineEditor, LineEvent};
use crate::queue::ByteQueue;
use crate::tokenizer::tokenize;
use crate::{ARGV_NUM, Error, LINE_MAX, MSG_LINE_TOO_LONG, MSG_TOO_MANY_ARGUMENTS, NEWLINE, PROMPT};

/// Construction-time settings of a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    /// Printed followed by `>` before every line.
    pub prompt: &'a str,
    /// Initial echo state; the `echo` built-in changes it later.
    pub echo: bool,
    pub editor: EditorConfig,
}

impl Config<'static> {
    pub const fn new() -> Self {
        Self {
            prompt: PROMPT,
            echo: true,
            editor: EditorConfig::new(),
        }
    }
}

impl Default for Config<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// One interpreter instance: reads bytes from a [`ByteQueue`] of `N` bytes,
/// edits lines of up to `L - 1` characters, splits them into at most `A`
/// tokens and runs them against an optional [`CommandRegistry`].
///
/// Drive it by calling [`Session::pump`] from one thread; feed bytes from one
/// other context through the queue.
pub struct Session<'a, O: Output, const N: usize, const L: usize = LINE_MAX, const A: usize = ARGV_NUM> {
    queue: &'a ByteQueue<N>,
    editor: LineEditor<L>,
    output: O,
    echo: bool,
    prompt: &'a str,
    prompt_shown: bool,
    on_quit: Option<&'a mut dyn FnMut()>,
    registry: Option<&'a CommandRegistry<'a>>,
}

impl<'a, O: Output, const N: usize, const L: usize, const A: usize> Session<'a, O, N, L, A> {
    pub fn new(queue: &'a ByteQueue<N>, output: O, registry: Option<&'a CommandRegistry<'a>>) -> Self {
        Self::with_config(queue, output, registry, Config::new())
    }

    pub fn with_config(
        queue: &'a ByteQueue<N>,
        output: O,
        registry: Option<&'a CommandRegistry<'a>>,
        config: Config<'a>,
    ) -> Self {
        Self {
            queue,
            editor: LineEditor::new(config.editor),
            output,
            echo: config.echo,
            prompt: config.prompt,
            prompt_shown: false,
            on_quit: None,
            registry,
        }
    }

    /// Install the callback run by `quit`; `None` restores the default,
    /// which exits the process on hosted builds.
    pub fn register_quit(&mut self, callback: Option<&'a mut dyn FnMut()>) {
        self.on_quit = callback;
    }

    /// Queue one input byte, handing it back on success.
    pub fn put_char(&self, byte: u8) -> Result<u8, Error> {
        self.queue.put(byte).map(|()| byte)
    }

    pub fn put_str(&self, text: &str) -> Result<(), Error> {
        self.queue.put_str(text)
    }

    /// Process whatever input is queued, handling at most one line.
    ///
    /// Never blocks: returns as soon as the queue is empty or one line has
    /// been handled. The prompt is printed on the first call and again after
    /// every handled line.
    pub fn pump(&mut self) {
        if !self.prompt_shown {
            self.show_prompt();
        }

        let Some(event) = self.editor.poll(self.queue, &mut self.output, self.echo) else {
            return;
        };
        match event {
            LineEvent::Complete => self.run_line(),
            LineEvent::Overflow => {
                error!("{}: kept first {} characters", Error::LineTooLong, L - 1);
                self.output.write(NEWLINE);
                self.output.write(MSG_LINE_TOO_LONG);
            }
            LineEvent::Cancelled => {}
        }
        self.show_prompt();
    }

    fn show_prompt(&mut self) {
        self.output.write(self.prompt.as_bytes());
        self.output.write(b">");
        let _ = self.output.flush();
        self.prompt_shown = true;
    }

    fn run_line(&mut self) {
        let argv = match tokenize::<A>(self.editor.line()) {
            Ok(argv) => argv,
            Err(_) => {
                warn!("more than {} arguments", A);
                self.output.write(MSG_TOO_MANY_ARGUMENTS);
                return;
            }
        };
        if argv.is_empty() {
            return;
        }
        debug!("dispatching {} tokens", argv.len());

        let mut fallback = default_quit;
        let quit: &mut dyn FnMut() = match self.on_quit.as_mut() {
            Some(callback) => &mut **callback,
            None => &mut fallback,
        };
        let mut ctx = Context::new(&mut self.output, &mut self.echo, quit, self.registry);
        let _ = dispatch(&mut ctx, &argv);
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    /// The line being edited, or the last one finished. Handlers must not
    /// hold on to it; it is overwritten once the next line starts.
    pub fn line(&self) -> &str {
        self.editor.line()
    }

    pub fn queue(&self) -> &'a ByteQueue<N> {
        self.queue
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
