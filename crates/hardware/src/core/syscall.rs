//! Syscall Console.
//!
//! `syscall` services 1 (print integer) and 5 (read integer) talk to the outside world
//! through the [`Console`] trait. It provides:
//! 1. **StreamConsole:** Any reader/writer pair; `StreamConsole::stdio` binds stdin/stdout.
//! 2. **ScriptedConsole:** Queued inputs and captured outputs, for tests and embedding.

use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Integer I/O used by `syscall`.
pub trait Console {
    /// Emits one integer (service 1).
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the value cannot be written.
    fn print_int(&mut self, value: i32) -> io::Result<()>;

    /// Obtains one integer (service 5).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if input is exhausted or the next token is not an integer.
    fn read_int(&mut self) -> io::Result<i32>;
}

/// Console over a buffered reader and a writer.
///
/// Printed values go one per line. Reads consume one whitespace-delimited token at a time,
/// so several integers may be supplied on a single input line.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
    prompt: String,
    pending: VecDeque<String>,
}

impl StreamConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(prompt: impl Into<String>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), prompt)
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over `input` and `output`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Written to `output` (and flushed) before every read.
    pub fn new(input: R, output: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            prompt: prompt.into(),
            pending: VecDeque::new(),
        }
    }

    /// Consumes the console, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input exhausted",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn print_int(&mut self, value: i32) -> io::Result<()> {
        writeln!(self.output, "{value}")?;
        self.output.flush()
    }

    fn read_int(&mut self) -> io::Result<i32> {
        self.output.write_all(self.prompt.as_bytes())?;
        self.output.flush()?;
        let token = self.next_token()?;
        token.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected an integer, got {token:?}"),
            )
        })
    }
}

/// Console that replays queued inputs and records printed values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedConsole {
    inputs: VecDeque<i32>,
    outputs: Vec<i32>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `inputs`, in order.
    pub fn new(inputs: impl IntoIterator<Item = i32>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    /// Values printed so far.
    pub fn outputs(&self) -> &[i32] {
        &self.outputs
    }

    /// Inputs not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn print_int(&mut self, value: i32) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }

    fn read_int(&mut self) -> io::Result<i32> {
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left")
        })
    }
}
