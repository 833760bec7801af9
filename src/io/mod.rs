//! Input/output abstractions
//!
//! The console loop talks to the player only through these traits so
//! tests can script a session and capture everything it prints.

use std::io::{self, Write};

/// Source of player commands, one line at a time
pub trait InputReader {
    /// Show `prompt` and read the next line.
    ///
    /// Returns an `UnexpectedEof` error once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Sink for everything shown to the player
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// Plays the game on stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")),
            _ => Ok(line),
        }
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Scripted player and captured screen for driving the console loop.
///
/// Available to this crate's unit tests and, through the `test-utils`
/// feature, to its integration tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Hands out scripted lines, then reports EOF. Records every prompt.
    pub struct MockInput {
        lines: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl MockInput {
        pub fn new(lines: Vec<&str>) -> Self {
            Self {
                lines: lines.into_iter().map(String::from).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
            self.prompts.push(prompt.to_string());
            self.lines
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    /// Captures every line written
    #[derive(Default)]
    pub struct MockOutput {
        pub lines: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Captured output, one line per entry, newline-terminated
        pub fn text(&self) -> String {
            self.lines.iter().map(|l| format!("{}\n", l)).collect()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }
}
