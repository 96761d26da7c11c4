//! Interactive operator prompts
//!
//! Prompting sits behind a trait so the pipeline and template installation can
//! be driven by scripted answers in tests, and so `--yes` runs can substitute
//! an auto-confirming implementation.

use crate::io::error::{Result, invalid_parameter};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Operator interaction surface for confirmations and numeric input
pub trait Prompter {
    /// Ask for a positive integer, reprompting until one is provided
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream is closed or unreadable.
    fn positive_integer(&mut self, message: &str) -> Result<u32>;

    /// Ask a yes/no question; an answer counts as yes iff it starts with `y`
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream is closed or unreadable.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Display a message and wait for any acknowledgment
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream is closed or unreadable.
    fn acknowledge(&mut self, message: &str) -> Result<()>;
}

/// Parse a positive integer from one input line
///
/// Returns `None` for non-numeric or non-positive input, which callers treat
/// as a reprompt.
pub fn parse_positive_integer(line: &str) -> Option<u32> {
    match line.trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => None,
    }
}

/// Parse a yes/no answer from one input line
///
/// Any answer starting with `y` or `Y` is yes; any other nonempty answer is
/// no. Empty input returns `None`, which callers treat as a reprompt.
pub fn parse_confirmation(line: &str) -> Option<bool> {
    let first = line.trim().chars().next()?;
    Some(first.eq_ignore_ascii_case(&'y'))
}

/// Prompter over a generic line reader and writer
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a prompter over the given reader and writer
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(invalid_parameter(
                "input",
                &"<eof>",
                &"input stream closed while awaiting a response",
            ));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn positive_integer(&mut self, message: &str) -> Result<u32> {
        loop {
            let line = self.ask(message)?;
            if let Some(value) = parse_positive_integer(&line) {
                return Ok(value);
            }
            writeln!(
                self.writer,
                "The number must be a positive integer. Please try again."
            )?;
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            let line = self.ask(&format!("{message} (yes/no): "))?;
            if let Some(answer) = parse_confirmation(&line) {
                return Ok(answer);
            }
        }
    }

    fn acknowledge(&mut self, message: &str) -> Result<()> {
        self.ask(&format!("{message} Press Enter to retry."))?;
        Ok(())
    }
}

/// Prompter reading from stdin and writing to stdout
pub type ConsolePrompter = LinePrompter<BufReader<Stdin>, Stdout>;

/// Build the interactive console prompter
pub fn console() -> ConsolePrompter {
    LinePrompter::new(BufReader::new(std::io::stdin()), std::io::stdout())
}

/// Non-interactive prompter for `--yes` runs: every confirmation is yes
///
/// Prompts that exist to pause for operator intervention have no meaningful
/// non-interactive answer, so `acknowledge` fails instead of letting the
/// caller's retry loop spin with nobody at the keyboard.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn positive_integer(&mut self, _message: &str) -> Result<u32> {
        Err(invalid_parameter(
            "cards",
            &"<none>",
            &"a card count must be supplied on the command line in non-interactive mode",
        ))
    }

    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }

    fn acknowledge(&mut self, message: &str) -> Result<()> {
        Err(invalid_parameter(
            "yes",
            &"<non-interactive>",
            &format!("operator intervention is required but cannot be awaited: {message}"),
        ))
    }
}
