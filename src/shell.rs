//! An interactive, menu-driven shell over an integer stack.
//!
//! The shell reads one selection per line, either a menu number or an
//! operation label (`push`, `pop`, `top`, `getMin`, `getMax`, `exit`). Failed
//! operations are reported and the loop continues; it only ends on `exit` or
//! at the end of the input.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{ExtremaStack, Operation};

/// Settings of a [`Shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// The value pushed when the user submits an empty line.
    pub default_value: i64,
    /// Repeat each input line after its prompt.
    ///
    /// Useful when the input is not typed at a terminal, so that the output
    /// reads as a transcript.
    pub echo: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_value: 5,
            echo: false,
        }
    }
}

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Run(Operation),
    Exit,
}

impl Choice {
    /// Parse a menu number or label. Labels are case-insensitive.
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return match n {
                1..=5 => Some(Choice::Run(Operation::ALL[n - 1])),
                6 => Some(Choice::Exit),
                _ => None,
            };
        }
        if input.eq_ignore_ascii_case("exit") {
            return Some(Choice::Exit);
        }
        Operation::ALL
            .into_iter()
            .find(|op| input.eq_ignore_ascii_case(&op.to_string()))
            .map(Choice::Run)
    }
}

/// A line-oriented shell reading from `R` and writing to `W`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given input and output.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the shell, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the shell on `stack` until `exit` or the end of the input.
    pub fn run<S>(&mut self, stack: &mut S) -> io::Result<()>
    where
        S: ExtremaStack<i64> + ?Sized,
    {
        self.print_menu()?;
        while let Some(line) = self.prompt("Operation")? {
            if line.is_empty() {
                continue;
            }
            let op = match Choice::parse(&line) {
                Some(Choice::Run(op)) => op,
                Some(Choice::Exit) => break,
                None => {
                    warn!(input = %line, "unknown operation");
                    writeln!(self.output, "Unknown operation: {line}")?;
                    self.print_menu()?;
                    continue;
                }
            };
            debug!(%op, len = stack.len(), "executing operation");

            let result = match op {
                Operation::Push => {
                    if !self.push(stack)? {
                        break;
                    }
                    continue;
                }
                Operation::Pop => stack.pop().map(|v| ("Popped:", v)),
                Operation::Top => stack.top().map(|&v| ("Top element:", v)),
                Operation::Min => stack.min().map(|&v| ("Min element:", v)),
                Operation::Max => stack.max().map(|&v| ("Max element:", v)),
            };
            match result {
                Ok((label, value)) => writeln!(self.output, "> {label} {value}")?,
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    /// Prompt for a value and push it.
    ///
    /// Returns `false` if the input ended before a value was given.
    fn push<S>(&mut self, stack: &mut S) -> io::Result<bool>
    where
        S: ExtremaStack<i64> + ?Sized,
    {
        let label = format!("Enter your value [{}]", self.config.default_value);
        let Some(line) = self.prompt(&label)? else {
            return Ok(false);
        };
        let value = if line.is_empty() {
            Ok(self.config.default_value)
        } else {
            line.parse::<i64>()
        };
        match value {
            Ok(value) => {
                stack.push(value);
                writeln!(self.output, "> Pushed!")?;
            }
            Err(err) => {
                warn!(input = %line, %err, "rejected push value");
                writeln!(self.output, "Invalid input: {err}")?;
            }
        }
        Ok(true)
    }

    /// Write `label` and read one trimmed line, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "< {label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = line.trim().to_string();
        if self.config.echo {
            writeln!(self.output, "{line}")?;
        }
        Ok(Some(line))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Select an operation:")?;
        for (i, op) in Operation::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {op}", i + 1)?;
        }
        writeln!(self.output, "  {}) exit", Operation::ALL.len() + 1)
    }
}
