//! Console I/O and input validation
//!
//! The prompt helpers loop until they get acceptable input. They only
//! return an error when the input stream closes or the console fails.

use std::io::{BufRead, Write};

use crate::error::{RegistryError, Result};

/// Why a line was rejected as a non-negative integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNumber {
    NotANumber,
    Negative,
    TooLarge,
}

impl InvalidNumber {
    fn message(self) -> &'static str {
        match self {
            InvalidNumber::NotANumber => "Error: please enter a valid whole number.",
            InvalidNumber::Negative => "The value must be zero or positive.",
            InvalidNumber::TooLarge => "The value is too large.",
        }
    }
}

/// Parse a non-negative integer, ignoring surrounding whitespace
pub fn parse_non_negative(input: &str) -> std::result::Result<u64, InvalidNumber> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }

    match trimmed.parse::<i128>() {
        Ok(value) if value < 0 => Err(InvalidNumber::Negative),
        Ok(_) => Err(InvalidNumber::TooLarge),
        Err(_) => Err(InvalidNumber::NotANumber),
    }
}

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, without its line terminator
    ///
    /// Lines that are not valid UTF-8 are rejected and the prompt repeats.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(RegistryError::InputClosed);
            }

            match String::from_utf8(buf) {
                Ok(mut line) => {
                    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
                    line.truncate(trimmed_len);
                    return Ok(line);
                }
                Err(_) => self.say("Error: input is not valid UTF-8 text.")?,
            }
        }
    }

    /// Read a non-blank line, re-prompting on blank input
    pub fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let text = line.trim();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
            self.say("This field cannot be empty.")?;
        }
    }

    /// Read a non-negative integer, re-prompting on anything else
    pub fn prompt_non_negative(&mut self, prompt: &str) -> Result<u64> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_non_negative(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(reason.message())?,
            }
        }
    }

    /// Write one line of output
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
