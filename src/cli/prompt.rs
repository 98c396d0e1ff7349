//! Line-by-line question and answer over any reader and writer.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use rescue::InvalidInputError;
use tracing::debug;

use super::session::CommandError;

/// How many times a number is asked for before the command is abandoned.
const NUMBER_ATTEMPTS: usize = 3;

/// Failure to obtain an answer at all.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input stream ended.
    #[error("end of input")]
    Closed,
    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Asks questions on `output` and reads the answers from `input`.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Asks a question and returns the answer without its line ending.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 are replaced rather than ending the session.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let line = String::from_utf8_lossy(&line);
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_string())
    }

    /// Asks for a number, re-asking after an invalid answer.
    ///
    /// Gives up with [`InvalidInputError::Number`] after
    /// [`NUMBER_ATTEMPTS`] invalid answers.
    pub fn ask_number<T: FromStr>(
        &mut self,
        question: &str,
        field: &'static str,
    ) -> Result<T, CommandError> {
        self.ask_parsed(question, field, |_: &T| true)
    }

    /// Asks for a finite, non-negative measurement such as a weight or a
    /// length.
    ///
    /// "NaN", "inf" and negative values are treated as invalid numbers.
    pub fn ask_measurement(
        &mut self,
        question: &str,
        field: &'static str,
    ) -> Result<f32, CommandError> {
        self.ask_parsed(question, field, |value: &f32| {
            value.is_finite() && *value >= 0.0
        })
    }

    fn ask_parsed<T: FromStr>(
        &mut self,
        question: &str,
        field: &'static str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T, CommandError> {
        let mut attempt = 1;
        loop {
            let answer = self.ask(question)?;
            match answer.trim().parse::<T>().ok().filter(|value| accept(value)) {
                Some(value) => return Ok(value),
                None if attempt < NUMBER_ATTEMPTS => {
                    debug!(field, answer = %answer, attempt, "invalid number");
                    self.say("Please enter a valid number.")?;
                    attempt += 1;
                }
                None => {
                    return Err(InvalidInputError::Number {
                        field,
                        value: answer,
                    }
                    .into());
                }
            }
        }
    }

    /// Asks a yes/no question. Only "yes" (ignoring case) counts as yes.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        Ok(self.ask(question)?.trim().eq_ignore_ascii_case("yes"))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
