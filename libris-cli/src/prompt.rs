//! Line-oriented prompting over any reader/writer pair

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while talking to the user
#[derive(Debug, Error)]
pub enum ShellError {
    /// The input stream is exhausted
    #[error("end of input")]
    EndOfInput,

    /// A numeric answer could not be parsed
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink for messages
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `label` and read one line, without its line terminator
    pub fn ask(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        // invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Print `label` and parse the answer as a number
    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<T, ShellError> {
        let answer = self.ask(label)?;
        let answer = answer.trim();
        answer
            .parse()
            .map_err(|_| ShellError::InvalidNumber(answer.to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
