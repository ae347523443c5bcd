//! src/commands/input.rs
//! Whitespace-token reader that re-prompts on malformed numbers.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::trace;

use crate::core::Coefficients;

pub const RETRY_MESSAGE: &str = "Incorrect input. Please, try again ";

#[derive(Debug)]
pub enum InputError {
    /// Input ended before a complete value was read.
    UnexpectedEof,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnexpectedEof => write!(f, "Input Error: unexpected end of input"),
            InputError::Io(e) => write!(f, "IO Error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::UnexpectedEof => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Tokens left over on a line stay queued for the next read.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pending: VecDeque::new() }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drops whatever is left of the current line.
    fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Reads `n` values; a bad token restarts the whole group.
    fn read_values<T: FromStr, W: Write>(&mut self, n: usize, out: &mut W) -> Result<Vec<T>, InputError> {
        let mut values = Vec::with_capacity(n);
        while values.len() < n {
            let tok = self.next_token()?;
            match tok.parse::<T>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    trace!(token = %tok, "rejected token");
                    values.clear();
                    self.discard_line();
                    writeln!(out, "{}", RETRY_MESSAGE)?;
                }
            }
        }
        Ok(values)
    }

    pub fn read_coefficients<W: Write>(&mut self, out: &mut W) -> Result<Coefficients, InputError> {
        let v: Vec<f64> = self.read_values(3, out)?;
        Ok(Coefficients::new(v[0], v[1], v[2]))
    }

    pub fn read_integer<W: Write>(&mut self, out: &mut W) -> Result<i64, InputError> {
        let v: Vec<i64> = self.read_values(1, out)?;
        Ok(v[0])
    }
}
