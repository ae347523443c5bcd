//! src/commands/session.rs
//! The interactive dialogue: read a, b, c, print the roots, offer the self-test.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use super::input::TokenReader;
use super::selftest;
use crate::config::Config;
use crate::core::{formatter, solve_coefficients};

pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, cfg: &Config) -> Result<()> {
    let mut reader = TokenReader::new(input);

    writeln!(out, "{}", "This is quadratic equation solver!".bold())?;
    writeln!(out, "Please, input a, b, c")?;
    out.flush()?;

    let coeffs = reader.read_coefficients(out)?;
    let result = solve_coefficients(&coeffs)?;
    writeln!(out, "{}", formatter::render(&result, cfg.output.precision))?;

    writeln!(out, "Would you like to see our unit tests? (1 or 0) ")?;
    out.flush()?;
    match reader.read_integer(out)? {
        0 => writeln!(out, "OK! Goodbye!")?,
        1 => {
            writeln!(out, "OK! Let`s start")?;
            selftest::run(&cfg.selftest, cfg.output.precision, out)?;
        }
        _ => writeln!(out, "I don`t understand you")?,
    }
    Ok(())
}
