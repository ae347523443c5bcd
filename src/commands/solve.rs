//! src/commands/solve.rs
//! One-shot, non-interactive solve.

use std::io::Write;

use anyhow::Result;

use crate::core::{formatter, solve, Classification};

pub fn main<W: Write>(a: f64, b: f64, c: f64, precision: usize, out: &mut W) -> Result<Classification> {
    let result = solve(a, b, c)?;
    writeln!(out, "{}", formatter::render(&result, precision))?;
    Ok(result)
}
