// src/core/formatter.rs
//! Human-readable messages for a solved equation.

use super::solver::Classification;

pub const DEFAULT_PRECISION: usize = 6;

pub fn render(result: &Classification, precision: usize) -> String {
    let p = precision;
    match *result {
        Classification::NoRoots => "No roots!".to_string(),
        Classification::OneRoot(x) => format!("{x:.p$} is the only root of the given equation"),
        Classification::TwoRoots(x1, x2) => {
            format!("{x1:.p$}, {x2:.p$} are roots of the given equation")
        }
        Classification::Identity => "Ooh! Infinite number of roots!".to_string(),
    }
}
