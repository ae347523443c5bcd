//! Real roots of `ax^2 + bx + c = 0`.
//!
//! Zero tests use plain IEEE-754 equality against `0.0`, so `-0.0` counts
//! as zero and no tolerance band is applied. A discriminant that rounds to a
//! tiny non-zero value is therefore classified as two roots (or none) rather
//! than a double root.

use std::fmt;

use tracing::debug;

use super::error::{Coefficient, SolveError};

/// The three coefficients of `ax^2 + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Fails on the first coefficient that is NaN or infinite.
    pub fn ensure_finite(&self) -> Result<(), SolveError> {
        for (coefficient, value) in [
            (Coefficient::A, self.a),
            (Coefficient::B, self.b),
            (Coefficient::C, self.c),
        ] {
            if !value.is_finite() {
                return Err(SolveError::invalid_input(coefficient, value));
            }
        }
        Ok(())
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(6);
        write!(f, "a = {:.p$}, b = {:.p$}, c = {:.p$}", self.a, self.b, self.c, p = p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// `0 = 0`: every real number is a root.
    Identity,
    NoRoots,
    /// A linear root, or the double root of a zero discriminant.
    OneRoot(f64),
    /// Distinct roots, the `+sqrt(D)` branch first.
    TwoRoots(f64, f64),
}

impl Classification {
    /// Number of reported root values; `None` for `Identity`.
    pub fn root_count(&self) -> Option<usize> {
        match self {
            Classification::Identity => None,
            Classification::NoRoots => Some(0),
            Classification::OneRoot(_) => Some(1),
            Classification::TwoRoots(..) => Some(2),
        }
    }

    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Classification::OneRoot(x) => vec![x],
            Classification::TwoRoots(x1, x2) => vec![x1, x2],
            Classification::Identity | Classification::NoRoots => Vec::new(),
        }
    }
}

pub fn solve(a: f64, b: f64, c: f64) -> Result<Classification, SolveError> {
    solve_coefficients(&Coefficients::new(a, b, c))
}

pub fn solve_coefficients(coeffs: &Coefficients) -> Result<Classification, SolveError> {
    coeffs.ensure_finite()?;
    let Coefficients { a, b, c } = *coeffs;

    let result = if a == 0.0 {
        if b == 0.0 {
            if c == 0.0 {
                Classification::Identity
            } else {
                Classification::NoRoots
            }
        } else {
            Classification::OneRoot(-c / b)
        }
    } else {
        let d = coeffs.discriminant();
        debug!(a, b, c, discriminant = d, "quadratic case");
        if d > 0.0 {
            let sqrt_d = d.sqrt();
            Classification::TwoRoots((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
        } else if d == 0.0 {
            Classification::OneRoot(-b / (2.0 * a))
        } else {
            Classification::NoRoots
        }
    };

    debug!(?result, roots = ?result.root_count(), "classified");
    Ok(result)
}
