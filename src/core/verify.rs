//! Substitution checks for reported roots.

use super::solver::{Classification, Coefficients};

/// `ax^2 + bx + c` evaluated at `x`.
pub fn parabola(coeffs: &Coefficients, x: f64) -> f64 {
    coeffs.a * x * x + coeffs.b * x + coeffs.c
}

/// True only when substitution gives exactly zero.
pub fn is_root(coeffs: &Coefficients, x: f64) -> bool {
    parabola(coeffs, x) == 0.0
}

/// Checks every root a classification reports. `NoRoots` and `Identity`
/// carry nothing to substitute and always pass.
pub fn check(coeffs: &Coefficients, result: &Classification) -> bool {
    result.roots().into_iter().all(|x| is_root(coeffs, x))
}
