pub mod error;
pub mod formatter;
pub mod solver;
pub mod verify;

pub use error::{Coefficient, SolveError};
pub use solver::{solve, solve_coefficients, Classification, Coefficients};
