use std::fmt;

/// Which coefficient of `ax^2 + bx + c` an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::A => write!(f, "a"),
            Coefficient::B => write!(f, "b"),
            Coefficient::C => write!(f, "c"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A coefficient was NaN or infinite.
    InvalidInput { coefficient: Coefficient, value: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidInput { coefficient, value } => {
                write!(f, "Invalid Input: coefficient {} must be finite, got {}", coefficient, value)
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl SolveError {
    pub fn invalid_input(coefficient: Coefficient, value: f64) -> Self {
        SolveError::InvalidInput { coefficient, value }
    }
}
