//! Error types for the algebra core
//!
//! Mirrors the hand-written `MathError` style used throughout this
//! lineage: a plain enum with struct-like variants, a manual
//! `Display` impl, and `std::error::Error`. No panics escape the
//! public API on malformed-but-well-typed input; the caller always
//! gets a `MathResult`.

use std::fmt;

/// All error conditions the algebra core can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A `PolyRatio` denominator normalized to the zero polynomial.
    DivisionByZero,

    /// `solve` was asked to find roots of a polynomial with no
    /// variables and no explicit target was given.
    NoVariableToSolveFor,

    /// `solve` was asked to find roots of a polynomial whose degree
    /// (in the distinguished variable) exceeds 2.
    UnsupportedDegree { degree: u32 },

    /// `simplify` was asked to resolve `0^0`.
    ZeroToZerothPower,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "ERROR: Division by zero!"),
            MathError::NoVariableToSolveFor => {
                write!(f, "cannot solve: polynomial has no variables")
            }
            MathError::UnsupportedDegree { degree } => {
                write!(f, "cannot solve: unsupported degree {degree} (only 1 and 2 are supported)")
            }
            MathError::ZeroToZerothPower => write!(f, "0^0 is undefined"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result alias used throughout the algebra core.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_renders_the_printer_sentinel() {
        assert_eq!(MathError::DivisionByZero.to_string(), "ERROR: Division by zero!");
    }

    #[test]
    fn unsupported_degree_names_the_degree() {
        let err = MathError::UnsupportedDegree { degree: 3 };
        assert!(err.to_string().contains('3'));
    }
}
