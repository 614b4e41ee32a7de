//! `Variable`: a named symbol raised to a rational exponent.
//!
//! A variable never exists outside a [`crate::term::Term`]; it carries
//! no lifecycle of its own beyond `Clone`/`Eq`.

use crate::rational::Q;
use std::fmt;

/// A single-letter (ASCII) variable name, or the imaginary-unit
/// sentinel [`crate::IMAGINARY_UNIT`], raised to a rational degree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub degree: Q,
}

impl Variable {
    pub fn new(name: impl Into<String>, degree: Q) -> Self {
        Variable { name: name.into(), degree }
    }

    /// A variable to the first power, the common case built by the
    /// AST builder for a bare `var` token.
    pub fn linear(name: impl Into<String>) -> Self {
        Variable::new(name, Q::one())
    }

    pub fn is_imaginary_unit(&self) -> bool {
        self.name == crate::IMAGINARY_UNIT
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree == Q::one() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}^({})", self.name, self.degree)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_variable_prints_bare() {
        assert_eq!(Variable::linear("x").to_string(), "x");
    }

    #[test]
    fn non_unit_degree_prints_with_caret() {
        assert_eq!(Variable::new("x", Q::from_int(2)).to_string(), "x^(2)");
        assert_eq!(Variable::new("x", Q::new(1, 2)).to_string(), "x^(1/2)");
    }
}
