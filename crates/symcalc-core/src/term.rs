//! `Term`: a coefficient times a product of variables with rational
//! exponents.

use crate::rational::Q;
use crate::variable::Variable;
use std::fmt;

/// A monomial: `coefficient * v1^d1 * v2^d2 * ...`.
///
/// `variables` is not assumed canonical until [`Term::canonicalize`]
/// has been called; arithmetic routines build terms by straight
/// concatenation and rely on the polynomial-level `simplify` to
/// restore canonical form.
#[derive(Debug, Clone)]
pub struct Term {
    pub coefficient: Q,
    pub variables: Vec<Variable>,
}

impl Term {
    pub fn new(coefficient: Q, variables: Vec<Variable>) -> Self {
        Term { coefficient, variables }
    }

    pub fn constant(coefficient: Q) -> Self {
        Term { coefficient, variables: Vec::new() }
    }

    pub fn zero() -> Self {
        Term::constant(Q::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Sort variables by name, merge equal names by summing degree,
    /// and drop any variable whose degree becomes zero.
    ///
    /// This is the per-term half of step 2 of
    /// [`crate::polynomial::Polynomial::simplify`]; it never touches
    /// the coefficient.
    pub fn canonicalize(&self) -> Term {
        let mut merged: Vec<Variable> = Vec::with_capacity(self.variables.len());
        for v in &self.variables {
            if let Some(existing) = merged.iter_mut().find(|e: &&mut Variable| e.name == v.name) {
                existing.degree = existing.degree + v.degree;
            } else {
                merged.push(v.clone());
            }
        }
        merged.retain(|v| !v.degree.is_zero());
        merged.sort_by(|a, b| a.name.cmp(&b.name));
        Term { coefficient: self.coefficient, variables: merged }
    }

    /// Multiply two terms: coefficients multiply, variable lists
    /// concatenate. The result is not yet canonicalized.
    pub fn multiply(&self, other: &Term) -> Term {
        let mut variables = self.variables.clone();
        variables.extend(other.variables.iter().cloned());
        Term::new(self.coefficient * other.coefficient, variables)
    }

    pub fn negate(&self) -> Term {
        Term::new(-self.coefficient, self.variables.clone())
    }

    /// Sort key used by [`crate::polynomial::Polynomial::simplify`]
    /// ordering: the leading variable's degree (descending), then the
    /// full lexicographic `(name, degree)` tuple list as a tiebreak.
    ///
    /// Expects `self` to already be canonical.
    pub fn order_key(&self) -> (std::cmp::Reverse<Q>, Vec<(String, Q)>) {
        let leading = self.variables.first().map(|v| v.degree).unwrap_or(Q::zero());
        let tuple = self.variables.iter().map(|v| (v.name.clone(), v.degree)).collect();
        (std::cmp::Reverse(leading), tuple)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let a = self.canonicalize();
        let b = other.canonicalize();
        a.coefficient == b.coefficient && a.variables == b.variables
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canon = self.canonicalize();
        if canon.variables.is_empty() {
            return write!(f, "{}", canon.coefficient);
        }
        if canon.coefficient == Q::one() {
            // omitted
        } else if canon.coefficient == -Q::one() {
            write!(f, "-")?;
        } else {
            write!(f, "{}", canon.coefficient)?;
        }
        for v in &canon.variables {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
