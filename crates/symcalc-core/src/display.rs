//! Pretty printer (§4.9): canonical string rendering of `Polynomial`
//! and `PolyRatio`. Assumes its argument is already simplified — this
//! module only formats, it never normalizes.

use crate::polynomial::Polynomial;
use crate::poly_ratio::PolyRatio;
use crate::term::Term;
use std::fmt;

fn fmt_terms(terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if terms.len() == 1 && terms[0].is_zero() {
        return write!(f, "0");
    }
    for (i, t) in terms.iter().enumerate() {
        if i == 0 {
            write!(f, "{t}")?;
        } else if t.coefficient.is_negative() {
            write!(f, "-{}", t.negate())?;
        } else {
            write!(f, "+{t}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree == crate::rational::Q::one() {
            return fmt_terms(&self.terms, f);
        }
        write!(f, "(")?;
        fmt_terms(&self.terms, f)?;
        write!(f, ")^({})", self.degree)
    }
}

impl fmt::Display for PolyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator_is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}) / ({})", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Q;
    use crate::variable::Variable;

    fn var(name: &str, degree: i64) -> Variable {
        Variable::new(name, Q::from_int(degree))
    }

    fn term(coeff: i64, vars: Vec<Variable>) -> Term {
        Term::new(Q::from_int(coeff), vars)
    }

    #[test]
    fn single_term_prints_bare() {
        let p = Polynomial::from_term(term(8, vec![var("x", 2)]));
        assert_eq!(p.to_string(), "8x^(2)");
    }

    #[test]
    fn negative_leading_term_prints_with_a_minus_and_no_plus() {
        let p = Polynomial::from_terms(vec![term(-1, vec![var("y", 2)]), term(-2, vec![])]);
        assert_eq!(p.to_string(), "-y^(2)-2");
    }

    #[test]
    fn positive_trailing_term_gets_a_plus_joiner() {
        let p = Polynomial::from_terms(vec![term(-2, vec![var("y", 1)]), term(1, vec![])]);
        assert_eq!(p.to_string(), "-2y+1");
    }

    #[test]
    fn non_unit_outer_degree_wraps_in_parens_with_a_caret_suffix() {
        let radicand = Polynomial::from_term(term(11, vec![Variable::new(crate::IMAGINARY_UNIT, Q::from_int(2))]));
        let root = Polynomial::new(radicand.terms, Q::new(1, 2));
        assert_eq!(root.to_string(), "(11\u{2148}^(2))^(1/2)");
    }

    #[test]
    fn ratio_with_unit_denominator_prints_numerator_only() {
        let ratio = PolyRatio::from(Polynomial::constant(Q::one()));
        assert_eq!(ratio.to_string(), "1");
    }

    #[test]
    fn ratio_with_nontrivial_denominator_prints_both_sides_parenthesized() {
        let num = Polynomial::from_terms(vec![term(-2, vec![var("y", 1)]), term(1, vec![])]);
        let den = Polynomial::from_terms(vec![term(2, vec![var("x", 1)]), term(4, vec![var("z", 1)])]);
        let ratio = PolyRatio::new(num, den);
        assert_eq!(ratio.to_string(), "(-2y+1) / (2x+4z)");
    }
}
