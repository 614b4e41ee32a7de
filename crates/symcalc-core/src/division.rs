//! Classical Euclidean long division for single-variable polynomials
//! with non-negative integer exponents (§4.6).
//!
//! This is only attempted when numerator and denominator share at
//! most one variable name, every exponent of that variable is a
//! non-negative integer, and the numerator's degree is at least the
//! divisor's. When any precondition fails, [`euclidean_divide`]
//! returns `Ok(None)` and the caller falls back to the formal ratio
//! of §4.5.

use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::poly_ratio::PolyRatio;
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;

/// Full `/` semantics of §4.6. Attempts [`euclidean_divide`] first: a
/// vanishing remainder yields the plain quotient polynomial; a
/// nonzero remainder is exposed as the mixed ratio `quotient +
/// remainder/divisor`. When the Euclidean precondition does not hold,
/// falls back to the formal ratio `numerator/denominator` of §4.5.
pub fn divide(num: &Polynomial, den: &Polynomial) -> MathResult<PolyRatio> {
    if let Some((quotient, remainder)) = euclidean_divide(num, den)? {
        if remainder.is_zero() {
            return Ok(PolyRatio::from(quotient));
        }
        let remainder_ratio = PolyRatio::new(remainder, den.simplify()?);
        return remainder_ratio.add(&PolyRatio::from(quotient));
    }
    PolyRatio::new(num.clone(), den.clone()).simplify()
}

/// Attempt classical long division, returning `(quotient, remainder)`.
pub fn euclidean_divide(num: &Polynomial, den: &Polynomial) -> MathResult<Option<(Polynomial, Polynomial)>> {
    let num = num.simplify()?;
    let den = den.simplify()?;

    if den.is_zero() {
        return Ok(None);
    }

    let mut names = num.variable_names();
    names.extend(den.variable_names());
    names.sort();
    names.dedup();
    if names.len() > 1 {
        return Ok(None);
    }
    let var_name = names.into_iter().next();

    let (Some(num_dense), Some(den_dense)) = (to_dense(&num, var_name.as_deref()), to_dense(&den, var_name.as_deref()))
    else {
        return Ok(None);
    };

    let den_degree = match highest_nonzero(&den_dense) {
        Some(d) => d,
        None => return Ok(None), // den simplified to zero after all
    };
    let num_degree = highest_nonzero(&num_dense);
    if num_degree.map(|d| d < den_degree).unwrap_or(true) {
        return Ok(None);
    }

    let (quotient_dense, remainder_dense) = long_divide(num_dense, &den_dense, den_degree);

    let quotient = from_dense(&quotient_dense, var_name.as_deref()).simplify()?;
    let remainder = from_dense(&remainder_dense, var_name.as_deref()).simplify()?;
    Ok(Some((quotient, remainder)))
}

/// Dense coefficient vector indexed by exponent, or `None` if `p`
/// uses a variable other than `var_name` or a non-integer/negative
/// exponent.
fn to_dense(p: &Polynomial, var_name: Option<&str>) -> Option<Vec<Q>> {
    let mut max_degree: i64 = 0;
    for t in &p.terms {
        match t.variables.as_slice() {
            [] => {}
            [v] if Some(v.name.as_str()) == var_name && v.degree.is_integer() && !v.degree.is_negative() => {
                max_degree = max_degree.max(v.degree.to_integer());
            }
            _ => return None,
        }
    }
    let mut coeffs = vec![Q::zero(); max_degree as usize + 1];
    for t in &p.terms {
        let exponent = match t.variables.as_slice() {
            [] => 0,
            [v] => v.degree.to_integer(),
            _ => unreachable!("validated above"),
        };
        coeffs[exponent as usize] = coeffs[exponent as usize] + t.coefficient;
    }
    Some(coeffs)
}

fn from_dense(coeffs: &[Q], var_name: Option<&str>) -> Polynomial {
    let terms: Vec<Term> = coeffs
        .iter()
        .enumerate()
        .map(|(exponent, coefficient)| {
            let variables = if exponent == 0 {
                vec![]
            } else {
                vec![Variable::new(var_name.expect("non-zero exponent implies a variable"), Q::from_int(exponent as i64))]
            };
            Term::new(*coefficient, variables)
        })
        .collect();
    Polynomial::from_terms(terms)
}

fn highest_nonzero(coeffs: &[Q]) -> Option<i64> {
    coeffs.iter().enumerate().rev().find(|(_, c)| !c.is_zero()).map(|(i, _)| i as i64)
}

fn long_divide(mut remainder: Vec<Q>, divisor: &[Q], divisor_degree: i64) -> (Vec<Q>, Vec<Q>) {
    let quotient_len = remainder.len();
    let mut quotient = vec![Q::zero(); quotient_len];
    let leading_divisor = divisor[divisor_degree as usize];

    loop {
        let Some(remainder_degree) = highest_nonzero(&remainder) else { break };
        if remainder_degree < divisor_degree {
            break;
        }
        let coefficient = remainder[remainder_degree as usize] / leading_divisor;
        let shift = (remainder_degree - divisor_degree) as usize;
        quotient[shift] = quotient[shift] + coefficient;
        for (i, d) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i] - coefficient * *d;
        }
    }

    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, degree: i64) -> Variable {
        Variable::new(name, Q::from_int(degree))
    }

    fn term(coeff: i64, vars: Vec<Variable>) -> Term {
        Term::new(Q::from_int(coeff), vars)
    }

    #[test]
    fn divides_exactly_when_remainder_is_zero() {
        // (x^2 - 1) / (x - 1) = x + 1, remainder 0
        let num = Polynomial::from_terms(vec![term(1, vec![var("x", 2)]), term(-1, vec![])]);
        let den = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(-1, vec![])]);
        let (q, r) = euclidean_divide(&num, &den).unwrap().unwrap();
        assert_eq!(q, Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]));
        assert!(r.is_zero());
    }

    #[test]
    fn divides_with_a_nonzero_remainder() {
        // (x^3 + 2x + 5) / (x + 1) = x^2 - x + 3 remainder 2
        let num = Polynomial::from_terms(vec![
            term(1, vec![var("x", 3)]),
            term(2, vec![var("x", 1)]),
            term(5, vec![]),
        ]);
        let den = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]);
        let (q, r) = euclidean_divide(&num, &den).unwrap().unwrap();
        let expected_q =
            Polynomial::from_terms(vec![term(1, vec![var("x", 2)]), term(-1, vec![var("x", 1)]), term(3, vec![])]);
        assert_eq!(q, expected_q);
        assert_eq!(r, Polynomial::constant(Q::from_int(2)));
    }

    #[test]
    fn multivariate_inputs_decline_euclidean_division() {
        let num = Polynomial::from_terms(vec![term(1, vec![var("a", 1), var("x", 1)])]);
        let den = Polynomial::from_terms(vec![term(1, vec![var("a", 1), var("x", 1)])]);
        assert_eq!(euclidean_divide(&num, &den).unwrap(), None);
    }

    #[test]
    fn numerator_degree_below_divisor_degree_declines() {
        let num = Polynomial::constant(Q::from_int(5));
        let den = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]);
        assert_eq!(euclidean_divide(&num, &den).unwrap(), None);
    }

    #[test]
    fn divide_returns_the_plain_quotient_when_the_remainder_vanishes() {
        let num = Polynomial::from_terms(vec![term(1, vec![var("x", 2)]), term(-1, vec![])]);
        let den = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(-1, vec![])]);
        let ratio = divide(&num, &den).unwrap();
        assert!(ratio.denominator_is_one());
        assert_eq!(ratio.numerator, Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]));
    }

    #[test]
    fn divide_exposes_a_nonzero_remainder_as_a_mixed_ratio() {
        // (x^3 + 2x + 5) / (x + 1) = x^2 - x + 3 remainder 2
        let num = Polynomial::from_terms(vec![
            term(1, vec![var("x", 3)]),
            term(2, vec![var("x", 1)]),
            term(5, vec![]),
        ]);
        let den = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]);
        let ratio = divide(&num, &den).unwrap();
        assert!(!ratio.denominator_is_one());
        // the mixed ratio must represent the same rational function as
        // the formal num/den quotient.
        assert_eq!(ratio, PolyRatio::new(num, den));
    }

    #[test]
    fn divide_falls_back_to_the_formal_ratio_outside_euclidean_preconditions() {
        // (ax) / (ax) = 1, two variables so Euclidean division declines
        let p = Polynomial::from_terms(vec![term(1, vec![var("a", 1), var("x", 1)])]);
        let ratio = divide(&p, &p).unwrap();
        assert!(ratio.denominator_is_one());
        assert_eq!(ratio.numerator, Polynomial::constant(Q::one()));
    }
}
