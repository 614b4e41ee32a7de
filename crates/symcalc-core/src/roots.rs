//! Root finder for linear and quadratic polynomials in one
//! distinguished variable (§4.8).

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;
use crate::poly_ratio::PolyRatio;
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;

/// The outcome of solving `P(v) = 0` for the distinguished variable.
#[derive(Debug, Clone)]
pub enum RootsOutcome {
    /// One entry per root, each a list of `PolyRatio` summands — two
    /// summands for the irrational/complex case so the printer can
    /// join them with `+` on one line, one summand otherwise.
    Roots(Vec<Vec<PolyRatio>>),
    /// Degree 0, nonzero constant: the equation has no solutions.
    NoRoots,
    /// Degree 0, zero constant: every value of every variable
    /// satisfies the equation.
    AllValuesAreRoots,
}

/// Solve `p = 0` for `var_name`, or for the polynomial's sole variable
/// if `var_name` is `None`. Mirrors `find_sym_coeff` from §4.8: the
/// coefficient of `v^d` is the sum, over every term whose `v`-exponent
/// is exactly `d`, of that term with `v` divided out.
pub fn roots(p: &Polynomial, var_name: Option<&str>) -> MathResult<RootsOutcome> {
    let p = p.simplify()?;

    let var_name = match var_name {
        Some(name) => name.to_string(),
        None => {
            let names = p.variable_names();
            names.into_iter().next().ok_or(MathError::NoVariableToSolveFor)?
        }
    };

    let max_degree = p
        .terms
        .iter()
        .filter_map(|t| t.variables.iter().find(|v| v.name == var_name))
        .filter(|v| v.degree.is_integer() && !v.degree.is_negative())
        .map(|v| v.degree.to_integer())
        .max()
        .unwrap_or(0);
    if max_degree > 2 {
        return Err(MathError::UnsupportedDegree { degree: max_degree as u32 });
    }

    let a = coefficient_of_power(&p, &var_name, 2)?;
    let b = coefficient_of_power(&p, &var_name, 1)?;
    let c = coefficient_of_power(&p, &var_name, 0)?;

    let degree = if !a.is_zero() {
        2
    } else if !b.is_zero() {
        1
    } else {
        0
    };

    match degree {
        1 => {
            let root = PolyRatio::new(c.negate(), b).cancel()?;
            Ok(RootsOutcome::Roots(vec![vec![root]]))
        }
        2 => Ok(RootsOutcome::Roots(quadratic_roots(&a, &b, &c)?)),
        _ => {
            if c.is_zero() {
                Ok(RootsOutcome::AllValuesAreRoots)
            } else {
                Ok(RootsOutcome::NoRoots)
            }
        }
    }
}

/// Sum, over every term of `p` whose `var_name`-exponent equals `d`,
/// of that term with `var_name` divided out (i.e. that variable
/// dropped from its variable list). Terms where `var_name` is absent
/// count as exponent 0.
fn coefficient_of_power(p: &Polynomial, var_name: &str, d: i64) -> MathResult<Polynomial> {
    let mut matched = Vec::new();
    for t in &p.terms {
        let exponent = t.variables.iter().find(|v| v.name == var_name).map(|v| v.degree).unwrap_or(Q::zero());
        if exponent == Q::from_int(d) {
            let remaining: Vec<Variable> = t.variables.iter().filter(|v| v.name != var_name).cloned().collect();
            matched.push(Term::new(t.coefficient, remaining));
        }
    }
    if matched.is_empty() {
        Ok(Polynomial::zero())
    } else {
        Polynomial::from_terms(matched).simplify()
    }
}

/// Build `(-b ± √(b² - 4ac)) / (2a)` per §4.8.
fn quadratic_roots(a: &Polynomial, b: &Polynomial, c: &Polynomial) -> MathResult<Vec<Vec<PolyRatio>>> {
    let four_ac = a.mul(c)?.mul(&Polynomial::constant(Q::from_int(4)))?;
    let discriminant = b.mul(b)?.sub(&four_ac)?;
    let two_a = a.mul(&Polynomial::constant(Q::from_int(2)))?;
    let neg_b = b.negate();

    let sqrt_delta = match discriminant.as_constant() {
        Some(value) if value.is_negative() => {
            // Δ <- (-Δ)·ⅈ², wrapping the negative in the sentinel
            // imaginary unit rather than rewriting it numerically.
            let wrapped = Polynomial::constant(-value)
                .mul(&Polynomial::from_term(Term::new(Q::one(), vec![Variable::new(crate::IMAGINARY_UNIT, Q::from_int(2))])))?;
            Polynomial::new(wrapped.terms, Q::new(1, 2)).simplify()?
        }
        _ => Polynomial::new(discriminant.terms.clone(), Q::new(1, 2)).simplify()?,
    };

    if sqrt_delta.degree == Q::one() {
        // The root reduced to an ordinary polynomial; fold it into a
        // single numerator per root rather than two summands.
        let root1_num = neg_b.add(&sqrt_delta)?;
        let root2_num = neg_b.sub(&sqrt_delta)?;
        let root1 = PolyRatio::new(root1_num, two_a.clone()).cancel()?;
        let root2 = PolyRatio::new(root2_num, two_a).cancel()?;
        Ok(vec![vec![root1], vec![root2]])
    } else {
        // The root stayed symbolic. Per the concrete scenario this is
        // grounded on, the two roots share the same first summand
        // `(-b)/(2a)`; the second summand carries the sign split by
        // negating the *denominator* rather than the radicand.
        let first_summand = PolyRatio::new(neg_b, two_a.clone());
        let neg_two_a = two_a.negate();
        let root1 = vec![first_summand.clone(), PolyRatio::new(sqrt_delta.clone(), two_a)];
        let root2 = vec![first_summand, PolyRatio::new(sqrt_delta, neg_two_a)];
        Ok(vec![root1, root2])
    }
}
