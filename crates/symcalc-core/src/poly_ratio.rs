//! `PolyRatio`: a rational function, numerator/denominator, and its
//! canonicalization (§4.5).
//!
//! Per the design note in §9, `PolyRatio` is
//! modeled as a distinct type from `Polynomial` rather than as a
//! subtype of it — an explicit `From<Polynomial>` promotes a bare
//! polynomial (denominator 1), and every arithmetic operation on a
//! `(Polynomial, PolyRatio)` pair promotes first and delegates here.

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PolyRatio {
    pub numerator: Polynomial,
    pub denominator: Polynomial,
}

impl From<Polynomial> for PolyRatio {
    fn from(p: Polynomial) -> Self {
        PolyRatio { numerator: p, denominator: Polynomial::constant(Q::one()) }
    }
}

impl PolyRatio {
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Self {
        PolyRatio { numerator, denominator }
    }

    /// `true` once `simplify` has reduced the denominator to the
    /// constant polynomial 1.
    pub fn denominator_is_one(&self) -> bool {
        self.denominator.as_constant() == Some(Q::one())
    }

    /// Steps 1-4 and 6 of §4.5: simplify both sides, clear negative
    /// exponents, factor-and-cancel common monomial content, and
    /// collapse equal residuals to `1`. Leaves the denominator's sign
    /// as cancellation produced it — used directly by [`crate::roots`],
    /// which builds `-b/a`-shaped ratios where a literal negative
    /// denominator is part of the expected output, not something to
    /// normalize away.
    pub fn cancel(&self) -> MathResult<PolyRatio> {
        let num = self.numerator.simplify()?;
        let den = self.denominator.simplify()?;
        if den.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        let (num, den) = clear_negative_exponents(&num, &den)?;
        let num = num.simplify()?;
        let den = den.simplify()?;
        if den.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        let (factor_num, residual_num) = num.factor()?;
        let (factor_den, residual_den) = den.factor()?;
        let (remaining_num, remaining_den) = cancel_monomials(&factor_num, &factor_den);

        let mut final_num = residual_num.mul(&Polynomial::from_term(remaining_num))?;
        let mut final_den = residual_den.mul(&Polynomial::from_term(remaining_den))?;

        if final_num == final_den {
            final_num = Polynomial::constant(Q::one());
            final_den = Polynomial::constant(Q::one());
        }

        Ok(PolyRatio::new(final_num, final_den))
    }

    /// Canonicalize: [`PolyRatio::cancel`], then normalize the
    /// denominator's sign (negate both sides if its leading
    /// coefficient is negative).
    pub fn simplify(&self) -> MathResult<PolyRatio> {
        let cancelled = self.cancel()?;
        let PolyRatio { mut numerator, mut denominator } = cancelled;

        if denominator.terms.first().map(|t| t.coefficient.is_negative()).unwrap_or(false) {
            numerator = numerator.negate().simplify()?;
            denominator = denominator.negate().simplify()?;
        }

        Ok(PolyRatio::new(numerator, denominator))
    }

    pub fn add(&self, other: &PolyRatio) -> MathResult<PolyRatio> {
        let numerator = self.numerator.mul(&other.denominator)?.add(&other.numerator.mul(&self.denominator)?)?;
        let denominator = self.denominator.mul(&other.denominator)?;
        PolyRatio::new(numerator, denominator).simplify()
    }

    pub fn sub(&self, other: &PolyRatio) -> MathResult<PolyRatio> {
        let numerator = self.numerator.mul(&other.denominator)?.sub(&other.numerator.mul(&self.denominator)?)?;
        let denominator = self.denominator.mul(&other.denominator)?;
        PolyRatio::new(numerator, denominator).simplify()
    }

    pub fn mul(&self, other: &PolyRatio) -> MathResult<PolyRatio> {
        let numerator = self.numerator.mul(&other.numerator)?;
        let denominator = self.denominator.mul(&other.denominator)?;
        PolyRatio::new(numerator, denominator).simplify()
    }

    pub fn div(&self, other: &PolyRatio) -> MathResult<PolyRatio> {
        let numerator = self.numerator.mul(&other.denominator)?;
        let denominator = self.denominator.mul(&other.numerator)?;
        PolyRatio::new(numerator, denominator).simplify()
    }
}

impl PartialEq for PolyRatio {
    fn eq(&self, other: &Self) -> bool {
        match (self.simplify(), other.simplify()) {
            (Ok(a), Ok(b)) => a.numerator == b.numerator && a.denominator == b.denominator,
            _ => false,
        }
    }
}

/// §4.5 step 3: for every variable with a negative exponent anywhere
/// on either side, multiply both sides by that variable raised to
/// the negation of its most-negative exponent.
fn clear_negative_exponents(num: &Polynomial, den: &Polynomial) -> MathResult<(Polynomial, Polynomial)> {
    let mut most_negative: HashMap<String, Q> = HashMap::new();
    for t in num.terms.iter().chain(den.terms.iter()) {
        for v in &t.variables {
            if v.degree.is_negative() {
                most_negative
                    .entry(v.name.clone())
                    .and_modify(|min| {
                        if v.degree < *min {
                            *min = v.degree;
                        }
                    })
                    .or_insert(v.degree);
            }
        }
    }
    if most_negative.is_empty() {
        return Ok((num.clone(), den.clone()));
    }
    let variables: Vec<Variable> =
        most_negative.into_iter().map(|(name, min)| Variable::new(name, -min)).collect();
    let multiplier = Polynomial::from_term(Term::new(Q::one(), variables));
    Ok((num.mul(&multiplier)?, den.mul(&multiplier)?))
}

/// §4.5 step 4: cancel the GCD of the integer parts of two monomial
/// factors and, for every variable name common to both, subtract the
/// lesser exponent from both. Returns what remains of each factor
/// after cancellation (to be folded back into its own residual).
fn cancel_monomials(a: &Term, b: &Term) -> (Term, Term) {
    let (a_coefficient, b_coefficient) = if a.coefficient.is_integer() && b.coefficient.is_integer() {
        let ai = a.coefficient.to_integer();
        let bi = b.coefficient.to_integer();
        let g = Q::gcd_i64(ai.abs(), bi.abs());
        let g = if g == 0 { 1 } else { g };
        (Q::from_int(ai) / Q::from_int(g), Q::from_int(bi) / Q::from_int(g))
    } else {
        (a.coefficient, b.coefficient)
    };

    let mut a_vars = a.variables.clone();
    let mut b_vars = b.variables.clone();
    for av in &a.variables {
        if let Some(bv) = b.variables.iter().find(|bv| bv.name == av.name) {
            let shared = if av.degree < bv.degree { av.degree } else { bv.degree };
            if let Some(entry) = a_vars.iter_mut().find(|v| v.name == av.name) {
                entry.degree = entry.degree - shared;
            }
            if let Some(entry) = b_vars.iter_mut().find(|v| v.name == av.name) {
                entry.degree = entry.degree - shared;
            }
        }
    }
    a_vars.retain(|v| !v.degree.is_zero());
    b_vars.retain(|v| !v.degree.is_zero());

    (Term::new(a_coefficient, a_vars), Term::new(b_coefficient, b_vars))
}
