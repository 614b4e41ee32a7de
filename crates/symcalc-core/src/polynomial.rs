//! `Polynomial`: a finite sum of terms, optionally raised to an outer
//! rational exponent, and the `simplify` normalization procedure.

use crate::error::{MathError, MathResult};
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;

/// `P = (Σ terms)^degree`. `degree` defaults to 1; a non-unit degree
/// lets the engine represent constructs like `√(2x+y)` without
/// evaluating the root.
#[derive(Debug, Clone)]
pub struct Polynomial {
    pub terms: Vec<Term>,
    pub degree: Q,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>, degree: Q) -> Self {
        Polynomial { terms, degree }
    }

    pub fn from_terms(terms: Vec<Term>) -> Self {
        Polynomial::new(terms, Q::one())
    }

    pub fn from_term(term: Term) -> Self {
        Polynomial::from_terms(vec![term])
    }

    pub fn constant(value: Q) -> Self {
        Polynomial::from_term(Term::constant(value))
    }

    pub fn zero() -> Self {
        Polynomial::constant(Q::zero())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Polynomial::from_term(Term::new(Q::one(), vec![Variable::linear(name)]))
    }

    /// `true` once `simplify` has reduced this to the single
    /// zero-coefficient, empty-variables term.
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_zero() && self.terms[0].variables.is_empty()
    }

    /// `true` if this polynomial has exactly one non-zero term with
    /// no variables (a bare rational constant). Assumes `self` is
    /// already simplified.
    pub fn as_constant(&self) -> Option<Q> {
        if self.degree != Q::one() {
            return None;
        }
        match self.terms.as_slice() {
            [t] if t.variables.is_empty() => Some(t.coefficient),
            _ => None,
        }
    }

    /// Names of every variable appearing in any term, sorted and
    /// deduplicated. Used by the factorer and the root finder to
    /// discover the distinguished variable.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.terms.iter().flat_map(|t| t.variables.iter().map(|v| v.name.clone())).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Steps 2-5 of the simplification contract: per-term
    /// canonicalization, like-term combination, descending-degree
    /// ordering, and zero-term purging. Ignores `degree`.
    pub(crate) fn combine_terms(terms: &[Term]) -> Vec<Term> {
        let canonical: Vec<Term> = terms.iter().map(Term::canonicalize).collect();

        let mut merged: Vec<Term> = Vec::with_capacity(canonical.len());
        for t in canonical {
            if let Some(existing) = merged.iter_mut().find(|m: &&mut Term| m.variables == t.variables) {
                existing.coefficient = existing.coefficient + t.coefficient;
            } else {
                merged.push(t);
            }
        }

        merged.retain(|t| !t.is_zero());
        merged.sort_by(|a, b| a.order_key().cmp(&b.order_key()));

        if merged.is_empty() {
            vec![Term::zero()]
        } else {
            merged
        }
    }

    fn raw_multiply(a: &[Term], b: &[Term]) -> Vec<Term> {
        let mut product = Vec::with_capacity(a.len() * b.len());
        for ta in a {
            for tb in b {
                product.push(ta.multiply(tb));
            }
        }
        Polynomial::combine_terms(&product)
    }

    /// Canonicalize this polynomial per §4.3: resolve the outer
    /// exponent, then canonicalize/combine/order/purge terms.
    ///
    /// Idempotent and deterministic: `simplify(simplify(p)) ==
    /// simplify(p)` for every `p` this does not error on.
    pub fn simplify(&self) -> MathResult<Polynomial> {
        let base_terms = Polynomial::combine_terms(&self.terms);

        if self.degree == Q::one() {
            return Ok(Polynomial::new(base_terms, Q::one()));
        }

        let base_is_zero = base_terms.len() == 1 && base_terms[0].is_zero();

        if self.degree.is_integer() {
            let n = self.degree.to_integer();
            if n == 0 {
                if base_is_zero {
                    return Err(MathError::ZeroToZerothPower);
                }
                return Ok(Polynomial::constant(Q::one()));
            }
            if n >= 2 {
                let mut acc = base_terms.clone();
                for _ in 1..n {
                    acc = Polynomial::raw_multiply(&acc, &base_terms);
                }
                return Ok(Polynomial::new(acc, Q::one()));
            }
            // Negative or otherwise unhandled integer exponents have
            // no reduction rule, so the exponent stays symbolic.
            return Ok(Polynomial::new(base_terms, self.degree));
        }

        if let Some(k) = unit_fraction_denominator(self.degree) {
            if let [single] = base_terms.as_slice() {
                if let Some(reduced) = try_reduce_root(single, k) {
                    return Ok(Polynomial::new(vec![reduced], Q::one()));
                }
            }
        }

        Ok(Polynomial::new(base_terms, self.degree))
    }

    pub fn add(&self, other: &Polynomial) -> MathResult<Polynomial> {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Polynomial::new(terms, Q::one()).simplify()
    }

    pub fn sub(&self, other: &Polynomial) -> MathResult<Polynomial> {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().map(Term::negate));
        Polynomial::new(terms, Q::one()).simplify()
    }

    pub fn mul(&self, other: &Polynomial) -> MathResult<Polynomial> {
        let product = Polynomial::raw_multiply(&self.terms, &other.terms);
        Polynomial::new(product, Q::one()).simplify()
    }

    pub fn negate(&self) -> Polynomial {
        Polynomial::new(self.terms.iter().map(Term::negate).collect(), self.degree)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        match (self.simplify(), other.simplify()) {
            (Ok(a), Ok(b)) => a.degree == b.degree && a.terms == b.terms,
            _ => false,
        }
    }
}

/// `degree == 1/k` for some integer `k > 1`.
fn unit_fraction_denominator(degree: Q) -> Option<i64> {
    if degree.numer() == 1 && degree.denom() > 1 {
        Some(degree.denom())
    } else {
        None
    }
}

/// Attempt to reduce `term^(1/k)` to an exact term: the coefficient
/// must be a perfect `k`-th power and every variable's exponent must
/// be divisible by `k`.
fn try_reduce_root(term: &Term, k: i64) -> Option<Term> {
    let reduced_coefficient = term.coefficient.is_perfect_kth_power(k)?;
    let mut variables = Vec::with_capacity(term.variables.len());
    for v in &term.variables {
        if v.is_imaginary_unit() {
            // i is never rewritten numerically, even when its degree
            // is evenly divisible by k; keep it symbolic.
            return None;
        }
        let exponent = v.degree;
        if exponent.numer() % k != 0 {
            return None;
        }
        variables.push(Variable::new(v.name.clone(), Q::new(exponent.numer() / k, exponent.denom())));
    }
    Some(Term::new(reduced_coefficient, variables))
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
    fn simplify_combines_like_terms_and_orders_descending() {
        let p = Polynomial::from_terms(vec![
            term(3, vec![var("x", 1)]),
            term(5, vec![var("x", 2)]),
            term(-1, vec![var("x", 1)]),
        ]);
        let s = p.simplify().unwrap();
        assert_eq!(s.terms.len(), 2);
        assert_eq!(s.terms[0], term(5, vec![var("x", 2)]));
        assert_eq!(s.terms[1], term(2, vec![var("x", 1)]));
    }

    #[test]
    fn simplify_is_idempotent() {
        let p = Polynomial::from_terms(vec![term(1, vec![var("y", 1)]), term(1, vec![var("x", 2)])]);
        let once = p.simplify().unwrap();
        let twice = once.simplify().unwrap();
        assert_eq!(once.terms, twice.terms);
    }

    #[test]
    fn subtraction_of_self_is_zero() {
        let p = Polynomial::from_terms(vec![term(2, vec![var("x", 1)]), term(3, vec![])]);
        let z = p.sub(&p).unwrap();
        assert!(z.is_zero());
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = Polynomial::from_terms(vec![term(1, vec![var("x", 1)])]);
        let b = Polynomial::from_terms(vec![term(2, vec![var("y", 1)])]);
        let c = Polynomial::from_terms(vec![term(3, vec![])]);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.add(&b).unwrap().add(&c).unwrap(), a.add(&b.add(&c).unwrap()).unwrap());
    }

    #[test]
    fn degree_two_expands_by_repeated_multiplication() {
        // (x + 1)^2 = x^2 + 2x + 1
        let base = Polynomial::from_terms(vec![term(1, vec![var("x", 1)]), term(1, vec![])]);
        let squared = Polynomial::new(base.terms.clone(), Q::from_int(2)).simplify().unwrap();
        let expected =
            Polynomial::from_terms(vec![term(1, vec![var("x", 2)]), term(2, vec![var("x", 1)]), term(1, vec![])])
                .simplify()
                .unwrap();
        assert_eq!(squared, expected);
    }

    #[test]
    fn perfect_square_root_reduces() {
        // (4x^2)^(1/2) = 2x
        let p = Polynomial::new(vec![term(4, vec![var("x", 2)])], Q::new(1, 2));
        let s = p.simplify().unwrap();
        assert_eq!(s, Polynomial::from_terms(vec![term(2, vec![var("x", 1)])]));
    }

    #[test]
    fn non_perfect_square_root_stays_symbolic() {
        let p = Polynomial::new(vec![term(11, vec![])], Q::new(1, 2));
        let s = p.simplify().unwrap();
        assert_eq!(s.degree, Q::new(1, 2));
        assert_eq!(s.terms, vec![term(11, vec![])]);
    }

    #[test]
    fn zero_to_the_zero_is_an_error() {
        let p = Polynomial::new(vec![Term::zero()], Q::zero());
        assert_eq!(p.simplify(), Err(MathError::ZeroToZerothPower));
    }

    #[test]
    fn nonzero_to_the_zero_is_one() {
        let p = Polynomial::new(vec![term(5, vec![var("x", 1)])], Q::zero());
        assert_eq!(p.simplify().unwrap(), Polynomial::constant(Q::one()));
    }

    #[test]
    fn imaginary_unit_is_never_rewritten_to_minus_one() {
        // i^2 must stay i^2 through simplify; only `roots` interprets
        // its i^2 = -1 invariant, and only when wrapping a negative
        // discriminant.
        let i_squared = Variable::new(crate::IMAGINARY_UNIT, Q::from_int(2));
        let p = Polynomial::from_term(term(1, vec![i_squared.clone()]));
        let s = p.simplify().unwrap();
        assert_eq!(s.terms, vec![term(1, vec![i_squared])]);
    }
}
