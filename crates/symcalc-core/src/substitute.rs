//! Binding store and substitution/evaluation (§4.7).

use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::poly_ratio::PolyRatio;
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;

/// An order-preserving variable-name → value store. Later bindings of
/// the same name shadow earlier ones on lookup; both remain in
/// `pairs` so the driver can still report assignment order.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    pairs: Vec<(String, Q)>,
}

impl Binding {
    pub fn new() -> Self {
        Binding { pairs: Vec::new() }
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Q) {
        self.pairs.push((name.into(), value));
    }

    /// The most recently bound value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<Q> {
        self.pairs.iter().rev().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

/// Replace every bound variable in `p` with its value raised to that
/// variable's exponent, folded into the term's coefficient, then
/// re-simplify. A variable bound in `binding` but carrying a
/// non-integer exponent that its value cannot satisfy exactly (not a
/// perfect root) is left symbolic, per §4.7.
pub fn substitute_polynomial(p: &Polynomial, binding: &Binding) -> MathResult<Polynomial> {
    let terms: Vec<Term> = p.terms.iter().map(|t| substitute_term(t, binding)).collect();
    Polynomial::new(terms, p.degree).simplify()
}

pub fn substitute_ratio(r: &PolyRatio, binding: &Binding) -> MathResult<PolyRatio> {
    let numerator = substitute_polynomial(&r.numerator, binding)?;
    let denominator = substitute_polynomial(&r.denominator, binding)?;
    PolyRatio::new(numerator, denominator).simplify()
}

fn substitute_term(t: &Term, binding: &Binding) -> Term {
    let mut coefficient = t.coefficient;
    let mut variables = Vec::with_capacity(t.variables.len());
    for v in &t.variables {
        match binding.get(&v.name) {
            Some(value) => match fold_power(value, v.degree) {
                Some(folded) => coefficient = coefficient * folded,
                None => variables.push(v.clone()),
            },
            None => variables.push(v.clone()),
        }
    }
    Term::new(coefficient, variables)
}

/// `value^degree` as an exact `Q`, when `degree` is an integer or
/// `value` is a perfect `degree.denom()`-th power. `None` means the
/// substitution cannot be folded and the variable stays symbolic.
fn fold_power(value: Q, degree: Q) -> Option<Q> {
    if degree.is_integer() {
        return Some(value.pow(degree.to_integer() as i32));
    }
    let root = value.is_perfect_kth_power(degree.denom())?;
    Some(root.pow(degree.numer() as i32))
}
