//! Monomial content extraction (§4.4): the only factoring the engine
//! performs. Not a full polynomial GCD — it suffices for the
//! rational-function cancellation in [`crate::poly_ratio`].

use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::rational::Q;
use crate::term::Term;
use crate::variable::Variable;

impl Polynomial {
    /// Extract the greatest common monomial factor `F` such that
    /// `self == F * residual` exactly, with `residual` having no
    /// further common monomial factor.
    pub fn factor(&self) -> MathResult<(Term, Polynomial)> {
        let p = self.simplify()?;
        if p.is_zero() {
            return Ok((Term::constant(Q::one()), p));
        }
        if p.degree != Q::one() {
            // A non-unit outer exponent (an unreduced root, e.g. from
            // `roots`) has no monomial content to extract under §4.4 —
            // treating its term list as if it were linear would corrupt
            // the root it represents.
            return Ok((Term::constant(Q::one()), p));
        }

        // Step 1: scale every coefficient to an integer by the LCM of
        // the denominators, remembering the scale to undo it later.
        let denominator_lcm =
            p.terms.iter().fold(1i64, |acc, t| Q::lcm_i64(acc, t.coefficient.denom()));
        let scale = Q::from_int(denominator_lcm);
        let scaled: Vec<Term> =
            p.terms.iter().map(|t| Term::new(t.coefficient * scale, t.variables.clone())).collect();

        // Step 2: coefficient GCD, sign from the leading term.
        let mut gcd = 0i64;
        for t in &scaled {
            gcd = Q::gcd_i64(gcd, t.coefficient.to_integer().abs());
        }
        if gcd == 0 {
            gcd = 1;
        }
        let sign = if scaled[0].coefficient.is_negative() { -1 } else { 1 };
        let coefficient_factor = Q::from_int(sign * gcd);

        // Step 3: variable factor — names common to every term, each
        // at the minimum exponent across terms.
        let mut common: Option<Vec<(String, Q)>> = None;
        for t in &scaled {
            let mut names: Vec<(String, Q)> =
                t.variables.iter().map(|v| (v.name.clone(), v.degree)).collect();
            names.sort_by(|a, b| a.0.cmp(&b.0));
            common = Some(match common {
                None => names,
                Some(prev) => prev
                    .into_iter()
                    .filter_map(|(n, d)| {
                        names.iter().find(|(n2, _)| *n2 == n).map(|(_, d2)| {
                            let lower = if d < *d2 { d } else { *d2 };
                            (n, lower)
                        })
                    })
                    .collect(),
            });
        }
        let common = common.unwrap_or_default();
        let factor_variables: Vec<Variable> = common
            .into_iter()
            .filter(|(_, d)| !d.is_zero())
            .map(|(name, degree)| Variable::new(name, degree))
            .collect();

        // Step 4: assemble F, divide every scaled term by it.
        let raw_factor = Term::new(coefficient_factor, factor_variables);
        let residual_terms: Vec<Term> = scaled.iter().map(|t| divide_term(t, &raw_factor)).collect();

        // Step 5: undo the scaling from step 1.
        let factor = Term::new(raw_factor.coefficient / scale, raw_factor.variables);

        let residual = Polynomial::from_terms(residual_terms).simplify()?;
        Ok((factor, residual))
    }
}

fn divide_term(t: &Term, factor: &Term) -> Term {
    let coefficient = t.coefficient / factor.coefficient;
    let variables = t
        .variables
        .iter()
        .map(|v| match factor.variables.iter().find(|fv| fv.name == v.name) {
            Some(fv) => Variable::new(v.name.clone(), v.degree - fv.degree),
            None => v.clone(),
        })
        .collect();
    Term::new(coefficient, variables)
}
