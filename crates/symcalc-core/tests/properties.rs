//! Property tests for the universal algebraic invariants a correct
//! simplifier must hold regardless of which polynomial it is fed:
//! idempotence, commutativity/associativity of addition, the
//! subtraction-is-zero identity, factor/residual reconstruction, and
//! invariance under permuting a polynomial's term list.
//!
//! Coefficients and exponents are kept in a small bounded range to
//! stay well inside `i64` range through a handful of additions and
//! multiplications — arithmetic overflow is a documented limitation
//! of the underlying rational type, not something these properties
//! are meant to probe.

use proptest::prelude::*;
use symcalc_core::{Polynomial, Q, Term, Variable};

fn arb_coefficient() -> impl Strategy<Value = Q> {
    (-9i64..=9).prop_map(Q::from_int)
}

fn arb_variable() -> impl Strategy<Value = Variable> {
    ("[xy]", 0i64..=3).prop_map(|(name, degree)| Variable::new(name, Q::from_int(degree)))
}

fn arb_term() -> impl Strategy<Value = Term> {
    (arb_coefficient(), prop::collection::vec(arb_variable(), 0..=2))
        .prop_map(|(coefficient, variables)| Term::new(coefficient, variables))
}

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(arb_term(), 1..=4).prop_map(Polynomial::from_terms)
}

proptest! {
    #[test]
    fn simplify_is_idempotent(p in arb_polynomial()) {
        let once = p.simplify().unwrap();
        let twice = once.simplify().unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn addition_is_commutative(a in arb_polynomial(), b in arb_polynomial()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn addition_is_associative(a in arb_polynomial(), b in arb_polynomial(), c in arb_polynomial()) {
        let left = a.add(&b).unwrap().add(&c).unwrap();
        let right = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn subtracting_self_is_zero(p in arb_polynomial()) {
        let difference = p.sub(&p).unwrap();
        prop_assert!(difference.is_zero());
    }

    #[test]
    fn factor_reconstructs_the_original(p in arb_polynomial()) {
        let (factor, residual) = p.factor().unwrap();
        let reconstructed = Polynomial::from_term(factor).mul(&residual).unwrap();
        prop_assert_eq!(reconstructed, p.simplify().unwrap());
    }

    #[test]
    fn simplify_is_invariant_under_term_permutation(p in arb_polynomial()) {
        let mut reversed_terms = p.terms.clone();
        reversed_terms.reverse();
        let reversed = Polynomial::new(reversed_terms, p.degree);
        prop_assert_eq!(p.simplify().unwrap(), reversed.simplify().unwrap());
    }
}
