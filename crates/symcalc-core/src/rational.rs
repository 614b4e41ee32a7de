//! Exact rational scalar
//!
//! `Q` is a thin newtype over [`num_rational::Ratio<i64>`]: a 64-bit
//! signed numerator/denominator pair, always kept reduced to lowest
//! terms with a positive denominator. Overflow in the underlying
//! `i64` arithmetic is not handled — this is a documented limitation
//! of the 64-bit representation, not a bug to be defended against.

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An exact rational number, `num / den`, reduced and with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Q(Ratio<i64>);

impl Q {
    /// Construct `num / den`, reducing to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero, matching `Ratio::new`'s contract.
    /// Callers that parse user-supplied fractions must check for a
    /// zero denominator themselves (see [`crate::poly_ratio::PolyRatio`]).
    pub fn new(num: i64, den: i64) -> Self {
        Q(Ratio::new(num, den))
    }

    /// Construct an integer rational `n / 1`.
    pub const fn from_int(n: i64) -> Self {
        Q(Ratio::new_raw(n, 1))
    }

    pub const fn zero() -> Self {
        Q::from_int(0)
    }

    pub const fn one() -> Self {
        Q::from_int(1)
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Q(self.0.abs())
    }

    pub fn recip(&self) -> Self {
        Q(self.0.recip())
    }

    /// Integer part, truncating toward zero. Only meaningful when the
    /// caller has already checked [`Q::is_integer`].
    pub fn to_integer(&self) -> i64 {
        self.0.to_integer()
    }

    /// GCD of two integers, always non-negative.
    pub fn gcd_i64(a: i64, b: i64) -> i64 {
        a.gcd(&b)
    }

    /// LCM of two integers, always non-negative.
    pub fn lcm_i64(a: i64, b: i64) -> i64 {
        a.lcm(&b)
    }

    /// Raise to an integer power (negative exponents invert).
    pub fn pow(&self, exp: i32) -> Self {
        Q(self.0.pow(exp))
    }

    /// `true` if this rational is a perfect `k`-th power of an
    /// integer (used by [`crate::polynomial::Polynomial::simplify`]
    /// when reducing a `1/k` outer exponent).
    pub fn is_perfect_kth_power(&self, k: i64) -> Option<Q> {
        if !self.is_integer() || k <= 0 {
            return None;
        }
        let n = self.to_integer();
        if n == 0 {
            return Some(Q::zero());
        }
        let sign = n.signum();
        let magnitude = n.unsigned_abs();
        // k=2 is the only case exercised (square roots of
        // discriminants), but the loop is generic over k.
        let mut root: i64 = 0;
        for candidate in 0..=(magnitude as f64).powf(1.0 / k as f64).ceil() as i64 + 1 {
            if candidate.checked_pow(k as u32).map(|p| p as u128) == Some(magnitude as u128) {
                root = candidate;
                break;
            }
        }
        if root == 0 && magnitude != 0 {
            return None;
        }
        if sign < 0 && k % 2 == 0 {
            return None; // even root of a negative number is not real
        }
        Some(Q::from_int(sign * root))
    }
}

impl From<i64> for Q {
    fn from(n: i64) -> Self {
        Q::from_int(n)
    }
}

impl Add for Q {
    type Output = Q;
    fn add(self, rhs: Q) -> Q {
        Q(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Q;
    fn sub(self, rhs: Q) -> Q {
        Q(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Q;
    fn mul(self, rhs: Q) -> Q {
        Q(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Q;
    fn div(self, rhs: Q) -> Q {
        Q(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Q;
    fn neg(self) -> Q {
        Q(-self.0)
    }
}

impl PartialOrd for Q {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Q {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.to_integer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        let q = Q::new(6, 8);
        assert_eq!(q.numer(), 3);
        assert_eq!(q.denom(), 4);
    }

    #[test]
    fn denominator_is_always_positive() {
        let q = Q::new(3, -4);
        assert_eq!(q.numer(), -3);
        assert_eq!(q.denom(), 4);
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = Q::new(1, 3);
        let b = Q::new(1, 6);
        assert_eq!(a + b, Q::new(1, 2));
        assert_eq!(a - b, Q::new(1, 6));
        assert_eq!(a * b, Q::new(1, 18));
        assert_eq!(a / b, Q::new(2, 1));
    }

    #[test]
    fn perfect_square_is_detected() {
        assert_eq!(Q::from_int(121).is_perfect_kth_power(2), Some(Q::from_int(11)));
        assert_eq!(Q::from_int(11).is_perfect_kth_power(2), None);
        assert_eq!(Q::from_int(-4).is_perfect_kth_power(2), None);
    }

    #[test]
    fn gcd_and_lcm_over_integers() {
        assert_eq!(Q::gcd_i64(12, 18), 6);
        assert_eq!(Q::lcm_i64(4, 6), 12);
    }
}
