//! The Cartesian-product arithmetic of §9: a `Polynomial` and a
//! `PolyRatio` combine freely by promoting the polynomial side to a
//! ratio first.
//!
//! `Value` is the running result of folding an `Operation` directive
//! left to right: it starts as a bare polynomial, and a `/` along the
//! way can turn it into a ratio that every later `+`/`-`/`*`/`/` must
//! then respect.

use crate::division;
use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::poly_ratio::PolyRatio;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Value {
    Poly(Polynomial),
    Ratio(PolyRatio),
}

impl Value {
    pub fn simplify(&self) -> MathResult<Value> {
        match self {
            Value::Poly(p) => Ok(Value::Poly(p.simplify()?)),
            Value::Ratio(r) => Ok(Value::Ratio(r.simplify()?)),
        }
    }

    pub fn into_ratio(self) -> PolyRatio {
        match self {
            Value::Poly(p) => PolyRatio::from(p),
            Value::Ratio(r) => r,
        }
    }

    pub fn add(&self, other: &Polynomial) -> MathResult<Value> {
        match self {
            Value::Poly(p) => Ok(Value::Poly(p.add(other)?)),
            Value::Ratio(r) => Ok(Value::Ratio(r.add(&PolyRatio::from(other.clone()))?)),
        }
    }

    pub fn sub(&self, other: &Polynomial) -> MathResult<Value> {
        match self {
            Value::Poly(p) => Ok(Value::Poly(p.sub(other)?)),
            Value::Ratio(r) => Ok(Value::Ratio(r.sub(&PolyRatio::from(other.clone()))?)),
        }
    }

    pub fn mul(&self, other: &Polynomial) -> MathResult<Value> {
        match self {
            Value::Poly(p) => Ok(Value::Poly(p.mul(other)?)),
            Value::Ratio(r) => Ok(Value::Ratio(r.mul(&PolyRatio::from(other.clone()))?)),
        }
    }

    /// `/` per §4.6: dividing a running *polynomial* value attempts
    /// Euclidean division first ([`division::divide`]); once the
    /// running value is already a ratio, `/` is the `PolyRatio`
    /// cross-multiplication rule instead.
    pub fn div(&self, other: &Polynomial) -> MathResult<Value> {
        match self {
            Value::Poly(p) => Ok(Value::Ratio(division::divide(p, other)?)),
            Value::Ratio(r) => Ok(Value::Ratio(r.div(&PolyRatio::from(other.clone()))?)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Poly(p) => write!(f, "{p}"),
            Value::Ratio(r) => write!(f, "{r}"),
        }
    }
}
