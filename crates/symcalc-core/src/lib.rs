//! Exact-rational polynomial algebra engine
//!
//! This crate provides the foundational types and operations for a
//! batch-mode symbolic calculator: exact rational scalars, polynomials
//! in several variables with rational exponents, rational functions
//! (`PolyRatio`), and the simplification, factoring, division,
//! substitution, and root-finding routines that operate on them.
//!
//! The engine never performs floating-point approximation; every
//! intermediate value is an exact `Q` (64-bit rational).

pub mod display;
pub mod division;
pub mod error;
pub mod factor;
pub mod polynomial;
pub mod poly_ratio;
pub mod rational;
pub mod roots;
pub mod substitute;
pub mod term;
pub mod value;
pub mod variable;

pub use error::{MathError, MathResult};
pub use polynomial::Polynomial;
pub use poly_ratio::PolyRatio;
pub use rational::Q;
pub use roots::RootsOutcome;
pub use substitute::Binding;
pub use term::Term;
pub use value::Value;
pub use variable::Variable;

/// The sentinel name of the imaginary-unit variable, `i² = -1`.
///
/// Kept symbolic everywhere except inside [`roots`] where a negative
/// discriminant is wrapped in it; `simplify` never rewrites it.
pub const IMAGINARY_UNIT: &str = "\u{2148}";
