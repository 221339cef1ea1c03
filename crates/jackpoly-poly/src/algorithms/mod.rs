//! Polynomial algorithms.
//!
//! Currently only the Euclidean GCD over a field, which keeps rational
//! functions in lowest terms.

pub mod gcd;
