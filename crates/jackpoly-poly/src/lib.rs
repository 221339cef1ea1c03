//! # jackpoly-poly
//!
//! Polynomial arithmetic for jackpoly.
//!
//! This crate provides:
//! - Sparse multivariate polynomials keyed by exponent vectors, the output
//!   type of every Jack/Schur evaluation
//! - Dense univariate polynomials, used as numerator and denominator of
//!   rational functions in the Jack parameter
//! - Polynomial GCD over a field
//! - Monomial orderings for deterministic term listing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod format;
pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;
