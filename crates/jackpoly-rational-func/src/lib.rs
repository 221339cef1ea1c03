//! Rational functions P(α)/Q(α) for jackpoly.
//!
//! This crate provides [`RationalFunction`], the coefficient field of
//! symbolic Jack polynomials: exact quotients of univariate polynomials in
//! the Jack parameter α, kept in canonical form and usable wherever the
//! engine expects a [`Field`](jackpoly_rings::Field).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod rational_func;

pub use rational_func::{RationalFunction, PARAMETER_NAME};
