//! # jackpoly-integers
//!
//! Arbitrary precision integer and rational arithmetic for jackpoly.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`), used for factorials and
//!   Schur coefficients
//! - Arbitrary precision rationals (`Rational`), the numeric Jack parameter
//!   domain, including exact and bounded-denominator conversion from `f64`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Implements a binary operator for a newtype over a `dashu` value, for the
/// owned/owned, owned/borrowed and borrowed/borrowed operand shapes.
macro_rules! forward_binop {
    ($ty:ident, $op:ident, $method:ident) => {
        impl std::ops::$op for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty(std::ops::$op::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$op<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$op::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$op for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$op::$method(&self.0, &rhs.0))
            }
        }
    };
}

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
