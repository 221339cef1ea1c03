//! # jackpoly-rings
//!
//! Coefficient domains for jackpoly.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Concrete implementations: Z (Schur coefficients) and Q (numeric Jack
//!   coefficients)
//!
//! The symbolic domain Q(α) lives in `jackpoly-rational-func` and plugs
//! into the same traits.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Implements `Add`, `Sub`, `Mul` and `Neg` for a newtype by delegating to
/// the wrapped value.
macro_rules! delegate_ring_ops {
    ($ty:ident) => {
        impl std::ops::Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring};
