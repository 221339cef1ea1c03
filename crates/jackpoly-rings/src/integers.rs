//! The ring of integers Z.

use crate::traits::Ring;
use jackpoly_integers::Integer;
use num_traits::{One, Zero};

/// The ring of integers.
///
/// Wraps `jackpoly_integers::Integer`; Schur polynomials have their
/// coefficients here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::zero())
    }

    fn one() -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

delegate_ring_ops!(Z);

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
