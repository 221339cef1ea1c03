//! The field of rational numbers Q.

use crate::traits::{Field, Ring};
use jackpoly_integers::{Integer, Rational};
use num_traits::{One, Zero};

/// The field of rational numbers.
///
/// Wraps `jackpoly_integers::Rational`. Numeric Jack parameters and the
/// coefficients of numeric Jack polynomials live here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

delegate_ring_ops!(Q);

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Integer> for Q {
    fn from(value: Integer) -> Self {
        Self(Rational::from(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
