//! Arbitrary precision integers.

use dashu::base::Signed as DashuSigned;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;

/// An arbitrary precision integer.
///
/// Wraps `dashu::IBig`; Schur polynomial coefficients and the factorials
/// of the C normalization live here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Computes `n!`.
    #[must_use]
    pub fn factorial(n: u32) -> Self {
        let mut acc = IBig::ONE;
        for k in 2..=n {
            acc *= IBig::from(k);
        }
        Self(acc)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

forward_binop!(Integer, Add, add);
forward_binop!(Integer, Sub, sub);
forward_binop!(Integer, Mul, mul);
forward_binop!(Integer, Div, div);

impl std::ops::Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::ops::Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<u32> for Integer {
    fn from(n: u32) -> Self {
        Self(IBig::from(n))
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        Self(IBig::from(n))
    }
}

impl From<IBig> for Integer {
    fn from(n: IBig) -> Self {
        Self(n)
    }
}
