//! Algebraic structure traits.
//!
//! The Jack engine is written once against these traits and instantiated
//! for each coefficient domain.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - `From<i64>` is the canonical ring map from the integers
pub trait Ring:
    Clone
    + Eq
    + Debug
    + From<i64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A field: every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Q, Z};

    #[test]
    fn test_pow_default() {
        assert_eq!(Z::new(3).pow(0), Z::one());
        assert_eq!(Z::new(3).pow(5), Z::new(243));
        assert_eq!(Q::new(-1, 2).pow(3), Q::new(-1, 8));
    }

    #[test]
    fn test_checked_div() {
        let a = Q::new(1, 2);
        assert_eq!(a.checked_div(&Q::new(1, 3)), Some(Q::new(3, 2)));
        assert_eq!(a.checked_div(&Q::zero()), None);
    }
}
