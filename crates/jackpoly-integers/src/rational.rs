//! Arbitrary precision rational numbers.
//!
//! Exact rational arithmetic for the numeric Jack parameter, plus the two
//! ways a floating point parameter is turned into an exact one.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;

use crate::Integer;

/// Iteration cap for the continued fraction expansion of an `f64`.
const MAX_CONVERGENTS: usize = 64;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let r = Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ));
        if negative {
            -r
        } else {
            r
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Converts a finite `f64` to the rational it represents exactly.
    ///
    /// Every finite double is a dyadic rational `m / 2^k`, so no precision
    /// is lost. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64_exact(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = i64::try_from((bits >> 52) & 0x7ff).ok()?;
        let fraction = bits & ((1u64 << 52) - 1);

        // Subnormals have no implicit leading bit and a fixed exponent.
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        let shift = u32::try_from(exponent.unsigned_abs()).ok()?;
        let two = Integer::new(2);
        let magnitude = if exponent >= 0 {
            Self::from(Integer::from(mantissa) * two.pow(shift))
        } else {
            Self::new(Integer::from(mantissa), two.pow(shift))
        };

        Some(if negative { -magnitude } else { magnitude })
    }

    /// Returns the best rational approximation of `value` whose denominator
    /// does not exceed `max_denominator`.
    ///
    /// Walks the continued fraction convergents of `value` and stops at the
    /// last one inside the bound, or as soon as a convergent reproduces
    /// `value` exactly. When the bound cuts the expansion short, the largest
    /// semiconvergent inside the bound is taken instead if it is closer.
    /// Returns `None` for non-finite input, a zero bound, or magnitudes that
    /// do not fit the convergent arithmetic.
    #[must_use]
    pub fn approximate_f64(value: f64, max_denominator: u64) -> Option<Self> {
        if !value.is_finite() || max_denominator == 0 || value.abs() >= 9.0e15 {
            return None;
        }

        let bound = i128::from(max_denominator);
        let (mut h_prev, mut h) = (0i128, 1i128);
        let (mut k_prev, mut k) = (1i128, 0i128);
        let mut rest = value;

        for _ in 0..MAX_CONVERGENTS {
            let a = rest.floor();
            #[allow(clippy::cast_possible_truncation)]
            let a_int = a as i128;

            let h_next = a_int.checked_mul(h)?.checked_add(h_prev)?;
            let k_next = a_int.checked_mul(k)?.checked_add(k_prev)?;
            if k_next > bound {
                // Largest t < a with t·k + k_prev inside the bound.
                let t = if k > 0 { (bound - k_prev) / k } else { 0 };
                if t > 0 {
                    let (h_semi, k_semi) = (t * h + h_prev, t * k + k_prev);
                    #[allow(clippy::cast_precision_loss)]
                    let closer = (h_semi as f64 / k_semi as f64 - value).abs()
                        < (h as f64 / k as f64 - value).abs();
                    if closer {
                        (h, k) = (h_semi, k_semi);
                    }
                }
                break;
            }
            (h_prev, h) = (h, h_next);
            (k_prev, k) = (k, k_next);

            #[allow(clippy::cast_precision_loss)]
            let close = (h as f64 / k as f64 - value).abs() <= f64::EPSILON * value.abs();
            let frac = rest - a;
            if close || frac == 0.0 {
                break;
            }
            rest = 1.0 / frac;
            if !rest.is_finite() {
                break;
            }
        }

        let numerator = i64::try_from(h).ok()?;
        let denominator = i64::try_from(k).ok()?;
        Some(Self::from_i64(numerator, denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
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

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

forward_binop!(Rational, Add, add);
forward_binop!(Rational, Sub, sub);
forward_binop!(Rational, Mul, mul);
forward_binop!(Rational, Div, div);

impl std::ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from(Integer::new(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        assert_eq!(&a + &b, Rational::from_i64(5, 6));
        // 1/2 / 1/3 = 3/2
        assert_eq!(a / b, Rational::from_i64(3, 2));
    }

    #[test]
    fn test_reduction_and_sign() {
        let r = Rational::from_i64(4, -6);
        assert_eq!(r.numerator().to_i64(), Some(-2));
        assert_eq!(r.denominator().to_i64(), Some(3));
        assert_eq!(r.signum(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(-5, 2).to_string(), "-5/2");
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(Rational::from_f64_exact(2.5), Some(Rational::from_i64(5, 2)));
        assert_eq!(Rational::from_f64_exact(-0.125), Some(Rational::from_i64(-1, 8)));
        assert_eq!(Rational::from_f64_exact(3.0), Some(Rational::from(3)));
        assert_eq!(Rational::from_f64_exact(0.0), Some(Rational::zero()));
        assert_eq!(Rational::from_f64_exact(f64::NAN), None);
        assert_eq!(Rational::from_f64_exact(f64::INFINITY), None);

        // 0.1 is not dyadic; its double is 3602879701896397 / 2^55
        let tenth = Rational::from_f64_exact(0.1).unwrap();
        assert_eq!(tenth.numerator().to_i64(), Some(3_602_879_701_896_397));
        assert_eq!(tenth.denominator(), Integer::new(2).pow(55));
    }

    #[test]
    fn test_approximate_f64() {
        assert_eq!(
            Rational::approximate_f64(0.1, 1_000_000),
            Some(Rational::from_i64(1, 10))
        );
        assert_eq!(
            Rational::approximate_f64(1.0 / 3.0, 1000),
            Some(Rational::from_i64(1, 3))
        );
        // Bounded denominators give the classic pi convergents.
        assert_eq!(
            Rational::approximate_f64(std::f64::consts::PI, 10),
            Some(Rational::from_i64(22, 7))
        );
        assert_eq!(
            Rational::approximate_f64(std::f64::consts::PI, 200),
            Some(Rational::from_i64(355, 113))
        );
        assert_eq!(Rational::approximate_f64(0.5, 0), None);
    }

    #[test]
    fn test_approximate_f64_uses_semiconvergents() {
        // 179/57 lies between the convergents 22/7 and 333/106 of pi.
        assert_eq!(
            Rational::approximate_f64(std::f64::consts::PI, 57),
            Some(Rational::from_i64(179, 57))
        );
        assert_eq!(
            Rational::approximate_f64(0.3, 2),
            Some(Rational::from_i64(1, 2))
        );
    }
}
