//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            let left = &a * &(&b + &c);
            let right = &a * &b + &a * &c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rational_recip_is_inverse(a in small_rational()) {
            prop_assume!(!a.is_zero());
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(r.denominator() > Integer::zero());
            prop_assert_eq!(r.signum(), (n.signum() * d.signum()) as i8);
        }

        #[test]
        fn dyadic_doubles_convert_exactly(m in -4096i64..4096i64, k in 0u32..20u32) {
            #[allow(clippy::cast_precision_loss)]
            let value = m as f64 / f64::from(1u32 << k);
            let expected = Rational::new(Integer::new(m), Integer::new(2).pow(k));
            prop_assert_eq!(Rational::from_f64_exact(value), Some(expected));
        }

        #[test]
        fn small_fractions_are_recovered(n in 1i64..500i64, d in 1i64..500i64) {
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64 / d as f64;
            prop_assert_eq!(
                Rational::approximate_f64(value, 1000),
                Some(Rational::from_i64(n, d))
            );
        }

        #[test]
        fn factorial_recurrence(n in 1u32..40u32) {
            prop_assert_eq!(
                Integer::factorial(n),
                Integer::factorial(n - 1) * Integer::from(n)
            );
        }
    }
}
