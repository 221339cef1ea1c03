//! Property-based tests for the Jack family.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{jack_pol, schur_pol, Normalization};
    use jackpoly_integers::Integer;
    use jackpoly_poly::Monomial;
    use jackpoly_rings::{Ring, Q, Z};

    fn parts() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec(1u32..4, 0..4).prop_map(|mut parts| {
            parts.sort_unstable_by(|a, b| b.cmp(a));
            parts
        })
    }

    fn alpha() -> impl Strategy<Value = Q> {
        (1i64..8, 1i64..8).prop_map(|(num, den)| Q::new(num, den))
    }

    fn swapped(m: &Monomial, i: usize, j: usize) -> Monomial {
        let mut exps = m.exponents().to_vec();
        exps.swap(i, j);
        Monomial::from_exponents(&exps)
    }

    fn padded(kappa: &[u32], n: usize) -> Vec<u32> {
        let mut exps = kappa.to_vec();
        exps.resize(n, 0);
        exps
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn jack_is_symmetric(kappa in parts(), n in 2usize..4, alpha in alpha()) {
            let jack = jack_pol(n, &kappa, &alpha, Normalization::J).unwrap();
            for (m, c) in jack.iter() {
                prop_assert_eq!(&jack.coeff(&swapped(m, 0, n - 1)), c);
            }
        }

        #[test]
        fn p_normalization_is_monic(kappa in parts(), n in 1usize..4, alpha in alpha()) {
            prop_assume!(kappa.len() <= n);
            let jack = jack_pol(n, &kappa, &alpha, Normalization::P).unwrap();
            prop_assert_eq!(jack.coeff_of(&padded(&kappa, n)), Q::one());
        }

        #[test]
        fn j_normalization_has_factorial_square_free_term(kappa in parts(), alpha in alpha()) {
            let size: u32 = kappa.iter().sum();
            prop_assume!(size <= 5);
            let n = size.max(1) as usize;
            let jack = jack_pol(n, &kappa, &alpha, Normalization::J).unwrap();
            let square_free = vec![u32::from(size > 0); n];
            prop_assert_eq!(
                jack.coeff_of(&square_free),
                Q::from(Integer::factorial(size))
            );
        }

        #[test]
        fn schur_is_monic_with_nonnegative_coefficients(kappa in parts(), n in 1usize..4) {
            prop_assume!(kappa.len() <= n);
            let schur = schur_pol(n, &kappa).unwrap();
            prop_assert_eq!(schur.coeff_of(&padded(&kappa, n)), Z::one());
            for (_, c) in schur.iter() {
                prop_assert!(!c.as_inner().is_negative());
            }
        }
    }
}
