//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::dense::DensePoly;
    use crate::monomial::Monomial;
    use crate::sparse::SparsePoly;
    use jackpoly_rings::rationals::Q;
    use jackpoly_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    fn small_dense() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 0..=4).prop_map(DensePoly::new)
    }

    fn nonzero_dense() -> impl Strategy<Value = DensePoly<Q>> {
        small_dense().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Polynomials in three variables with at most five terms of degree <= 3.
    fn small_sparse() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec(
            (proptest::collection::vec(0u32..=3, 3), small_coeff()),
            0..=5,
        )
        .prop_map(|terms| {
            SparsePoly::new(
                terms
                    .into_iter()
                    .map(|(exps, c)| (Monomial::from_exponents(&exps), c)),
                3,
            )
        })
    }

    proptest! {
        #[test]
        fn dense_distributive(a in small_dense(), b in small_dense(), c in small_dense()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn dense_division_identity(a in small_dense(), b in nonzero_dense()) {
            // a = q*b + r with deg r < deg b
            let (q, r) = poly_div_rem(&a, &b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.degree() < b.degree());
        }

        #[test]
        fn dense_gcd_divides_both(a in nonzero_dense(), b in nonzero_dense()) {
            let g = poly_gcd(&a, &b);
            prop_assert!(poly_div_rem(&a, &g).1.is_zero());
            prop_assert!(poly_div_rem(&b, &g).1.is_zero());
            prop_assert!(g.leading_coeff().is_some_and(Ring::is_one));
        }

        #[test]
        fn sparse_mul_commutative(a in small_sparse(), b in small_sparse()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn sparse_distributive(a in small_sparse(), b in small_sparse(), c in small_sparse()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn sparse_eval_is_homomorphism(
            a in small_sparse(),
            b in small_sparse(),
            point in proptest::collection::vec(small_coeff(), 3),
        ) {
            prop_assert_eq!(a.mul(&b).eval(&point), a.eval(&point) * b.eval(&point));
            prop_assert_eq!(a.add(&b).eval(&point), a.eval(&point) + b.eval(&point));
        }

        #[test]
        fn sparse_never_stores_zero(a in small_sparse(), b in small_sparse()) {
            let sum = a.add(&b).sub(&b);
            prop_assert!(sum.iter().all(|(_, c)| !c.is_zero()));
            prop_assert_eq!(sum, a);
        }
    }
}
