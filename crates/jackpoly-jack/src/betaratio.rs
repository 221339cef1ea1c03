//! The ratio of branching coefficients between a partition and the
//! partition obtained by removing one box.

use jackpoly_partitions::Partition;
use jackpoly_rings::Field;

use crate::hooks::embed;
use crate::JackError;

/// Computes `β(κ, μ, k, α)`, the factor picked up when a box is removed from
/// row `k` (0-based) of `mu` while expanding the outer partition `kappa`.
///
/// With `t = (k + 1) − α μₖ` the ratio is
/// `α Π u/(u + α − 1) · Π (v + α)/v · Π (w + α)/w` where
///
/// - `u_s = t + 1 − s + α κ_{s−1}` for `s = 1..=k+1`,
/// - `v_s = t − s + α μ_{s−1}` for `s = 1..=k`,
/// - `w_s = #{parts of μ ≥ s} − t − α s` for `s = 1..μₖ`.
///
/// # Errors
///
/// Returns [`JackError::SingularParameter`] if a denominator vanishes.
pub fn betaratio<K: Field>(
    kappa: &Partition,
    mu: &Partition,
    k: usize,
    alpha: &K,
) -> Result<K, JackError> {
    let row = k + 1;
    let t = embed::<K>(row) - alpha.clone() * K::from(i64::from(mu.part(k)));
    let a_minus_one = alpha.clone() - K::one();

    let mut ratio = alpha.clone();

    for s in 1..=row {
        let u = t.clone() + K::one() - embed::<K>(s)
            + alpha.clone() * K::from(i64::from(kappa.part(s - 1)));
        ratio = ratio * divide(u.clone(), &(u + a_minus_one.clone()))?;
    }

    for s in 1..row {
        let v = t.clone() - embed::<K>(s) + alpha.clone() * K::from(i64::from(mu.part(s - 1)));
        ratio = ratio * divide(v.clone() + alpha.clone(), &v)?;
    }

    for s in 1..mu.part(k) {
        let w = K::from(i64::from(mu.count_at_least(s)))
            - t.clone()
            - alpha.clone() * K::from(i64::from(s));
        ratio = ratio * divide(w.clone() + alpha.clone(), &w)?;
    }

    Ok(ratio)
}

fn divide<K: Field>(numerator: K, denominator: &K) -> Result<K, JackError> {
    numerator
        .checked_div(denominator)
        .ok_or(JackError::SingularParameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackpoly_rational_func::RationalFunction;
    use jackpoly_rings::{Ring, Q};

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts).unwrap()
    }

    #[test]
    fn test_first_box_of_a_row() {
        // β([2], [2], 0) = 2 for every α.
        for alpha in [Q::one(), Q::new(5, 2), Q::new(1, 3)] {
            assert_eq!(betaratio(&p(&[2]), &p(&[2]), 0, &alpha), Ok(Q::from_integer(2)));
        }
    }

    #[test]
    fn test_last_box_of_a_row() {
        // β([2], [1], 0) = (1 + α)/2.
        let alpha = Q::new(5, 2);
        assert_eq!(
            betaratio(&p(&[2]), &p(&[1]), 0, &alpha),
            Ok(Q::new(7, 4))
        );
    }

    #[test]
    fn test_single_box_is_one() {
        let alpha = Q::new(2, 9);
        assert_eq!(betaratio(&p(&[1]), &p(&[1]), 0, &alpha), Ok(Q::one()));
    }

    #[test]
    fn test_symbolic_matches_numeric() {
        let alpha = RationalFunction::<Q>::parameter();
        let kappa = p(&[3, 2, 1]);
        let mu = p(&[3, 1, 1]);
        let symbolic = betaratio(&kappa, &mu, 1, &alpha).unwrap();
        for value in [Q::new(1, 2), Q::from_integer(3), Q::new(7, 5)] {
            let numeric = betaratio(&kappa, &mu, 1, &value).unwrap();
            assert_eq!(symbolic.eval(&value), Some(numeric));
        }
    }

    #[test]
    fn test_singular_denominator_reported() {
        // At α = 0 the first u-factor of β([2], [2], 0) divides by zero.
        let zero = Q::zero();
        assert_eq!(
            betaratio(&p(&[2]), &p(&[2]), 0, &zero),
            Err(JackError::SingularParameter)
        );
    }
}
