//! Generalized hook lengths and the normalization scalars built from them.
//!
//! For a cell `(i, j)` of the Young diagram of μ (0-based) let
//! `h = μ′ⱼ − i + α(μᵢ − j)`. The lower hook is `h − α` and the upper hook is
//! `h − 1`; these are the classical `α`-hooks `l + 1 + α·a` and `l + α(a + 1)`
//! in terms of leg `l` and arm `a`.

use jackpoly_partitions::Partition;
use jackpoly_rings::{Field, Ring};

use crate::JackError;

/// Embeds a small non-negative integer into a ring.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn embed<K: Ring>(n: usize) -> K {
    K::from(n as i64)
}

/// Lower and upper hook lengths of every cell, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookLengths<K> {
    /// `h − α` per cell.
    pub lower: Vec<K>,
    /// `h − 1` per cell.
    pub upper: Vec<K>,
}

impl<K: Field> HookLengths<K> {
    /// Computes the hook lengths of `mu` at parameter `alpha`.
    #[must_use]
    pub fn new(mu: &Partition, alpha: &K) -> Self {
        let conjugate = mu.conjugate();
        let (lower, upper) = mu
            .cells()
            .map(|(i, j)| {
                let leg = K::from(i64::from(conjugate.part(j as usize))) - embed::<K>(i);
                let arm = K::from(i64::from(mu.part(i)) - i64::from(j));
                let h = leg + alpha.clone() * arm;
                (h.clone() - alpha.clone(), h - K::one())
            })
            .unzip();
        Self { lower, upper }
    }

    /// `Π (h − α)`.
    #[must_use]
    pub fn lower_product(&self) -> K {
        product(&self.lower)
    }

    /// `Π (h − 1)`.
    #[must_use]
    pub fn upper_product(&self) -> K {
        product(&self.upper)
    }
}

fn product<K: Ring>(values: &[K]) -> K {
    values.iter().fold(K::one(), |acc, v| acc * v.clone())
}

/// `C(μ, α) = α^|μ| |μ|! / (Π upper · Π lower)`.
///
/// # Errors
///
/// Returns [`JackError::SingularParameter`] if a hook vanishes.
pub fn jack_c_coefficient<K: Field>(mu: &Partition, alpha: &K) -> Result<K, JackError> {
    let hooks = HookLengths::new(mu, alpha);
    let size = mu.size();
    let factorial = (1..=size).fold(K::one(), |acc, i| acc * K::from(i64::from(i)));
    let numerator = alpha.pow(size) * factorial;
    numerator
        .checked_div(&(hooks.upper_product() * hooks.lower_product()))
        .ok_or(JackError::SingularParameter)
}

/// `P(μ, α) = 1 / Π lower`.
///
/// # Errors
///
/// Returns [`JackError::SingularParameter`] if a lower hook vanishes.
pub fn jack_p_coefficient<K: Field>(mu: &Partition, alpha: &K) -> Result<K, JackError> {
    HookLengths::new(mu, alpha)
        .lower_product()
        .inv()
        .ok_or(JackError::SingularParameter)
}

/// `Q(μ, α) = 1 / Π upper`.
///
/// # Errors
///
/// Returns [`JackError::SingularParameter`] if an upper hook vanishes.
pub fn jack_q_coefficient<K: Field>(mu: &Partition, alpha: &K) -> Result<K, JackError> {
    HookLengths::new(mu, alpha)
        .upper_product()
        .inv()
        .ok_or(JackError::SingularParameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackpoly_rings::Q;

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts).unwrap()
    }

    #[test]
    fn test_hooks_of_two_one() {
        // Cells (0,0), (0,1), (1,0) of [2, 1].
        let alpha = Q::from_integer(2);
        let hooks = HookLengths::new(&p(&[2, 1]), &alpha);
        assert_eq!(hooks.lower, vec![Q::from_integer(4), Q::from_integer(1), Q::from_integer(1)]);
        assert_eq!(hooks.upper, vec![Q::from_integer(5), Q::from_integer(2), Q::from_integer(2)]);
    }

    #[test]
    fn test_alpha_one_gives_classical_hooks() {
        let one = Q::one();
        let hooks = HookLengths::new(&p(&[3, 1]), &one);
        assert_eq!(
            hooks.lower,
            vec![Q::from_integer(4), Q::from_integer(2), Q::from_integer(1), Q::from_integer(1)]
        );
        assert_eq!(hooks.lower, hooks.upper);
    }

    #[test]
    fn test_empty_partition_coefficients_are_one() {
        let alpha = Q::new(3, 7);
        let empty = Partition::empty();
        assert_eq!(jack_c_coefficient(&empty, &alpha), Ok(Q::one()));
        assert_eq!(jack_p_coefficient(&empty, &alpha), Ok(Q::one()));
        assert_eq!(jack_q_coefficient(&empty, &alpha), Ok(Q::one()));
    }

    #[test]
    fn test_single_row() {
        // J_[2] = (1 + α) m_2 + 2 m_11, so P = 1/(1 + α).
        let alpha = Q::from_integer(2);
        let two = p(&[2]);
        assert_eq!(jack_p_coefficient(&two, &alpha), Ok(Q::new(1, 3)));
        assert_eq!(jack_q_coefficient(&two, &alpha), Ok(Q::new(1, 8)));
        assert_eq!(jack_c_coefficient(&two, &alpha), Ok(Q::new(1, 3)));
    }

    #[test]
    fn test_singular_parameter() {
        // At α = 0 the upper hook of the cell (0, 1) of [2] vanishes.
        let zero = Q::zero();
        assert_eq!(
            jack_q_coefficient(&p(&[2]), &zero),
            Err(JackError::SingularParameter)
        );
    }
}
