//! Coefficient rules that specialize the box-removal recursion.

use jackpoly_partitions::Partition;
use jackpoly_rings::{Field, Ring, Z};

use crate::betaratio::betaratio;
use crate::JackError;

/// Supplies the coefficients of the box-removal recursion.
///
/// The recursion itself is shared by every polynomial family; an
/// implementation only decides what a one-variable row contributes and what
/// factor a removed box carries.
pub trait BoxRemoval {
    /// Coefficient domain of the resulting polynomial.
    type Coeff: Ring;

    /// Coefficient of `x₁^part` when a single variable is left.
    fn single_row(&self, part: u32) -> Self::Coeff;

    /// Factor picked up by removing a box from row `row` (0-based) of `nu`
    /// while expanding `mu`.
    ///
    /// # Errors
    ///
    /// Returns [`JackError::SingularParameter`] if the factor is undefined.
    fn branch(&self, mu: &Partition, nu: &Partition, row: usize)
        -> Result<Self::Coeff, JackError>;
}

/// Jack weights at a fixed parameter, over any field.
#[derive(Clone, Debug)]
pub struct JackWeights<K> {
    alpha: K,
}

impl<K: Field> JackWeights<K> {
    /// Creates the weights for parameter `alpha`.
    #[must_use]
    pub fn new(alpha: K) -> Self {
        Self { alpha }
    }

    /// Returns the parameter.
    #[must_use]
    pub fn alpha(&self) -> &K {
        &self.alpha
    }
}

impl<K: Field> BoxRemoval for JackWeights<K> {
    type Coeff = K;

    fn single_row(&self, part: u32) -> K {
        // Π_{i=1}^{part-1} (α i + 1)
        (1..part).fold(K::one(), |acc, i| {
            acc * (self.alpha.clone() * K::from(i64::from(i)) + K::one())
        })
    }

    fn branch(&self, mu: &Partition, nu: &Partition, row: usize) -> Result<K, JackError> {
        betaratio(mu, nu, row, &self.alpha)
    }
}

/// Schur weights: every coefficient is one.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchurWeights;

impl BoxRemoval for SchurWeights {
    type Coeff = Z;

    fn single_row(&self, _part: u32) -> Z {
        Z::one()
    }

    fn branch(&self, _mu: &Partition, _nu: &Partition, _row: usize) -> Result<Z, JackError> {
        Ok(Z::one())
    }
}
