//! The memoized box-removal recursion.
//!
//! A polynomial indexed by κ in `n` variables is expanded by splitting off
//! the last variable `x_m`: every way of stripping a horizontal strip of
//! boxes from ν contributes `x_m^{boxes}` times the expansion of what is left
//! in `m − 1` variables, weighted by the product of branching factors of the
//! removed boxes. Rows are visited left to right with a resume cursor `k` so
//! each strip is produced once.

use jackpoly_partitions::Partition;
use jackpoly_poly::{Monomial, SparsePoly};
use jackpoly_rings::Ring;
use tracing::{debug, trace};

use crate::memo::MemoTable;
use crate::weights::BoxRemoval;
use crate::JackError;

/// State of one top-level expansion.
pub(crate) struct Expansion<'a, W: BoxRemoval> {
    weights: &'a W,
    num_vars: usize,
    memo: MemoTable<SparsePoly<W::Coeff>>,
    calls: usize,
}

impl<'a, W: BoxRemoval> Expansion<'a, W> {
    /// Creates a context for expanding `kappa` in `num_vars` variables.
    pub(crate) fn new(weights: &'a W, kappa: &Partition, num_vars: usize) -> Self {
        Self {
            weights,
            num_vars,
            memo: MemoTable::new(kappa, num_vars),
            calls: 0,
        }
    }

    /// Expands `kappa` in all variables. The result is J-normalized.
    pub(crate) fn run(mut self, kappa: &Partition) -> Result<SparsePoly<W::Coeff>, JackError> {
        let result = self.expand(self.num_vars, 0, kappa, kappa, &W::Coeff::one())?;
        debug!(
            kappa = %kappa,
            n = self.num_vars,
            calls = self.calls,
            memo_hits = self.memo.hits(),
            memo_stores = self.memo.stores(),
            memo_slots = self.memo.capacity(),
            terms = result.len(),
            "expansion finished"
        );
        Ok(result)
    }

    /// `x_m^e` in the full variable set.
    fn power_of_last(&self, m: usize, e: u32) -> Monomial {
        Monomial::var_pow(m - 1, e, self.num_vars)
    }

    fn expand(
        &mut self,
        m: usize,
        k: usize,
        mu: &Partition,
        nu: &Partition,
        beta: &W::Coeff,
    ) -> Result<SparsePoly<W::Coeff>, JackError> {
        self.calls += 1;

        if nu.is_empty() || m == 0 {
            return Ok(SparsePoly::one(self.num_vars));
        }
        if nu.len() > m {
            return Ok(SparsePoly::zero(self.num_vars));
        }
        if m == 1 {
            let top = nu.first();
            return Ok(SparsePoly::monomial(
                self.power_of_last(1, top),
                self.weights.single_row(top),
            ));
        }

        if k == 0 {
            if let Some(done) = self.memo.get(nu, m) {
                trace!(nu = %nu, m, "memo hit");
                return Ok(done.clone());
            }
        }

        let one = W::Coeff::one();
        let mut s = self.expand(m - 1, 0, nu, nu, &one)?.mul_monomial(
            &self.power_of_last(m, mu.size() - nu.size()),
            beta,
        );

        for i in k.max(1)..=nu.len() {
            let row = i - 1;
            let Some(smaller) = nu.remove_box(row) else {
                continue;
            };
            let gamma = beta.clone() * self.weights.branch(mu, nu, row)?;
            trace!(nu = %nu, m, row, "remove box");

            if nu.part(row) > 1 {
                s += &self.expand(m, i, mu, &smaller, &gamma)?;
            } else {
                let rest = self.expand(m - 1, 0, &smaller, &smaller, &one)?;
                s += &rest.mul_monomial(&self.power_of_last(m, mu.size() - smaller.size()), &gamma);
            }
        }

        if k == 0 {
            self.memo.insert(nu, m, s.clone());
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::{JackWeights, SchurWeights};
    use jackpoly_rings::{Q, Z};

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts).unwrap()
    }

    fn jack(n: usize, kappa: &[u32], alpha: Q) -> SparsePoly<Q> {
        let kappa = p(kappa);
        let weights = JackWeights::new(alpha);
        Expansion::new(&weights, &kappa, n).run(&kappa).unwrap()
    }

    #[test]
    fn test_one_variable() {
        // J_[3](x) = (1 + α)(1 + 2α) x³
        let poly = jack(1, &[3], Q::from_integer(2));
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.coeff_of(&[3]), Q::from_integer(15));
    }

    #[test]
    fn test_too_many_rows_vanish() {
        assert!(jack(2, &[1, 1, 1], Q::one()).is_zero());
    }

    #[test]
    fn test_single_row_in_two_variables() {
        // J_[2] = (1 + α) m_2 + 2 m_11
        let alpha = Q::new(5, 2);
        let poly = jack(2, &[2], alpha);
        assert_eq!(poly.coeff_of(&[2, 0]), Q::new(7, 2));
        assert_eq!(poly.coeff_of(&[0, 2]), Q::new(7, 2));
        assert_eq!(poly.coeff_of(&[1, 1]), Q::from_integer(2));
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_column_in_three_variables() {
        // J_[1,1,1] = 6 m_111 for every α.
        let poly = jack(3, &[1, 1, 1], Q::new(3, 11));
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.coeff_of(&[1, 1, 1]), Q::from_integer(6));
    }

    #[test]
    fn test_schur_two_one() {
        let kappa = p(&[2, 1]);
        let poly = Expansion::new(&SchurWeights, &kappa, 3).run(&kappa).unwrap();
        // s_[2,1] = m_21 + 2 m_111
        assert_eq!(poly.coeff_of(&[2, 1, 0]), Z::one());
        assert_eq!(poly.coeff_of(&[0, 1, 2]), Z::one());
        assert_eq!(poly.coeff_of(&[1, 1, 1]), Z::new(2));
        assert_eq!(poly.len(), 7);
    }

    #[test]
    fn test_memo_reused() {
        let kappa = p(&[2, 1, 1]);
        let weights = JackWeights::new(Q::one());
        let mut expansion = Expansion::new(&weights, &kappa, 4);
        expansion
            .expand(4, 0, &kappa, &kappa, &Q::one())
            .unwrap();
        assert!(expansion.memo.stores() > 0);
        assert!(expansion.memo.hits() > 0);
    }
}
