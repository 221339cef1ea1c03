//! Partition-rank indexing.
//!
//! For a fixed outer partition κ every partition ν ⊆ κ gets a dense integer
//! `N(κ, ν)` by reading ν's parts, zero-padded to `l(κ)`, as the digits of a
//! mixed-radix number whose `i`-th digit has radix `κᵢ + 1`. The map is
//! injective on sub-partitions of κ and `N(κ, ν) ≤ N(κ, κ)`, so a table with
//! `N(κ, κ)` rows indexed by `N - 1` holds every nonempty ν.

use smallvec::SmallVec;

use crate::Partition;

/// Mixed-radix ranks of sub-partitions of one outer partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankIndexer {
    /// `place[i] = Π_{j>i} (κⱼ + 1)`.
    place: SmallVec<[usize; 8]>,
    max_rank: usize,
}

impl RankIndexer {
    /// Builds the indexer for outer partition `kappa`.
    #[must_use]
    pub fn new(kappa: &Partition) -> Self {
        let mut place: SmallVec<[usize; 8]> = SmallVec::from_elem(1, kappa.len());
        for i in (0..kappa.len().saturating_sub(1)).rev() {
            place[i] = place[i + 1] * (kappa.part(i + 1) as usize + 1);
        }

        let mut indexer = Self { place, max_rank: 0 };
        indexer.max_rank = indexer.rank(kappa);
        indexer
    }

    /// Returns `N(κ, ν)`.
    ///
    /// Parts of `nu` beyond `l(κ)` are ignored; callers only pass
    /// sub-partitions of κ.
    #[must_use]
    pub fn rank(&self, nu: &Partition) -> usize {
        nu.parts()
            .iter()
            .zip(&self.place)
            .map(|(&p, &w)| p as usize * w)
            .sum()
    }

    /// Returns `N(κ, κ)`, the number of memo rows needed.
    #[must_use]
    pub fn max_rank(&self) -> usize {
        self.max_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts).unwrap()
    }

    #[test]
    fn test_place_values() {
        // κ = [3, 2, 1]: place values (2+1)(1+1) = 6, (1+1) = 2, 1
        let idx = RankIndexer::new(&p(&[3, 2, 1]));
        assert_eq!(idx.rank(&p(&[1])), 6);
        assert_eq!(idx.rank(&p(&[1, 1])), 8);
        assert_eq!(idx.rank(&p(&[2, 1, 1])), 15);
        assert_eq!(idx.max_rank(), 3 * 6 + 2 * 2 + 1);
    }

    #[test]
    fn test_empty_outer() {
        let idx = RankIndexer::new(&Partition::empty());
        assert_eq!(idx.max_rank(), 0);
        assert_eq!(idx.rank(&Partition::empty()), 0);
    }

    #[test]
    fn test_single_row() {
        let idx = RankIndexer::new(&p(&[4]));
        assert_eq!(idx.max_rank(), 4);
        assert_eq!(idx.rank(&p(&[2])), 2);
    }
}
