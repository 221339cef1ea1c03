//! Dense memo storage for one top-level expansion.

use jackpoly_partitions::{Partition, RankIndexer};

/// A `N(κ, κ) × n` table of optional entries addressed by the rank of a
/// sub-partition ν ⊆ κ and a variable count `m`.
///
/// The empty partition has rank 0 and never reaches the table. All slots are
/// allocated when the table is created.
#[derive(Debug)]
pub(crate) struct MemoTable<T> {
    indexer: RankIndexer,
    num_vars: usize,
    slots: Vec<Option<T>>,
    hits: usize,
    stores: usize,
}

impl<T> MemoTable<T> {
    pub(crate) fn new(kappa: &Partition, num_vars: usize) -> Self {
        let indexer = RankIndexer::new(kappa);
        let len = indexer.max_rank() * num_vars;
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self {
            indexer,
            num_vars,
            slots,
            hits: 0,
            stores: 0,
        }
    }

    fn slot(&self, nu: &Partition, m: usize) -> Option<usize> {
        let rank = self.indexer.rank(nu);
        if rank == 0 || m == 0 || m > self.num_vars {
            return None;
        }
        Some((rank - 1) * self.num_vars + (m - 1))
    }

    pub(crate) fn get(&mut self, nu: &Partition, m: usize) -> Option<&T> {
        let index = self.slot(nu, m)?;
        let entry = self.slots.get(index)?.as_ref();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    pub(crate) fn insert(&mut self, nu: &Partition, m: usize, value: T) {
        if let Some(slot) = self.slot(nu, m).and_then(|i| self.slots.get_mut(i)) {
            *slot = Some(value);
            self.stores += 1;
        }
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits
    }

    pub(crate) fn stores(&self) -> usize {
        self.stores
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}
