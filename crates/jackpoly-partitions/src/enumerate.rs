//! Enumeration of the partitions of an integer.

use crate::partition::{Partition, Parts};

/// Iterator over the partitions of `n` in reverse lexicographic order,
/// from `[n]` down to `[1, 1, ..., 1]`.
#[derive(Clone, Debug)]
pub struct Partitions {
    next: Option<Partition>,
}

/// Returns an iterator over all partitions of `n`.
///
/// The partitions of 0 are the single empty partition.
#[must_use]
pub fn partitions_of(n: u32) -> Partitions {
    let first = if n == 0 {
        Partition::empty()
    } else {
        Partition::from_parts_unchecked(Parts::from_slice(&[n]))
    };
    Partitions { next: Some(first) }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let current = self.next.take()?;
        let parts = current.parts();

        // Lower the last part above 1 and refill the tail greedily.
        if let Some(idx) = parts.iter().rposition(|&p| p > 1) {
            let top = parts[idx] - 1;
            let ones = u32::try_from(parts.len() - idx - 1).unwrap_or(u32::MAX);
            let mut rest = ones + 1;

            let mut succ: Parts = parts[..idx].iter().copied().collect();
            succ.push(top);
            while rest > 0 {
                let take = rest.min(top);
                succ.push(take);
                rest -= take;
            }
            self.next = Some(Partition::from_parts_unchecked(succ));
        }

        Some(current)
    }
}
