//! Property-based tests for partitions and rank indexing.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{partitions_of, Partition, RankIndexer};

    fn partition() -> impl Strategy<Value = Partition> {
        proptest::collection::vec(0u32..5, 0..5).prop_map(|mut parts| {
            parts.sort_unstable_by(|a, b| b.cmp(a));
            Partition::new(&parts).unwrap()
        })
    }

    fn contained_in(nu: &Partition, kappa: &Partition) -> bool {
        nu.len() <= kappa.len() && nu.parts().iter().zip(kappa.parts()).all(|(a, b)| a <= b)
    }

    proptest! {
        #[test]
        fn conjugate_is_involution(lambda in partition()) {
            let conj = lambda.conjugate();
            prop_assert_eq!(conj.size(), lambda.size());
            prop_assert_eq!(conj.len() as u32, lambda.first());
            prop_assert_eq!(conj.conjugate(), lambda);
        }

        #[test]
        fn removed_boxes_leave_partitions(lambda in partition()) {
            for i in 0..=lambda.len() {
                match lambda.remove_box(i) {
                    Some(smaller) => {
                        prop_assert!(lambda.is_removable(i));
                        prop_assert_eq!(smaller.size() + 1, lambda.size());
                        prop_assert!(smaller.parts().windows(2).all(|w| w[0] >= w[1]));
                        prop_assert!(smaller.parts().iter().all(|&p| p > 0));
                        let rebuilt = Partition::new(smaller.parts());
                        prop_assert_eq!(rebuilt, Ok(smaller.clone()));
                    }
                    None => prop_assert!(!lambda.is_removable(i)),
                }
            }
        }

        #[test]
        fn rank_is_injective_on_subpartitions(kappa in partition()) {
            let indexer = RankIndexer::new(&kappa);
            let mut seen = HashSet::new();
            for size in 1..=kappa.size() {
                for nu in partitions_of(size).filter(|nu| contained_in(nu, &kappa)) {
                    let rank = indexer.rank(&nu);
                    prop_assert!(rank >= 1 && rank <= indexer.max_rank());
                    prop_assert!(seen.insert(rank), "duplicate rank {} for {}", rank, nu);
                }
            }
        }
    }
}
