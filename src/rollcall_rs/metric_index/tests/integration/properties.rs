/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the metric index using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use std::collections::{BTreeSet, HashMap};

    use metric_index::{Direction, MetricIndex};

    proptest::proptest! {
        #[test]
        fn prop_bulk_build_keeps_every_id_once(
            keys in proptest::collection::vec(0u32..50, 0..200)
        ) {
            // IDs are distinct: 1, 2, 3, ...
            let pairs: Vec<(u32, u32)> =
                keys.iter().enumerate().map(|(i, k)| (*k, i as u32 + 1)).collect();
            let index = MetricIndex::from_pairs(pairs.iter().copied());
            index.check_invariants();

            let found = index.threshold(0, Direction::AtLeast);
            let unique: BTreeSet<u32> = found.iter().copied().collect();
            assert_eq!(found.len(), unique.len(), "duplicate IDs in {found:?}");
            assert_eq!(unique, pairs.iter().map(|(_, id)| *id).collect::<BTreeSet<_>>());
        }

        #[test]
        fn prop_updates_preserve_avl_invariants(
            updates in proptest::collection::vec((1u32..40, 0u32..30), 1..300)
        ) {
            let mut index = MetricIndex::new();
            let mut model: HashMap<u32, u32> = HashMap::new();

            for (id, key) in updates {
                index.update(id, key);
                model.insert(id, key);
                index.check_invariants();
            }

            assert_eq!(index.len(), model.len());
            for (id, key) in &model {
                assert_eq!(index.key_of(*id), Some(*key));
            }
            let keys: Vec<u32> = index.iter().map(|(key, _)| key).collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys not strictly increasing: {keys:?}");
        }

        #[test]
        fn prop_threshold_halves_partition_ids(
            keys in proptest::collection::vec(0u32..100, 0..150),
            threshold in 1u32..100,
        ) {
            let index: MetricIndex =
                keys.iter().enumerate().map(|(i, k)| (*k, i as u32 + 1)).collect();

            let above: BTreeSet<u32> =
                index.threshold(threshold, Direction::AtLeast).into_iter().collect();
            let below: BTreeSet<u32> =
                index.threshold(threshold - 1, Direction::AtMost).into_iter().collect();

            assert!(above.is_disjoint(&below));
            assert_eq!(above.len() + below.len(), index.len());
        }

        #[test]
        fn prop_update_twice_equals_once(
            keys in proptest::collection::vec(0u32..20, 1..50),
            id in 1u32..60,
            new_key in 0u32..20,
        ) {
            let mut once: MetricIndex =
                keys.iter().enumerate().map(|(i, k)| (*k, i as u32 + 1)).collect();
            once.update(id, new_key);
            let mut twice = once.clone();
            twice.update(id, new_key);
            assert_eq!(once, twice);
        }
    }
}
