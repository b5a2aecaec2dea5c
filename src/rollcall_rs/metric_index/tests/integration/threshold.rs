/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for threshold queries.

use metric_index::{Direction, MetricIndex};

fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
    ids.sort_unstable();
    ids
}

#[test]
fn test_threshold_on_empty_index() {
    let index = MetricIndex::new();
    assert!(index.threshold(0, Direction::AtLeast).is_empty());
    assert!(index.threshold(u32::MAX, Direction::AtMost).is_empty());
}

#[test]
fn test_threshold_scenario() {
    let index = MetricIndex::from_pairs([(3, 101), (5, 102), (3, 103)]);

    assert_eq!(
        sorted(index.threshold(3, Direction::AtLeast)),
        vec![101, 102, 103]
    );
    assert_eq!(index.threshold(5, Direction::AtLeast), vec![102]);
    assert!(index.threshold(6, Direction::AtLeast).is_empty());
}

#[test]
fn test_threshold_bounds_are_inclusive() {
    let index = MetricIndex::from_pairs([(1, 1), (2, 2), (3, 3)]);

    assert_eq!(sorted(index.threshold(2, Direction::AtLeast)), vec![2, 3]);
    assert_eq!(sorted(index.threshold(2, Direction::AtMost)), vec![1, 2]);
    assert_eq!(index.threshold(0, Direction::AtMost), Vec::<u32>::new());
}

#[test]
fn test_threshold_orders_groups_by_descending_key() {
    let index = MetricIndex::from_pairs([(10, 1), (30, 2), (20, 3), (30, 4), (5, 5)]);

    assert_eq!(index.threshold(10, Direction::AtLeast), vec![2, 4, 3, 1]);
    assert_eq!(index.threshold(20, Direction::AtMost), vec![3, 1, 5]);
}

#[test]
fn test_count_threshold_matches_query() {
    let index: MetricIndex = (0..100).map(|i| (i % 17, i + 1)).collect();
    for t in 0..20 {
        for direction in [Direction::AtLeast, Direction::AtMost] {
            assert_eq!(
                index.count_threshold(t, direction),
                index.threshold(t, direction).len()
            );
        }
    }
}

#[test]
fn test_threshold_after_updates() {
    let mut index = MetricIndex::from_pairs([(0, 1), (0, 2), (0, 3)]);
    index.update(2, 1);
    index.update(3, 2);
    index.update(3, 3);

    assert_eq!(index.threshold(1, Direction::AtLeast), vec![3, 2]);
    assert_eq!(index.threshold(0, Direction::AtMost), vec![1]);
}
