/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use metric_index::MetricIndex;

#[test]
fn test_iter_empty() {
    let index = MetricIndex::new();
    assert_eq!(index.iter().count(), 0);
}

#[test]
fn test_iter_ascending_groups() {
    let index = MetricIndex::from_pairs([(9, 1), (3, 2), (6, 3), (3, 4)]);
    let groups: Vec<(u32, Vec<u32>)> = index
        .iter()
        .map(|(key, ids)| (key, ids.to_vec()))
        .collect();
    assert_eq!(
        groups,
        vec![(3, vec![2, 4]), (6, vec![3]), (9, vec![1])]
    );
}

#[test]
fn test_into_iter_for_reference() {
    let index = MetricIndex::from_pairs([(2, 1), (1, 2)]);
    let mut keys = Vec::new();
    for (key, _) in &index {
        keys.push(key);
    }
    assert_eq!(keys, vec![1, 2]);
}
