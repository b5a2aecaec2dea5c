/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Invariant checks for the metric index.
//!
//! With the `unittest` feature (and in this crate's unit tests) these checks
//! run after every mutation to catch structural violations early.

use std::collections::HashSet;

use super::{IndexStats, MetricIndex};
use crate::{EntityId, MetricKey, MetricNode};

impl MetricIndex {
    /// Verify every structural invariant of the tree, panicking on the first
    /// violation:
    ///
    /// - keys are strictly increasing in in-order traversal
    /// - the heights of sibling subtrees differ by at most one
    /// - stored heights match the actual subtree heights
    /// - no node has an empty ID set
    /// - every ID is stored exactly once across the whole tree
    /// - the memoized counters match the tree contents
    pub fn check_invariants(&self) {
        let mut seen = HashSet::new();
        let mut actual = IndexStats::default();
        Self::check_node(self.root(), None, None, &mut seen, &mut actual);

        assert_eq!(
            actual, self.stats,
            "stats mismatch: computed={actual:?}, memoized={:?}",
            self.stats
        );
    }

    /// Returns the height of the subtree rooted at `node`.
    fn check_node(
        node: Option<&MetricNode>,
        lower: Option<MetricKey>,
        upper: Option<MetricKey>,
        seen: &mut HashSet<EntityId>,
        stats: &mut IndexStats,
    ) -> u32 {
        let Some(node) = node else {
            return 0;
        };

        if let Some(lower) = lower {
            assert!(
                node.key > lower,
                "key {} is not greater than its lower bound {lower}",
                node.key
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.key < upper,
                "key {} is not less than its upper bound {upper}",
                node.key
            );
        }
        assert!(!node.ids.is_empty(), "node for key {} has no IDs", node.key);
        for id in node.ids() {
            assert!(
                seen.insert(*id),
                "ID {id} is stored more than once (again under key {})",
                node.key
            );
        }
        stats.num_keys += 1;
        stats.num_ids += node.ids.len();

        let left_height = Self::check_node(node.left(), lower, Some(node.key), seen, stats);
        let right_height = Self::check_node(node.right(), Some(node.key), upper, seen, stats);

        assert!(
            left_height.abs_diff(right_height) <= 1,
            "node for key {} is unbalanced: left height {left_height}, right height {right_height}",
            node.key
        );
        let height = 1 + left_height.max(right_height);
        assert_eq!(
            node.height, height,
            "node for key {} stores height {}, actual height is {height}",
            node.key, node.height
        );
        height
    }
}
