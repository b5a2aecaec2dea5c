/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: threshold queries.
//!
//! A threshold query walks the tree in reverse in-order (descending keys),
//! pruning every subtree whose keys cannot satisfy the bound.

use super::MetricIndex;
use crate::{EntityId, MetricKey, MetricNode};

/// Which side of the threshold a query selects. Both sides are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `key >= threshold`
    AtLeast,
    /// `key <= threshold`
    AtMost,
}

impl Direction {
    /// Returns true if `key` satisfies the bound.
    pub const fn admits(self, key: MetricKey, threshold: MetricKey) -> bool {
        match self {
            Self::AtLeast => key >= threshold,
            Self::AtMost => key <= threshold,
        }
    }
}

impl MetricIndex {
    /// Collect the IDs of every entity whose key satisfies the threshold.
    ///
    /// Groups are returned in descending key order, and the IDs within a
    /// group in insertion order. Each qualifying ID appears exactly once.
    pub fn threshold(&self, threshold: MetricKey, direction: Direction) -> Vec<EntityId> {
        let mut ids = Vec::new();
        Self::collect_threshold(self.root(), threshold, direction, &mut ids);
        ids
    }

    /// Count the entities whose key satisfies the threshold.
    pub fn count_threshold(&self, threshold: MetricKey, direction: Direction) -> usize {
        self.iter()
            .filter(|(key, _)| direction.admits(*key, threshold))
            .map(|(_, ids)| ids.len())
            .sum()
    }

    /// Recursively collect matching IDs.
    ///
    /// # Pruning
    ///
    /// - The right subtree holds keys greater than the node's key. For
    ///   [`Direction::AtMost`] it can only contribute if the node's key is
    ///   strictly below the threshold.
    /// - The left subtree holds keys smaller than the node's key. For
    ///   [`Direction::AtLeast`] it can only contribute if the node's key is
    ///   strictly above the threshold.
    fn collect_threshold(
        node: Option<&MetricNode>,
        threshold: MetricKey,
        direction: Direction,
        out: &mut Vec<EntityId>,
    ) {
        let Some(node) = node else {
            return;
        };

        let visit_right = match direction {
            Direction::AtLeast => true,
            Direction::AtMost => node.key < threshold,
        };
        let visit_left = match direction {
            Direction::AtLeast => node.key > threshold,
            Direction::AtMost => true,
        };

        if visit_right {
            Self::collect_threshold(node.right(), threshold, direction, out);
        }
        if direction.admits(node.key, threshold) {
            out.extend_from_slice(node.ids());
        }
        if visit_left {
            Self::collect_threshold(node.left(), threshold, direction, out);
        }
    }
}
