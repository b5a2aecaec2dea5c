/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and rebalancing.
//!
//! Adding an ID descends to the node owning its key. If the key is already
//! present the ID joins that node's set; otherwise a new leaf is attached and
//! the ancestors are rebalanced on the way back up.

use super::MetricIndex;
use crate::{EntityId, MetricKey, MetricNode};

impl MetricIndex {
    /// Insert `id` under `key`.
    ///
    /// The caller guarantees that `id` is not stored under any other key.
    pub(crate) fn insert_new(&mut self, key: MetricKey, id: EntityId) {
        let mut added_id = false;
        let mut added_key = false;
        self.root = Some(Self::node_insert(
            self.root.take(),
            key,
            id,
            &mut added_id,
            &mut added_key,
        ));

        if added_id {
            self.stats.num_ids += 1;
        }
        if added_key {
            self.stats.num_keys += 1;
        }
    }

    /// Recursive insert implementation.
    ///
    /// Returns the new root of the subtree, which differs from `node` when a
    /// rotation happened.
    fn node_insert(
        node: Option<Box<MetricNode>>,
        key: MetricKey,
        id: EntityId,
        added_id: &mut bool,
        added_key: &mut bool,
    ) -> Box<MetricNode> {
        let Some(mut node) = node else {
            *added_id = true;
            *added_key = true;
            return MetricNode::leaf(key, id);
        };

        match key.cmp(&node.key) {
            std::cmp::Ordering::Less => {
                node.left = Some(Self::node_insert(
                    node.left.take(),
                    key,
                    id,
                    added_id,
                    added_key,
                ));
            }
            std::cmp::Ordering::Greater => {
                node.right = Some(Self::node_insert(
                    node.right.take(),
                    key,
                    id,
                    added_id,
                    added_key,
                ));
            }
            std::cmp::Ordering::Equal => {
                if !node.ids.contains(&id) {
                    node.ids.push(id);
                    *added_id = true;
                }
                // Merging into an existing node never changes the shape.
                return node;
            }
        }

        if *added_key {
            MetricNode::rebalance(node)
        } else {
            node
        }
    }
}
