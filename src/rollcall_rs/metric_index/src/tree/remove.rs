/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Delete path: removing an ID and deleting emptied nodes.

use super::MetricIndex;
use crate::{EntityId, MetricKey, MetricNode};

impl MetricIndex {
    /// Remove `id` from the node at `key`.
    ///
    /// If that leaves the node without IDs, the node is deleted and the tree
    /// rebalanced. Returns false if `id` wasn't stored under `key`.
    pub(crate) fn remove_id(&mut self, key: MetricKey, id: EntityId) -> bool {
        let mut removed_id = false;
        let mut removed_key = false;
        self.root = Self::node_remove_id(
            self.root.take(),
            key,
            id,
            &mut removed_id,
            &mut removed_key,
        );

        if removed_id {
            self.stats.num_ids -= 1;
        }
        if removed_key {
            self.stats.num_keys -= 1;
        }
        removed_id
    }

    fn node_remove_id(
        node: Option<Box<MetricNode>>,
        key: MetricKey,
        id: EntityId,
        removed_id: &mut bool,
        removed_key: &mut bool,
    ) -> Option<Box<MetricNode>> {
        let mut node = node?;

        match key.cmp(&node.key) {
            std::cmp::Ordering::Less => {
                node.left = Self::node_remove_id(node.left.take(), key, id, removed_id, removed_key);
            }
            std::cmp::Ordering::Greater => {
                node.right =
                    Self::node_remove_id(node.right.take(), key, id, removed_id, removed_key);
            }
            std::cmp::Ordering::Equal => {
                let Some(position) = node.ids.iter().position(|&stored| stored == id) else {
                    return Some(node);
                };
                // Keep the remaining IDs in insertion order.
                node.ids.remove(position);
                *removed_id = true;
                if !node.ids.is_empty() {
                    return Some(node);
                }
                *removed_key = true;
                return Self::delete_node(node);
            }
        }

        if *removed_key {
            Some(MetricNode::rebalance(node))
        } else {
            Some(node)
        }
    }

    /// Unlink `node` from the tree, returning the subtree that replaces it.
    ///
    /// A node with two children takes over the key and IDs of its in-order
    /// successor, which is then unlinked from the right subtree instead.
    fn delete_node(mut node: Box<MetricNode>) -> Option<Box<MetricNode>> {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (rest, successor) = Self::take_min(right);
                let MetricNode { key, ids, .. } = *successor;
                node.key = key;
                node.ids = ids;
                node.left = Some(left);
                node.right = rest;
                Some(MetricNode::rebalance(node))
            }
        }
    }

    /// Detach the minimum node of the subtree rooted at `node`.
    ///
    /// Returns the rebalanced remainder of the subtree and the detached node.
    fn take_min(mut node: Box<MetricNode>) -> (Option<Box<MetricNode>>, Box<MetricNode>) {
        match node.left.take() {
            Some(left) => {
                let (rest, min) = Self::take_min(left);
                node.left = rest;
                (Some(MetricNode::rebalance(node)), min)
            }
            None => (node.right.take(), node),
        }
    }
}
