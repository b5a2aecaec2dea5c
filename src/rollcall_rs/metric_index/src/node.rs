/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! MetricNode - A node in the metric index.

use thin_vec::ThinVec;

use crate::{EntityId, MetricKey};

/// A node of the AVL tree.
///
/// Each node owns one distinct [`MetricKey`] and the IDs of every entity
/// currently at that key, in insertion order. A node is never left with an
/// empty ID set: the tree deletes it instead.
#[derive(Debug, Clone)]
pub struct MetricNode {
    pub(crate) key: MetricKey,
    pub(crate) ids: ThinVec<EntityId>,
    /// Height of the subtree rooted at this node. Leaves have height 1.
    pub(crate) height: u32,
    pub(crate) left: Option<Box<MetricNode>>,
    pub(crate) right: Option<Box<MetricNode>>,
}

impl MetricNode {
    /// Creates a new leaf holding a single entity.
    pub(crate) fn leaf(key: MetricKey, id: EntityId) -> Box<Self> {
        let mut ids = ThinVec::with_capacity(1);
        ids.push(id);
        Box::new(Self {
            key,
            ids,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// The metric value shared by every entity in this node.
    pub const fn key(&self) -> MetricKey {
        self.key
    }

    /// The entities at this node's key, in insertion order.
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    /// Height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> Option<&MetricNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MetricNode> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn subtree_height(node: Option<&MetricNode>) -> u32 {
        node.map_or(0, |n| n.height)
    }

    /// Left height minus right height.
    pub(crate) fn balance_factor(&self) -> i64 {
        i64::from(Self::subtree_height(self.left())) - i64::from(Self::subtree_height(self.right()))
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + Self::subtree_height(self.left()).max(Self::subtree_height(self.right()));
    }

    /// Rotate right around `node`: the left child becomes the subtree root.
    ///
    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  ->    A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = node.left.take() else {
            return node;
        };
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }

    /// Rotate left around `node`: the right child becomes the subtree root.
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   A   y     ->     x   C
    ///      / \          / \
    ///     B   C        A   B
    /// ```
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = node.right.take() else {
            return node;
        };
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }

    /// Recompute the height of `node` and restore the AVL invariant for the
    /// subtree rooted at it.
    ///
    /// Both children must already be balanced; this is the case on the way
    /// back up from an insertion or a deletion.
    ///
    /// # Rotation Strategy
    ///
    /// - **Left-left**: a single right rotation.
    /// - **Left-right**: rotate the left child left, then rotate right.
    /// - **Right-right**: a single left rotation.
    /// - **Right-left**: rotate the right child right, then rotate left.
    pub(crate) fn rebalance(mut node: Box<Self>) -> Box<Self> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            if let Some(left) = node.left.take() {
                node.left = Some(if left.balance_factor() < 0 {
                    Self::rotate_left(left)
                } else {
                    left
                });
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            if let Some(right) = node.right.take() {
                node.right = Some(if right.balance_factor() > 0 {
                    Self::rotate_right(right)
                } else {
                    right
                });
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }
}
