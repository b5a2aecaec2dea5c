/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{EntityId, MetricKey, MetricNode};

/// In-order iterator over the `(key, ids)` groups of a
/// [`MetricIndex`](crate::MetricIndex), in ascending key order.
///
/// Uses an explicit stack of pending ancestors, so memory use is bounded by
/// the tree height.
#[derive(Debug, Clone)]
pub struct Iter<'tree> {
    stack: Vec<&'tree MetricNode>,
}

impl<'tree> Iter<'tree> {
    pub(crate) fn new(root: Option<&'tree MetricNode>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(root.map_or(0, |r| r.height() as usize)),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'tree MetricNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'tree> Iterator for Iter<'tree> {
    type Item = (MetricKey, &'tree [EntityId]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.ids()))
    }
}
