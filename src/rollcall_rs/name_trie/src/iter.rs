/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::EntityId;
use crate::node::Node;

/// Iterator over the `(name, ids)` pairs of a [`NameTrie`](crate::NameTrie),
/// in lexicographic name order.
///
/// Only terminal nodes are yielded. The name is rebuilt from the path that
/// leads to each node.
#[derive(Debug, Clone)]
pub struct Iter<'tm> {
    stack: Vec<(Vec<u8>, &'tm Node)>,
}

impl<'tm> Iter<'tm> {
    pub(crate) fn new(root: &'tm Node) -> Self {
        Self {
            stack: vec![(Vec::new(), root)],
        }
    }
}

impl<'tm> Iterator for Iter<'tm> {
    type Item = (Vec<u8>, &'tm [EntityId]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            for (byte, child) in node.children.iter().rev() {
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(byte);
                self.stack.push((child_path, child));
            }
            if node.is_terminal() {
                return Some((path, node.ids.as_slice()));
            }
        }
        None
    }
}
