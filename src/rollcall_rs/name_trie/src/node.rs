/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::fmt;

use thin_vec::ThinVec;

use crate::EntityId;
use crate::children::ChildMap;

/// A node in a [`NameTrie`](crate::NameTrie).
///
/// Each node corresponds to one byte of a name; the path from the root spells
/// out the name's prefix. A node is terminal when at least one name ends at
/// it, i.e. when its ID set is non-empty.
#[derive(Debug, Default, Clone)]
pub(crate) struct Node {
    pub(crate) children: ChildMap,
    /// IDs of the entities whose name ends here, in insertion order.
    pub(crate) ids: ThinVec<EntityId>,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            children: ChildMap::new(),
            ids: ThinVec::new(),
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Follow `path` byte by byte, returning the node it ends at.
    pub(crate) fn descend(&self, path: &[u8]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, byte| node.children.get(*byte))
    }

    /// Render the subtree rooted at `self`, one node per line.
    ///
    /// `path` is the name prefix that leads to this node.
    pub(crate) fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, path: &[u8]) -> fmt::Result {
        // (depth, byte leading to the node, the node, its full path)
        let mut stack = vec![(0usize, None, self, path.to_vec())];

        while let Some((depth, byte, node, path)) = stack.pop() {
            let data_repr = if node.is_terminal() {
                format!("({:?})", node.ids.as_slice())
            } else {
                "(-)".to_string()
            };
            let path_repr = String::from_utf8_lossy(&path);

            match byte {
                None => writeln!(f, "\"{path_repr}\" {data_repr}")?,
                Some(byte) => {
                    let whitespace = " ".repeat(depth * 2);
                    let byte_repr = String::from_utf8_lossy(&[byte]).into_owned();
                    writeln!(f, "{whitespace}↳{byte_repr}–––\"{path_repr}\" {data_repr}")?
                }
            }

            for (child_byte, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(child_byte);
                stack.push((depth + 1, Some(child_byte), child, child_path));
            }
        }
        Ok(())
    }
}
