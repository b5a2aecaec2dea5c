/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A small map from a byte to a child node, kept sorted by byte.

use thin_vec::ThinVec;

use crate::node::Node;

/// Children of a [`Node`], ordered by their byte.
///
/// Most nodes in a name trie are leaves or have a single child, so the map is
/// a sorted vector searched with binary search rather than a 256-slot table.
/// Leaves only pay for a single pointer.
#[derive(Debug, Default, Clone)]
pub(crate) struct ChildMap {
    entries: ThinVec<(u8, Node)>,
}

impl ChildMap {
    pub(crate) fn new() -> Self {
        Self {
            entries: ThinVec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get(&self, byte: u8) -> Option<&Node> {
        let index = self.entries.binary_search_by_key(&byte, |e| e.0).ok()?;
        Some(&self.entries[index].1)
    }

    /// Returns the child for `byte`, creating an empty one if needed.
    ///
    /// `created` is set to true if a new child was inserted.
    pub(crate) fn get_or_create(&mut self, byte: u8, created: &mut bool) -> &mut Node {
        let index = match self.entries.binary_search_by_key(&byte, |e| e.0) {
            Ok(index) => index,
            Err(index) => {
                self.entries.insert(index, (byte, Node::new()));
                *created = true;
                index
            }
        };
        &mut self.entries[index].1
    }

    /// Iterate over `(byte, child)` pairs in ascending byte order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, &Node)> {
        self.entries.iter().map(|(byte, node)| (*byte, node))
    }
}
