/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A byte-wise prefix trie mapping names to entity IDs.
//!
//! Names are stored as raw bytes: no case folding or Unicode normalization
//! happens, so `"ann"` and `"Ann"` are distinct names. Several entities may
//! share the same exact name, and the same entity may be registered under
//! several names.
//!
//! # Example
//!
//! ```
//! use name_trie::NameTrie;
//!
//! let mut trie = NameTrie::new();
//! trie.insert("Ann", 1);
//! trie.insert("Anna", 2);
//! trie.insert("Bob", 3);
//!
//! assert_eq!(trie.prefix_search("An"), vec![1, 2]);
//! assert_eq!(trie.prefix_search("B"), vec![3]);
//! assert!(trie.prefix_search("Z").is_empty());
//! ```

mod children;
mod iter;
mod node;

use std::collections::HashSet;
use std::fmt;

pub use iter::Iter;
use node::Node;

/// A positive integer uniquely identifying one enrolled entity.
pub type EntityId = u32;

/// A prefix trie over names, one node per byte.
#[derive(Default, Clone)]
pub struct NameTrie {
    root: Node,
    /// Number of nodes below the root.
    n_nodes: usize,
    /// Number of distinct names with at least one ID.
    n_names: usize,
    /// Number of `(name, id)` pairs.
    n_entries: usize,
}

impl NameTrie {
    /// Create a new, empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            n_nodes: 0,
            n_names: 0,
            n_entries: 0,
        }
    }

    /// Register `id` under `name`.
    ///
    /// Returns false, leaving the trie untouched, if that exact pair is
    /// already present or if `name` is empty.
    pub fn insert(&mut self, name: impl AsRef<[u8]>, id: EntityId) -> bool {
        let name = name.as_ref();
        if name.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for byte in name {
            let mut created = false;
            node = node.children.get_or_create(*byte, &mut created);
            if created {
                self.n_nodes += 1;
            }
        }

        if node.ids.contains(&id) {
            return false;
        }
        if !node.is_terminal() {
            self.n_names += 1;
        }
        node.ids.push(id);
        self.n_entries += 1;
        true
    }

    /// Collect the IDs of every entity whose name starts with `prefix`.
    ///
    /// IDs are reported in lexicographic name order, and in insertion order
    /// for names shared by several entities. An ID registered under more than
    /// one matching name is reported once, at its first occurrence.
    ///
    /// An empty prefix matches every name.
    pub fn prefix_search(&self, prefix: impl AsRef<[u8]>) -> Vec<EntityId> {
        let Some(start) = self.root.descend(prefix.as_ref()) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            out.extend(node.ids.iter().copied().filter(|id| seen.insert(*id)));
            // Reversed, so that the smallest byte is popped first.
            stack.extend(node.children.iter().rev().map(|(_, child)| child));
        }
        out
    }

    /// Returns the IDs registered under exactly `name`.
    pub fn find(&self, name: impl AsRef<[u8]>) -> Option<&[EntityId]> {
        self.root
            .descend(name.as_ref())
            .filter(|node| node.is_terminal())
            .map(|node| node.ids.as_slice())
    }

    /// Iterate over `(name, ids)` pairs in lexicographic name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Number of distinct names stored in the trie.
    pub const fn n_names(&self) -> usize {
        self.n_names
    }

    /// Number of `(name, id)` pairs stored in the trie.
    pub const fn n_entries(&self) -> usize {
        self.n_entries
    }

    /// Number of nodes in the trie, not counting the root.
    pub const fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    pub const fn is_empty(&self) -> bool {
        self.n_entries == 0
    }
}

impl fmt::Debug for NameTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_tree(f, b"")
    }
}

impl<'a> IntoIterator for &'a NameTrie {
    type Item = (Vec<u8>, &'a [EntityId]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<[u8]>> FromIterator<(K, EntityId)> for NameTrie {
    fn from_iter<T: IntoIterator<Item = (K, EntityId)>>(iter: T) -> Self {
        let mut trie = Self::new();
        for (name, id) in iter {
            trie.insert(name, id);
        }
        trie
    }
}
