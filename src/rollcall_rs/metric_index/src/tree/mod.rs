/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Metric index implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (insert, merge into existing keys)
//! - [`remove`]: Delete path (remove an ID, delete emptied nodes)
//! - [`find`]: Read path (threshold queries)
//! - [`invariants`]: Structural self-checks

mod find;
mod insert;
mod invariants;
mod remove;

use std::collections::HashMap;

pub use find::Direction;

use crate::iter::Iter;
use crate::{EntityId, MetricKey, MetricNode};

/// What [`MetricIndex::update`] did to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The entity was not indexed before and has been inserted.
    Inserted,
    /// The entity was moved from key `from` to the requested key.
    Moved { from: MetricKey },
    /// The entity was already at the requested key.
    Unchanged,
}

impl UpdateOutcome {
    /// Returns true if the entity was already present before the update.
    pub const fn was_present(self) -> bool {
        !matches!(self, Self::Inserted)
    }
}

/// Aggregate counters for a [`MetricIndex`], maintained incrementally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexStats {
    /// Number of entity IDs stored across all nodes.
    pub num_ids: usize,
    /// Number of nodes, i.e. distinct keys.
    pub num_keys: usize,
}

/// An AVL tree mapping each distinct metric value to the entities holding it.
///
/// Every entity is stored under exactly one key. Moving an entity removes it
/// from its previous node (deleting the node if it becomes empty) before
/// inserting it under the new key.
///
/// Equality is logical: two indexes are equal if they map the same keys to
/// the same ID sequences, regardless of tree shape.
#[derive(Debug, Default, Clone)]
pub struct MetricIndex {
    root: Option<Box<MetricNode>>,
    stats: IndexStats,
}

impl MetricIndex {
    /// Create a new, empty index.
    pub const fn new() -> Self {
        Self {
            root: None,
            stats: IndexStats {
                num_ids: 0,
                num_keys: 0,
            },
        }
    }

    /// Build an index from `(key, id)` pairs, inserted in the order given.
    ///
    /// Pairs landing on an existing key are merged into that key's node.
    /// If the same ID shows up more than once, the last pair wins, so every
    /// ID ends up under exactly one key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MetricKey, EntityId)>,
    {
        let mut index = Self::new();
        // Tracks where each ID lives, so that repeated IDs are relocated in
        // O(log n) instead of being located with a full scan.
        let mut placed: HashMap<EntityId, MetricKey> = HashMap::new();

        for (key, id) in pairs {
            match placed.insert(id, key) {
                Some(previous) if previous == key => {}
                Some(previous) => {
                    index.remove_id(previous, id);
                    index.insert_new(key, id);
                }
                None => index.insert_new(key, id),
            }
        }

        #[cfg(any(test, feature = "unittest"))]
        index.check_invariants();

        index
    }

    /// Move `id` to `new_key`, inserting it if it wasn't indexed yet.
    ///
    /// The current key of `id` is located by scanning the tree.
    /// Use [`Self::relocate`] when the caller already knows it.
    pub fn update(&mut self, id: EntityId, new_key: MetricKey) -> UpdateOutcome {
        let outcome = match self.key_of(id) {
            Some(current) if current == new_key => UpdateOutcome::Unchanged,
            Some(current) => {
                self.remove_id(current, id);
                self.insert_new(new_key, id);
                UpdateOutcome::Moved { from: current }
            }
            None => {
                self.insert_new(new_key, id);
                UpdateOutcome::Inserted
            }
        };

        #[cfg(any(test, feature = "unittest"))]
        self.check_invariants();

        outcome
    }

    /// Move `id` from `old_key` to `new_key`.
    ///
    /// `old_key` is trusted as the caller's best knowledge of where the
    /// entity currently lives, which keeps the whole operation `O(log n)`.
    /// If `id` turns out not to be stored under `old_key`, this falls back to
    /// [`Self::update`].
    pub fn relocate(
        &mut self,
        id: EntityId,
        old_key: MetricKey,
        new_key: MetricKey,
    ) -> UpdateOutcome {
        let at_old_key = self.get(old_key).is_some_and(|ids| ids.contains(&id));
        if !at_old_key {
            return self.update(id, new_key);
        }
        if old_key == new_key {
            return UpdateOutcome::Unchanged;
        }

        self.remove_id(old_key, id);
        self.insert_new(new_key, id);

        #[cfg(any(test, feature = "unittest"))]
        self.check_invariants();

        UpdateOutcome::Moved { from: old_key }
    }

    /// Returns the IDs stored under `key`, if any.
    pub fn get(&self, key: MetricKey) -> Option<&[EntityId]> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
                std::cmp::Ordering::Equal => return Some(node.ids()),
            };
        }
        None
    }

    /// Returns the key `id` is currently stored under.
    ///
    /// This is a linear scan: the tree is ordered by key, not by ID.
    pub fn key_of(&self, id: EntityId) -> Option<MetricKey> {
        self.iter()
            .find(|(_, ids)| ids.contains(&id))
            .map(|(key, _)| key)
    }

    /// Returns true if `id` is stored anywhere in the index.
    pub fn contains(&self, id: EntityId) -> bool {
        self.key_of(id).is_some()
    }

    /// Iterate over `(key, ids)` groups in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Get a reference to the root node, if the index is not empty.
    pub fn root(&self) -> Option<&MetricNode> {
        self.root.as_deref()
    }

    /// Get the total number of entity IDs in the index.
    pub const fn len(&self) -> usize {
        self.stats.num_ids
    }

    pub const fn is_empty(&self) -> bool {
        self.stats.num_ids == 0
    }

    /// Get the number of distinct keys, i.e. the number of nodes.
    pub const fn num_keys(&self) -> usize {
        self.stats.num_keys
    }

    /// Height of the tree. An empty index has height 0.
    pub fn height(&self) -> u32 {
        MetricNode::subtree_height(self.root())
    }
}

impl PartialEq for MetricIndex {
    fn eq(&self, other: &Self) -> bool {
        self.stats == other.stats && self.iter().eq(other.iter())
    }
}

impl Eq for MetricIndex {}

impl FromIterator<(MetricKey, EntityId)> for MetricIndex {
    fn from_iter<T: IntoIterator<Item = (MetricKey, EntityId)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a MetricIndex {
    type Item = (MetricKey, &'a [EntityId]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
