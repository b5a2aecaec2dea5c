/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! MetricIndex - A height-balanced (AVL) binary search tree over integer metrics.
//!
//! This crate indexes entities by a non-negative integer metric, e.g. the
//! number of lectures a student attended for one subject. Each distinct metric
//! value is stored in exactly one node, together with the set of entity IDs
//! that currently have that value.
//!
//! # Overview
//!
//! The [`MetricIndex`] provides:
//!
//! - Bulk construction from `(key, id)` pairs
//! - Moving a single entity from its current key to a new one
//! - Inclusive threshold queries (`key >= t` or `key <= t`)
//! - Ascending in-order iteration over `(key, ids)` groups
//!
//! Every insertion and removal restores the AVL balance invariant with single
//! or double rotations, keeping all keyed operations `O(log n)`.
//!
//! # Example
//!
//! ```
//! use metric_index::{Direction, MetricIndex};
//!
//! let mut index = MetricIndex::from_pairs([(3, 101), (5, 102), (3, 103)]);
//!
//! let mut at_least_three = index.threshold(3, Direction::AtLeast);
//! at_least_three.sort_unstable();
//! assert_eq!(at_least_three, vec![101, 102, 103]);
//!
//! // Student 101 attends another lecture.
//! index.update(101, 4);
//! assert_eq!(index.threshold(5, Direction::AtLeast), vec![102]);
//! assert_eq!(index.key_of(101), Some(4));
//! ```

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::MetricNode;
pub use tree::{Direction, MetricIndex, UpdateOutcome};

/// A non-negative metric value, e.g. an attendance count.
pub type MetricKey = u32;

/// A positive integer uniquely identifying one enrolled entity.
pub type EntityId = u32;
