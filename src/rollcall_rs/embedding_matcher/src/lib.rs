/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Nearest-neighbour identification over a gallery of reference embeddings.
//!
//! A [`Matcher`] compares a query embedding against every entry of a
//! [`Gallery`] by Euclidean distance and reports the closest entry, provided
//! it lies within the acceptance threshold.
//!
//! ```
//! use embedding_matcher::{Gallery, MatchOutcome, Matcher};
//!
//! let gallery = Gallery::from_entries(2, [(1, vec![0.0, 0.0]), (2, vec![10.0, 10.0])])?;
//!
//! let outcome = Matcher::new(5.0).best_match(&gallery, &[1.0, 1.0])?;
//! assert_eq!(outcome.sentinel_id(), 1);
//!
//! let outcome = Matcher::new(0.5).best_match(&gallery, &[1.0, 1.0])?;
//! assert_eq!(outcome, MatchOutcome::NoMatch);
//! assert_eq!(outcome.sentinel_id(), -1);
//! # Ok::<(), embedding_matcher::MatchError>(())
//! ```

mod distance;
mod gallery;

pub use distance::l2_distance;
pub use gallery::{Gallery, GalleryEntry};

/// A positive integer uniquely identifying one enrolled entity.
pub type EntityId = u32;

/// Length of the face embeddings produced by the capture pipeline.
pub const EMBEDDING_DIMENSION: usize = 128;

/// Maximum distance at which two 128-d face embeddings are considered the
/// same person.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.6;

/// External rendering of [`MatchOutcome::NoMatch`].
pub const NO_MATCH_SENTINEL: i64 = -1;

/// Errors caused by malformed matcher inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("expected a vector of dimension {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("component {index} is not a finite number ({value})")]
    NonFiniteComponent { index: usize, value: f64 },
}

fn check_finite(vector: &[f64]) -> Result<(), MatchError> {
    match vector.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, value)) => Err(MatchError::NonFiniteComponent {
            index,
            value: *value,
        }),
        None => Ok(()),
    }
}

/// Result of a [`Matcher::best_match`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome {
    /// The closest gallery entry lies within the acceptance threshold.
    Match { id: EntityId, distance: f64 },
    /// The gallery is empty, or its closest entry is too far away.
    NoMatch,
}

impl MatchOutcome {
    /// The matched ID, or [`NO_MATCH_SENTINEL`].
    pub fn sentinel_id(&self) -> i64 {
        match self {
            Self::Match { id, .. } => i64::from(*id),
            Self::NoMatch => NO_MATCH_SENTINEL,
        }
    }

    pub const fn id(&self) -> Option<EntityId> {
        match self {
            Self::Match { id, .. } => Some(*id),
            Self::NoMatch => None,
        }
    }
}

/// Linear-scan nearest-neighbour matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    acceptance_threshold: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTANCE_THRESHOLD)
    }
}

impl Matcher {
    /// Create a matcher accepting entries at distance `<= acceptance_threshold`.
    pub const fn new(acceptance_threshold: f64) -> Self {
        Self {
            acceptance_threshold,
        }
    }

    pub const fn acceptance_threshold(&self) -> f64 {
        self.acceptance_threshold
    }

    /// Find the gallery entry closest to `query`.
    ///
    /// Ties go to the entry that comes first in the gallery. The closest
    /// entry is only reported if its distance does not exceed the acceptance
    /// threshold.
    pub fn best_match(&self, gallery: &Gallery, query: &[f64]) -> Result<MatchOutcome, MatchError> {
        if query.len() != gallery.dimension() {
            return Err(MatchError::DimensionMismatch {
                expected: gallery.dimension(),
                actual: query.len(),
            });
        }
        check_finite(query)?;

        let mut best: Option<(EntityId, f64)> = None;
        for entry in gallery.entries() {
            let distance = l2_distance(&entry.vector, query);
            // Strict comparison keeps the earliest entry on ties.
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((entry.id, distance));
            }
        }

        Ok(match best {
            Some((id, distance)) if distance <= self.acceptance_threshold => {
                MatchOutcome::Match { id, distance }
            }
            _ => MatchOutcome::NoMatch,
        })
    }
}
