/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{EntityId, MatchError, check_finite};

/// One reference embedding and the entity it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub id: EntityId,
    pub vector: Vec<f64>,
}

/// An ordered collection of reference embeddings, all of the same dimension.
///
/// Order matters: when two entries are equally close to a query, the one
/// pushed first wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    dimension: usize,
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Create an empty gallery accepting vectors of length `dimension`.
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a gallery from `(id, vector)` pairs, stopping at the first
    /// vector [`Self::push`] rejects.
    pub fn from_entries<I>(dimension: usize, entries: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (EntityId, Vec<f64>)>,
    {
        let mut gallery = Self::new(dimension);
        for (id, vector) in entries {
            gallery.push(id, vector)?;
        }
        Ok(gallery)
    }

    /// Append a reference embedding.
    ///
    /// Vectors with non-finite components are rejected: a NaN distance never
    /// compares as closer or farther, and would shadow every later entry.
    pub fn push(&mut self, id: EntityId, vector: Vec<f64>) -> Result<(), MatchError> {
        if vector.len() != self.dimension {
            return Err(MatchError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        check_finite(&vector)?;
        self.entries.push(GalleryEntry { id, vector });
        Ok(())
    }

    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, in the order they were pushed.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }
}
