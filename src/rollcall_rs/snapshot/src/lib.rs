/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Persistence for [`MetricIndex`] and [`NameTrie`].
//!
//! Snapshots are small checksummed binary files (see [`format`]). A missing
//! file loads as an empty structure, so the first invocation against a fresh
//! path needs no special casing. Saving never leaves a partially written file
//! behind: see [`file::write_atomic`].
//!
//! Callers that load, mutate and save should hold a [`FileLock`] for the
//! whole sequence.

pub mod error;
pub mod file;
pub mod format;
mod lock;
pub mod varint;

use std::path::Path;

use metric_index::MetricIndex;
use name_trie::NameTrie;

pub use error::{DecodeError, SnapshotError};
pub use format::SnapshotKind;
pub use lock::FileLock;

/// Load a metric index snapshot. A missing file yields an empty index.
pub fn load_index(path: impl AsRef<Path>) -> Result<MetricIndex, SnapshotError> {
    let index = load(path.as_ref(), SnapshotKind::Index, format::decode_index)?
        .unwrap_or_default();
    tracing::debug!(
        path = %path.as_ref().display(),
        ids = index.len(),
        keys = index.num_keys(),
        "loaded metric index"
    );
    Ok(index)
}

/// Atomically write a metric index snapshot.
pub fn save_index(path: impl AsRef<Path>, index: &MetricIndex) -> Result<(), SnapshotError> {
    let bytes = format::encode_index(index);
    file::write_atomic(path.as_ref(), &bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        ids = index.len(),
        keys = index.num_keys(),
        "saved metric index"
    );
    Ok(())
}

/// Load a name trie snapshot. A missing file yields an empty trie.
pub fn load_trie(path: impl AsRef<Path>) -> Result<NameTrie, SnapshotError> {
    let trie = load(path.as_ref(), SnapshotKind::Trie, format::decode_trie)?.unwrap_or_default();
    tracing::debug!(
        path = %path.as_ref().display(),
        names = trie.n_names(),
        entries = trie.n_entries(),
        "loaded name trie"
    );
    Ok(trie)
}

/// Atomically write a name trie snapshot.
pub fn save_trie(path: impl AsRef<Path>, trie: &NameTrie) -> Result<(), SnapshotError> {
    let bytes = format::encode_trie(trie);
    file::write_atomic(path.as_ref(), &bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        names = trie.n_names(),
        entries = trie.n_entries(),
        "saved name trie"
    );
    Ok(())
}

fn load<T>(
    path: &Path,
    kind: SnapshotKind,
    decode: fn(&[u8]) -> Result<T, DecodeError>,
) -> Result<Option<T>, SnapshotError> {
    let Some(bytes) = file::read_if_exists(path)? else {
        tracing::warn!(path = %path.display(), "no {kind} snapshot found, starting empty");
        return Ok(None);
    };
    decode(&bytes)
        .map(Some)
        .map_err(|source| SnapshotError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}
