/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! On-disk snapshot layout.
//!
//! ```text
//! +-------+---------+---------------+-------------+
//! | magic | version |    payload    |    crc32    |
//! |  4 B  |   1 B   |   variable    |   4 B, LE   |
//! +-------+---------+---------------+-------------+
//! ```
//!
//! The checksum covers everything before it. Payloads are sequences of
//! varints (see [`crate::varint`]):
//!
//! - metric index: `n_keys`, then for each key in ascending order
//!   `key n_ids id*`
//! - name trie: `n_names`, then for each name in lexicographic order
//!   `len bytes n_ids id*`
//!
//! Only the logical content is stored. Tree shapes are rebuilt on load.

use std::fmt;

use metric_index::MetricIndex;
use name_trie::NameTrie;

use crate::error::DecodeError;
use crate::varint::{self, VarintEncode};

/// Current format version, bumped on any incompatible layout change.
pub const VERSION: u8 = 1;

const HEADER_LEN: usize = 5;
const TRAILER_LEN: usize = 4;

/// The structure a snapshot holds, identified by its magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKind {
    Index,
    Trie,
}

impl SnapshotKind {
    pub const fn magic(self) -> [u8; 4] {
        match self {
            Self::Index => *b"RCIX",
            Self::Trie => *b"RCNT",
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Index => "metric index",
            Self::Trie => "name trie",
        })
    }
}

/// Wrap `payload` in a header and checksum trailer.
pub fn seal(kind: SnapshotKind, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len() + TRAILER_LEN);
    out.extend_from_slice(&kind.magic());
    out.push(VERSION);
    out.extend_from_slice(payload);
    let crc = crc32fast::hash(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

/// Validate header and checksum, returning the payload.
pub fn unseal(kind: SnapshotKind, bytes: &[u8]) -> Result<&[u8], DecodeError> {
    if bytes.len() < HEADER_LEN + TRAILER_LEN {
        return Err(DecodeError::Truncated);
    }
    let (magic, rest) = bytes.split_at(4);
    if magic != kind.magic() {
        let mut found = [0; 4];
        found.copy_from_slice(magic);
        return Err(DecodeError::BadMagic {
            expected: kind,
            found,
        });
    }
    if rest[0] != VERSION {
        return Err(DecodeError::UnsupportedVersion(rest[0]));
    }

    let (checked, trailer) = bytes.split_at(bytes.len() - TRAILER_LEN);
    let mut stored = [0; TRAILER_LEN];
    stored.copy_from_slice(trailer);
    let stored = u32::from_le_bytes(stored);
    let computed = crc32fast::hash(checked);
    if stored != computed {
        return Err(DecodeError::ChecksumMismatch { stored, computed });
    }

    Ok(&checked[HEADER_LEN..])
}

/// Serialize a metric index into a sealed snapshot.
pub fn encode_index(index: &MetricIndex) -> Vec<u8> {
    let mut payload = Vec::new();
    (index.num_keys() as u64).write_as_varint(&mut payload);
    for (key, ids) in index {
        key.write_as_varint(&mut payload);
        write_ids(&mut payload, ids);
    }
    seal(SnapshotKind::Index, &payload)
}

/// Rebuild a metric index from a sealed snapshot.
pub fn decode_index(bytes: &[u8]) -> Result<MetricIndex, DecodeError> {
    let mut reader = unseal(SnapshotKind::Index, bytes)?;

    let n_keys: u64 = varint::read(&mut reader)?;
    let mut pairs = Vec::new();
    let mut previous = None;
    for _ in 0..n_keys {
        let key: u32 = varint::read(&mut reader)?;
        if previous.is_some_and(|previous| previous >= key) {
            return Err(DecodeError::OutOfOrder);
        }
        previous = Some(key);
        pairs.extend(read_ids(&mut reader)?.into_iter().map(|id| (key, id)));
    }
    ensure_consumed(reader)?;

    Ok(MetricIndex::from_pairs(pairs))
}

/// Serialize a name trie into a sealed snapshot.
pub fn encode_trie(trie: &NameTrie) -> Vec<u8> {
    let mut payload = Vec::new();
    (trie.n_names() as u64).write_as_varint(&mut payload);
    for (name, ids) in trie {
        (name.len() as u64).write_as_varint(&mut payload);
        payload.extend_from_slice(&name);
        write_ids(&mut payload, ids);
    }
    seal(SnapshotKind::Trie, &payload)
}

/// Rebuild a name trie from a sealed snapshot.
pub fn decode_trie(bytes: &[u8]) -> Result<NameTrie, DecodeError> {
    let mut reader = unseal(SnapshotKind::Trie, bytes)?;

    let n_names: u64 = varint::read(&mut reader)?;
    let mut trie = NameTrie::new();
    let mut previous: Option<&[u8]> = None;
    for _ in 0..n_names {
        let len: u64 = varint::read(&mut reader)?;
        let len = usize::try_from(len).map_err(|_| DecodeError::VarintOverflow)?;
        if len > reader.len() {
            return Err(DecodeError::Truncated);
        }
        let (name, rest) = reader.split_at(len);
        reader = rest;
        // Empty names can't be inserted, so they never appear in a valid snapshot.
        if name.is_empty() || previous.is_some_and(|previous| previous >= name) {
            return Err(DecodeError::OutOfOrder);
        }
        previous = Some(name);

        for id in read_ids(&mut reader)? {
            trie.insert(name, id);
        }
    }
    ensure_consumed(reader)?;

    Ok(trie)
}

fn write_ids(out: &mut Vec<u8>, ids: &[u32]) {
    (ids.len() as u64).write_as_varint(out);
    for &id in ids {
        id.write_as_varint(out);
    }
}

fn read_ids(reader: &mut &[u8]) -> Result<Vec<u32>, DecodeError> {
    let n_ids: u64 = varint::read(reader)?;
    if n_ids == 0 {
        return Err(DecodeError::EmptyGroup);
    }
    (0..n_ids)
        .map(|_| varint::read::<u32, _>(&mut *reader).map_err(DecodeError::from))
        .collect()
}

fn ensure_consumed(reader: &[u8]) -> Result<(), DecodeError> {
    if reader.is_empty() {
        Ok(())
    } else {
        Err(DecodeError::TrailingBytes(reader.len()))
    }
}
