/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::path::PathBuf;

use crate::format::SnapshotKind;

/// Why a snapshot's bytes could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of data")]
    Truncated,
    #[error("not a {expected} snapshot (magic {found:02x?})")]
    BadMagic {
        expected: SnapshotKind,
        found: [u8; 4],
    },
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },
    #[error("integer out of range")]
    VarintOverflow,
    #[error("entries are not in strictly ascending order")]
    OutOfOrder,
    #[error("entry without identifiers")]
    EmptyGroup,
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
}

/// Decoding reads from in-memory slices, so the only I/O errors are the
/// ones raised by the varint reader.
impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::InvalidData => Self::VarintOverflow,
            // UnexpectedEof
            _ => Self::Truncated,
        }
    }
}

/// Errors returned when loading or saving a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("snapshot {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}
