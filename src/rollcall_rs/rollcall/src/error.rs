/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::path::PathBuf;

use embedding_matcher::MatchError;
use snapshot::SnapshotError;

/// Errors that abort a command. Persisted state is never modified when one
/// of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A malformed record on stdin.
    #[error("line {line}: cannot parse {input:?}: {reason}")]
    Parse {
        line: usize,
        input: String,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("cannot read roster {}: {source}", path.display())]
    Roster {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("student {student_id} has a malformed facial vector: {reason}")]
    MalformedVector { student_id: u32, reason: String },
    #[error(transparent)]
    Match(#[from] MatchError),
}
