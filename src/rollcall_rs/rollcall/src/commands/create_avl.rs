/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::io::BufRead;

use itertools::Itertools;
use metric_index::MetricIndex;
use snapshot::FileLock;

use crate::cli::CreateAvlArgs;
use crate::error::CliError;

pub(super) fn run<R: BufRead>(args: &CreateAvlArgs, stdin: R) -> Result<(), CliError> {
    // Parse everything before touching the snapshot, so that a bad line
    // leaves any existing file as it was.
    let pairs = parse_pairs(stdin)?;

    let _lock = FileLock::acquire(&args.path)?;
    let index = MetricIndex::from_pairs(pairs);
    snapshot::save_index(&args.path, &index)?;

    tracing::info!(
        path = %args.path.display(),
        ids = index.len(),
        keys = index.num_keys(),
        "created metric index"
    );
    Ok(())
}

/// Parse `"<key> <id>"` records, one per line. Blank lines are ignored.
pub fn parse_pairs<R: BufRead>(input: R) -> Result<Vec<(u32, u32)>, CliError> {
    let mut pairs = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parse_error = |reason: String| CliError::Parse {
            line: index + 1,
            input: line.clone(),
            reason,
        };

        let Some((key, id)) = trimmed.split_whitespace().collect_tuple() else {
            return Err(parse_error("expected \"<key> <id>\"".to_string()));
        };
        let key: u32 = key
            .parse()
            .map_err(|err| parse_error(format!("invalid key {key:?}: {err}")))?;
        let id: u32 = id
            .parse()
            .map_err(|err| parse_error(format!("invalid id {id:?}: {err}")))?;
        if id == 0 {
            return Err(parse_error("ids must be positive".to_string()));
        }
        pairs.push((key, id));
    }
    Ok(pairs)
}
