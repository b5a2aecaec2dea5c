/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use metric_index::UpdateOutcome;
use snapshot::FileLock;

use crate::cli::UpdateAvlArgs;
use crate::error::CliError;

pub(super) fn run(args: &UpdateAvlArgs) -> Result<(), CliError> {
    let _lock = FileLock::acquire(&args.path)?;
    let mut index = snapshot::load_index(&args.path)?;

    let outcome = match args.old_key {
        Some(old_key) => index.relocate(args.id, old_key, args.new_key),
        None => index.update(args.id, args.new_key),
    };

    match outcome {
        UpdateOutcome::Inserted => {
            tracing::info!(id = args.id, key = args.new_key, "inserted new entry");
        }
        UpdateOutcome::Moved { from } => {
            tracing::info!(id = args.id, from, to = args.new_key, "updated entry");
        }
        UpdateOutcome::Unchanged => {
            tracing::info!(id = args.id, key = args.new_key, "entry already up to date");
            return Ok(());
        }
    }

    snapshot::save_index(&args.path, &index)?;
    Ok(())
}
