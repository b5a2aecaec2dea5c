/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use snapshot::FileLock;

use crate::cli::InsertTrieArgs;
use crate::error::CliError;

pub(super) fn run(args: &InsertTrieArgs) -> Result<(), CliError> {
    let path = &args.trie.trie;
    let _lock = FileLock::acquire(path)?;
    let mut trie = snapshot::load_trie(path)?;

    if !trie.insert(&args.name, args.id) {
        tracing::info!(id = args.id, name = %args.name, "name already registered");
        return Ok(());
    }

    snapshot::save_trie(path, &trie)?;
    tracing::info!(id = args.id, name = %args.name, "registered name");
    Ok(())
}
