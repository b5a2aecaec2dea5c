/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::io::Write;

use crate::cli::SearchTrieArgs;
use crate::error::CliError;

pub(super) fn run<W: Write>(args: &SearchTrieArgs, out: &mut W) -> Result<(), CliError> {
    let trie = snapshot::load_trie(&args.trie.trie)?;
    let ids = trie.prefix_search(&args.query);
    tracing::debug!(query = %args.query, matches = ids.len(), "prefix search");
    super::write_ids(out, &ids)?;
    Ok(())
}
