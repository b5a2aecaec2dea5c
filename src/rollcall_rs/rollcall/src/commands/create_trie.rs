/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use name_trie::NameTrie;
use snapshot::FileLock;

use crate::cli::CreateTrieArgs;
use crate::error::CliError;
use crate::roster;

pub(super) fn run(args: &CreateTrieArgs) -> Result<(), CliError> {
    let students = roster::read_roster(&args.roster.roster)?;

    let mut trie = NameTrie::new();
    for student in &students {
        if !trie.insert(&student.name, student.student_id) {
            tracing::warn!(
                student_id = student.student_id,
                name = %student.name,
                "skipping empty or duplicate roster name"
            );
        }
    }

    let path = &args.trie.trie;
    let _lock = FileLock::acquire(path)?;
    snapshot::save_trie(path, &trie)?;

    tracing::info!(
        path = %path.display(),
        names = trie.n_names(),
        entries = trie.n_entries(),
        "created name trie"
    );
    Ok(())
}
