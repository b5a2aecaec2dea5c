/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! One module per subcommand. Every command follows the same shape: lock the
//! snapshot it mutates, load, apply the operation, persist once, unlock.
//! Queries skip the lock, since snapshots are only ever replaced atomically.

mod create_avl;
mod create_trie;
mod distance;
mod insert_trie;
mod search_trie;
mod threshold;
mod update_avl;

use std::io::{BufRead, Write};

pub use create_avl::parse_pairs;

use crate::cli::Command;
use crate::error::CliError;

/// Execute `command`, reading records from `stdin` and writing results to
/// `stdout`.
pub fn run<R, W>(command: Command, stdin: R, stdout: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    match command {
        Command::CreateAvl(args) => create_avl::run(&args, stdin),
        Command::UpdateAvl(args) => update_avl::run(&args),
        Command::Threshold(args) => threshold::run(&args, stdout),
        Command::CreateTrie(args) => create_trie::run(&args),
        Command::InsertTrie(args) => insert_trie::run(&args),
        Command::SearchTrie(args) => search_trie::run(&args, stdout),
        Command::Distance(args) => distance::run(&args, stdout),
    }?;
    stdout.flush()?;
    Ok(())
}

/// Print one ID per line. Nothing is printed for an empty result.
fn write_ids<W: Write>(out: &mut W, ids: &[u32]) -> std::io::Result<()> {
    for id in ids {
        writeln!(out, "{id}")?;
    }
    Ok(())
}
