/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! End-to-end tests driving each command in-process.

mod avl;
mod distance;
mod trie;

use std::path::Path;

use clap::Parser;
use rollcall::{Cli, CliError};

/// Parse `args` as if passed to the `rollcall` binary and run the command,
/// returning what it printed on stdout.
pub(crate) fn run_with_input(args: &[&str], stdin: &str) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("rollcall").chain(args.iter().copied()))
        .expect("valid command line");
    let mut out = Vec::new();
    rollcall::run(cli, stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

pub(crate) fn run(args: &[&str]) -> Result<String, CliError> {
    run_with_input(args, "")
}

pub(crate) fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}
