/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Command front-end for the attendance engine.
//!
//! Each invocation performs exactly one operation against a snapshot file or
//! the student roster, then exits. The binary is a thin wrapper around
//! [`run`], which takes its input and output streams as parameters so that
//! every command can be driven in-process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod roster;

use std::io::{BufRead, Write};

pub use cli::Cli;
pub use error::CliError;

/// Execute the parsed command line.
pub fn run<R, W>(cli: Cli, stdin: R, stdout: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    commands::run(cli.command, stdin, stdout)
}
