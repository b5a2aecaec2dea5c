/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Diagnostics go to stderr through `tracing`; stdout is reserved for command
//! results.
//!
//! The level defaults to `warn` and is raised by each `-v`. When `RUST_LOG`
//! is set, its directives are applied on top, e.g.
//! `RUST_LOG=snapshot=debug rollcall threshold math.dat 3 above`.

use std::error::Error;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// The default level for a given number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a global subscriber writing to stderr, if one is not already set.
///
/// # Errors
///
/// Returns an Error if a global subscriber was already installed.
pub fn try_init(verbosity: u8) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
}
