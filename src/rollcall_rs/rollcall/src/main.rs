/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::process::ExitCode;

use clap::Parser;
use rollcall::Cli;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from here.
    let cli = Cli::parse_from(rollcall::cli::multicall_args(std::env::args_os()));

    if let Err(err) = rollcall::logging::try_init(cli.verbose) {
        eprintln!("warning: logging disabled: {err}");
    }

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match rollcall::run(cli, stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
