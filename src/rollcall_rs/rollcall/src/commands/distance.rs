/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::io::Write;

use embedding_matcher::{EMBEDDING_DIMENSION, MatchOutcome, Matcher};

use crate::cli::DistanceArgs;
use crate::error::CliError;
use crate::roster;

pub(super) fn run<W: Write>(args: &DistanceArgs, out: &mut W) -> Result<(), CliError> {
    let students = roster::read_roster(&args.roster.roster)?;
    let gallery = roster::gallery(&students, EMBEDDING_DIMENSION)?;

    let outcome = Matcher::new(args.threshold).best_match(&gallery, &args.vector)?;
    match outcome {
        MatchOutcome::Match { id, distance } => {
            tracing::debug!(id, distance, threshold = args.threshold, "identified");
        }
        MatchOutcome::NoMatch => {
            tracing::debug!(
                gallery = gallery.len(),
                threshold = args.threshold,
                "no student within threshold"
            );
        }
    }

    writeln!(out, "{}", outcome.sentinel_id())?;
    Ok(())
}
