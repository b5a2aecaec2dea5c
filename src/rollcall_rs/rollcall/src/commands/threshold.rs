/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::io::Write;

use crate::cli::ThresholdArgs;
use crate::error::CliError;

pub(super) fn run<W: Write>(args: &ThresholdArgs, out: &mut W) -> Result<(), CliError> {
    let index = snapshot::load_index(&args.path)?;
    let ids = index.threshold(args.threshold, args.direction.into());
    tracing::debug!(
        threshold = args.threshold,
        direction = ?args.direction,
        matches = ids.len(),
        "threshold query"
    );
    super::write_ids(out, &ids)?;
    Ok(())
}
