/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The student roster: a CSV file with a header row and the columns
//! `student_id,name,rn,facial_vector`.
//!
//! `facial_vector` holds the comma-separated components of the student's face
//! embedding, quoted as a single cell. It may be empty for students enrolled
//! without a capture.

use std::path::Path;

use embedding_matcher::Gallery;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    pub student_id: u32,
    pub name: String,
    /// Roll number.
    pub rn: String,
    #[serde(default)]
    pub facial_vector: String,
}

impl StudentRecord {
    /// Parse the `facial_vector` cell. `None` if the cell is blank.
    pub fn embedding(&self) -> Result<Option<Vec<f64>>, CliError> {
        let cell = self.facial_vector.trim();
        if cell.is_empty() {
            return Ok(None);
        }
        cell.split(',')
            .map(|component| component.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(|err| CliError::MalformedVector {
                student_id: self.student_id,
                reason: err.to_string(),
            })
    }
}

/// Read every student from the roster at `path`.
///
/// Rows with fewer than three fields can't name a student and are skipped.
/// Rows without a `facial_vector` cell read as students without a capture.
/// Cells are trimmed of surrounding whitespace.
pub fn read_roster(path: &Path) -> Result<Vec<StudentRecord>, CliError> {
    let roster_error = |source| CliError::Roster {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(roster_error)?;
    let headers = reader.headers().map_err(roster_error)?.clone();

    let mut students = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let mut record = record.map_err(roster_error)?;
        if record.len() < 3 {
            tracing::warn!(path = %path.display(), row = row + 1, "skipping short roster row");
            continue;
        }
        if record.len() == 3 {
            record.push_field("");
        }
        students.push(record.deserialize(Some(&headers)).map_err(roster_error)?);
    }

    tracing::debug!(path = %path.display(), students = students.len(), "read roster");
    Ok(students)
}

/// Build the matching gallery from the students that have an embedding.
pub fn gallery(students: &[StudentRecord], dimension: usize) -> Result<Gallery, CliError> {
    let mut gallery = Gallery::new(dimension);
    for student in students {
        match student.embedding()? {
            Some(vector) => gallery.push(student.student_id, vector)?,
            None => tracing::warn!(
                student_id = student.student_id,
                "student has no facial vector, leaving out of the gallery"
            ),
        }
    }
    Ok(gallery)
}
