/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use embedding_matcher::EMBEDDING_DIMENSION;
use rollcall::CliError;

use crate::{path_str, run};

fn vector_cell(value: f64) -> String {
    vec![value.to_string(); EMBEDDING_DIMENSION].join(",")
}

fn query(value: &str) -> Vec<String> {
    vec![value.to_string(); EMBEDDING_DIMENSION]
}

/// Student 1 sits at the origin, student 2 at (1, 1, ..., 1).
fn write_roster(dir: &std::path::Path) -> std::path::PathBuf {
    let roster = dir.join("students.csv");
    let contents = format!(
        "student_id,name,rn,facial_vector\n\
         1,Ann,R01,\"{}\"\n\
         2,Bob,R02,\"{}\"\n\
         3,Cleo,R03\n",
        vector_cell(0.0),
        vector_cell(1.0),
    );
    std::fs::write(&roster, contents).unwrap();
    roster
}

fn distance(roster: &str, value: &str, extra: &[&str]) -> Result<String, CliError> {
    let components = query(value);
    let mut args = vec!["distance"];
    args.extend(components.iter().map(String::as_str));
    args.extend(["--roster", roster]);
    args.extend(extra);
    run(&args)
}

#[test]
fn test_exact_embedding_is_identified() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(dir.path());
    let roster = path_str(&roster);

    assert_eq!(distance(roster, "0", &["--threshold", "0.6"]).unwrap(), "1\n");
    assert_eq!(distance(roster, "1", &["--threshold", "0.6"]).unwrap(), "2\n");
}

#[test]
fn test_far_embedding_is_not_identified() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(dir.path());

    // sqrt(128 * 0.5^2) ~ 5.66 from both students.
    assert_eq!(
        distance(path_str(&roster), "0.5", &["--threshold", "0.6"]).unwrap(),
        "-1\n"
    );
}

#[test]
fn test_equidistant_embedding_goes_to_first_student() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(dir.path());

    assert_eq!(
        distance(path_str(&roster), "0.5", &["--threshold", "10"]).unwrap(),
        "1\n"
    );
}

#[test]
fn test_negative_components() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(dir.path());

    assert_eq!(
        distance(path_str(&roster), "-0.01", &["--threshold", "0.6"]).unwrap(),
        "1\n"
    );
}

#[test]
fn test_empty_gallery_never_matches() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("students.csv");
    std::fs::write(&roster, "student_id,name,rn,facial_vector\n").unwrap();

    assert_eq!(distance(path_str(&roster), "0", &[]).unwrap(), "-1\n");
}

#[test]
fn test_roster_vector_of_wrong_dimension() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("students.csv");
    std::fs::write(&roster, "student_id,name,rn,facial_vector\n1,Ann,R01,\"0.1,0.2\"\n").unwrap();

    let err = distance(path_str(&roster), "0", &[]).unwrap_err();
    assert!(matches!(err, CliError::Match(_)), "{err:?}");
}
