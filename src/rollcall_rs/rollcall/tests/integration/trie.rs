/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{path_str, run};

const ROSTER: &str = "student_id,name,rn,facial_vector
1,Ann,R01,
2,Anna,R02,
3,Bob,R03,
";

#[test]
fn test_create_then_search() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("students.csv");
    std::fs::write(&roster, ROSTER).unwrap();
    let trie = dir.path().join("serialized").join("name.dat");
    let (roster, trie) = (path_str(&roster), path_str(&trie));

    assert_eq!(run(&["create_trie", "--roster", roster, "--trie", trie]).unwrap(), "");

    assert_eq!(run(&["search_trie", "An", "--trie", trie]).unwrap(), "1\n2\n");
    assert_eq!(run(&["search_trie", "B", "--trie", trie]).unwrap(), "3\n");
    assert_eq!(run(&["search_trie", "Z", "--trie", trie]).unwrap(), "");
    assert_eq!(run(&["search_trie", "", "--trie", trie]).unwrap(), "1\n2\n3\n");
}

#[test]
fn test_insert_then_search() {
    let dir = tempfile::tempdir().unwrap();
    let trie = dir.path().join("name.dat");
    let trie = path_str(&trie);

    run(&["insert_trie", "Priya", "7", "--trie", trie]).unwrap();
    run(&["insert_trie", "Pranav", "8", "--trie", trie]).unwrap();
    run(&["insert_trie", "Priya", "9", "--trie", trie]).unwrap();
    // Same pair again: nothing changes.
    run(&["insert_trie", "Priya", "7", "--trie", trie]).unwrap();

    assert_eq!(run(&["search_trie", "Pr", "--trie", trie]).unwrap(), "8\n7\n9\n");
    assert_eq!(run(&["search_trie", "Pri", "--trie", trie]).unwrap(), "7\n9\n");
}

#[test]
fn test_search_on_missing_trie_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let trie = dir.path().join("name.dat");
    assert_eq!(run(&["search_trie", "A", "--trie", path_str(&trie)]).unwrap(), "");
}

#[test]
fn test_create_trie_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("students.csv");
    std::fs::write(&roster, ROSTER).unwrap();
    let trie = dir.path().join("name.dat");
    let (roster, trie) = (path_str(&roster), path_str(&trie));

    run(&["insert_trie", "Zed", "99", "--trie", trie]).unwrap();
    run(&["create_trie", "--roster", roster, "--trie", trie]).unwrap();

    assert_eq!(run(&["search_trie", "Z", "--trie", trie]).unwrap(), "");
}

#[test]
fn test_create_trie_without_roster_fails() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("missing.csv");
    let trie = dir.path().join("name.dat");

    let err = run(&["create_trie", "--roster", path_str(&roster), "--trie", path_str(&trie)])
        .unwrap_err();
    assert!(matches!(err, rollcall::CliError::Roster { .. }), "{err:?}");
    assert!(!trie.exists());
}
