/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use rollcall::CliError;

use crate::{path_str, run, run_with_input};

const SCENARIO: &str = "3 101\n5 102\n3 103\n";

#[test]
fn test_create_then_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");
    let path = path_str(&path);

    assert_eq!(run_with_input(&["create_avl", path], SCENARIO).unwrap(), "");

    assert_eq!(run(&["threshold", path, "3", "above"]).unwrap(), "102\n101\n103\n");
    assert_eq!(run(&["threshold", path, "5", "above"]).unwrap(), "102\n");
    assert_eq!(run(&["threshold", path, "6", "1"]).unwrap(), "");
    assert_eq!(run(&["threshold", path, "4", "-1"]).unwrap(), "101\n103\n");
    assert_eq!(run(&["threshold", path, "5", "below"]).unwrap(), "102\n101\n103\n");
}

#[test]
fn test_update_moves_entity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");
    let path = path_str(&path);
    run_with_input(&["create_avl", path], SCENARIO).unwrap();

    run(&["update_avl", path, "5", "101"]).unwrap();
    assert_eq!(run(&["threshold", path, "5", "above"]).unwrap(), "102\n101\n");
    assert_eq!(run(&["threshold", path, "4", "below"]).unwrap(), "103\n");

    // Applying the same update again changes nothing.
    run(&["update_avl", path, "5", "101"]).unwrap();
    assert_eq!(run(&["threshold", path, "0", "above"]).unwrap(), "102\n101\n103\n");
}

#[test]
fn test_update_with_known_and_stale_old_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("total_attendance.dat");
    let path = path_str(&path);
    run_with_input(&["create_avl", path], SCENARIO).unwrap();

    run(&["update_avl", path, "4", "103", "--from", "3"]).unwrap();
    assert_eq!(run(&["threshold", path, "4", "above"]).unwrap(), "102\n103\n");

    // 102 is at 5, not 0: it is still moved, not duplicated.
    run(&["update_avl", path, "1", "102", "--from", "0"]).unwrap();
    assert_eq!(run(&["threshold", path, "0", "above"]).unwrap(), "103\n101\n102\n");
}

#[test]
fn test_update_unknown_entity_inserts_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("serialized").join("physics.dat");
    let path = path_str(&path);

    run(&["update_avl", path, "1", "42"]).unwrap();
    assert_eq!(run(&["threshold", path, "1", "above"]).unwrap(), "42\n");
}

#[test]
fn test_threshold_on_missing_snapshot_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never_created.dat");
    assert_eq!(run(&["threshold", path_str(&path), "0", "above"]).unwrap(), "");
    assert!(!path.exists());
}

#[test]
fn test_malformed_line_leaves_snapshot_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");
    run_with_input(&["create_avl", path_str(&path)], SCENARIO).unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = run_with_input(&["create_avl", path_str(&path)], "1 7\n2 x\n").unwrap_err();
    assert!(matches!(err, CliError::Parse { line: 2, .. }), "{err:?}");
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_malformed_line_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");

    let err = run_with_input(&["create_avl", path_str(&path)], "not a pair at all\n").unwrap_err();
    assert!(err.to_string().starts_with("line 1: cannot parse"));
    assert!(!path.exists());
}

#[test]
fn test_empty_input_creates_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");
    let path = path_str(&path);

    run_with_input(&["create_avl", path], "\n\n").unwrap();
    assert_eq!(run(&["threshold", path, "0", "above"]).unwrap(), "");
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.dat");
    std::fs::write(&path, b"definitely not a snapshot").unwrap();

    let err = run(&["threshold", path_str(&path), "0", "above"]).unwrap_err();
    assert!(matches!(err, CliError::Snapshot(_)), "{err:?}");

    let err = run(&["update_avl", path_str(&path), "3", "9"]).unwrap_err();
    assert!(matches!(err, CliError::Snapshot(_)), "{err:?}");
    assert_eq!(std::fs::read(&path).unwrap(), b"definitely not a snapshot");
}
