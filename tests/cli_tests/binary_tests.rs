//! Binary Tests
//!
//! Runs the `country-registry` executable end to end and checks that every
//! session ends with a normal exit status.

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn registry(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("country-registry").unwrap();
    cmd.arg("--data-file").arg(temp_dir.path().join("countries.csv"));
    cmd
}

#[test]
fn test_exit_option_saves_and_exits_normally() {
    let temp_dir = TempDir::new().unwrap();

    registry(&temp_dir)
        .write_stdin("1\nChile\n19000000\n756000\nSouth America\n9\n")
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("countries.csv")).unwrap();
    assert!(saved.contains("Chile,19000000,756000,South America"));
}

#[test]
fn test_closed_input_exits_normally_without_saving() {
    let temp_dir = TempDir::new().unwrap();

    registry(&temp_dir).write_stdin("7\n").assert().success();

    assert!(!temp_dir.path().join("countries.csv").exists());
}

#[test]
fn test_non_utf8_input_does_not_end_the_session() {
    let temp_dir = TempDir::new().unwrap();

    registry(&temp_dir)
        .write_stdin(b"1\n\xff\xfe\nBolivia\n5\n5\nSouth America\n9\n".to_vec())
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("countries.csv")).unwrap();
    assert!(saved.contains("Bolivia,5,5,South America"));
}
