//! End-to-end CLI tests for the dryad-deposit binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn dryad_deposit() -> Command {
    Command::cargo_bin("dryad-deposit").unwrap()
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    dryad_deposit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit datasets into"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    dryad_deposit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dryad-deposit"));
}

/// Test that a missing subcommand causes non-zero exit.
#[test]
fn test_binary_without_subcommand_returns_error() {
    dryad_deposit()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_subjects_lists_bundled_domains() {
    let output = dryad_deposit().args(["-q", "subjects"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 48);
    assert_eq!(lines[0], "Natural sciences");
}

#[test]
fn test_licenses_lists_cc0() {
    dryad_deposit()
        .args(["-q", "licenses"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CC-0\thttps://creativecommons.org/publicdomain/zero/1.0/",
        ));
}

#[test]
fn test_deposit_with_missing_metadata_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    dryad_deposit()
        .args(["-q", "deposit", "--file", "tests/fixtures/test.txt", "--metadata"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read metadata file"));
}

#[test]
fn test_deposit_with_invalid_metadata_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata.json");
    std::fs::write(&metadata, "{\"subjects\": \"not a list\"}").unwrap();

    dryad_deposit()
        .args(["-q", "deposit", "--file", "tests/fixtures/test.txt", "--metadata"])
        .arg(&metadata)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid submission metadata"));
}

#[test]
fn test_deposit_without_subjects_reports_failed_result() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata.json");
    std::fs::write(
        &metadata,
        r#"{"title": "t", "description": "d", "subjects": [], "otherProperties": {"funder": "{}"}}"#,
    )
    .unwrap();

    dryad_deposit()
        .args([
            "-q",
            "--server-url",
            "http://127.0.0.1:9/api/v2",
            "deposit",
            "--file",
            "tests/fixtures/test.txt",
            "--metadata",
        ])
        .arg(&metadata)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no subjects"));
}
