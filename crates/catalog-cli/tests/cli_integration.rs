//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They only exercise paths that never reach the network, or that fail
//! against an unreachable endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalog").expect("Failed to find catalog binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Same as `cli_cmd`, pointed at an endpoint nothing listens on
fn offline_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = cli_cmd(data_dir);
    cmd.arg("--endpoint").arg("http://127.0.0.1:9/graphql");
    cmd
}

fn save_profile(data_dir: &TempDir, username: &str, job_title: &str) {
    cli_cmd(data_dir)
        .args(["profile", "set", username, job_title])
        .assert()
        .success();
}

// ============================================================================
// Profile Command Tests
// ============================================================================

#[test]
fn test_profile_show_when_empty() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile saved."));
}

#[test]
fn test_profile_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["profile", "set", "  Rick ", " Scientist  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved."));

    cli_cmd(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: Rick"))
        .stdout(predicate::str::contains("Job title: Scientist"));
}

#[test]
fn test_profile_set_same_value_is_unchanged() {
    let data_dir = TempDir::new().unwrap();
    save_profile(&data_dir, "Morty", "Student");

    cli_cmd(&data_dir)
        .args(["profile", "set", "Morty", " Student "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile unchanged."));
}

#[test]
fn test_profile_set_replaces_existing() {
    let data_dir = TempDir::new().unwrap();
    save_profile(&data_dir, "Morty", "Student");
    save_profile(&data_dir, "Summer", "Intern");

    cli_cmd(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: Summer"))
        .stdout(predicate::str::contains("Morty").not());
}

#[test]
fn test_profile_set_rejects_blank() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["profile", "set", "   ", "Scientist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must both be non-empty"));

    cli_cmd(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile saved."));
}

#[test]
fn test_profile_set_rejects_long_username() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["profile", "set", "abcdefghijklmnop", "Scientist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limited to 15 characters"));
}

#[test]
fn test_profile_clear() {
    let data_dir = TempDir::new().unwrap();
    save_profile(&data_dir, "Rick", "Scientist");

    cli_cmd(&data_dir)
        .args(["profile", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile cleared."));

    cli_cmd(&data_dir)
        .args(["profile", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile saved."));
}

// ============================================================================
// Catalog Gate Tests
// ============================================================================

#[test]
fn test_list_requires_profile() {
    let data_dir = TempDir::new().unwrap();

    offline_cmd(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile saved"));
}

#[test]
fn test_show_requires_profile() {
    let data_dir = TempDir::new().unwrap();

    offline_cmd(&data_dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile saved"));
}

#[test]
fn test_list_treats_invalid_page_as_first() {
    let data_dir = TempDir::new().unwrap();
    save_profile(&data_dir, "Rick", "Scientist");

    // Accepted like any other page; only the dead endpoint makes it fail.
    for raw in ["0", "-3", "abc"] {
        offline_cmd(&data_dir)
            .args(["list", "--page", raw])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("invalid value").not())
            .stderr(predicate::str::contains("start at 1").not());
    }
}

#[test]
fn test_list_reports_network_failure() {
    let data_dir = TempDir::new().unwrap();
    save_profile(&data_dir, "Rick", "Scientist");

    offline_cmd(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("--endpoint").not());
}
