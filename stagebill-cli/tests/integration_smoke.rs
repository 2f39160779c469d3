//! Smoke tests for the stagebill binary: argument parsing and the paths
//! that fail before touching a database.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// `home` stands in for both HOME and the working directory, keeping the
/// developer's own config and `.env` out of the run.
fn stagebill(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stagebill").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .current_dir(home.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn serve_help_lists_both_apps() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("booking"))
        .stdout(predicate::str::contains("trivia"));
}

#[test]
fn trivia_help_shows_cors_flag() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["serve", "trivia", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn booking_help_shows_bind_flag() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["serve", "booking", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--cors-permissive").not());
}

#[test]
fn completions_bash() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stagebill"));
}

#[test]
fn migrate_without_database_url_is_actionable() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn serve_without_database_url_is_actionable() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["serve", "trivia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database URL"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .args(["--config", "/nonexistent/stagebill.toml", "migrate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[booking]\nbind = \"nowhere\"\n").unwrap();

    let home = tempfile::tempdir().unwrap();
    stagebill(&home)
        .arg("--config")
        .arg(&path)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
