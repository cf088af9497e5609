//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SQLite database file"));
}

#[test]
fn test_resolve_watch_url() {
    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("resolve").arg("https://youtube.com/watch?v=dQw4w9WgXcQ");

    cmd.assert().success().stdout(predicate::str::diff(
        "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg\n",
    ));
}

#[test]
fn test_resolve_falls_back_to_input() {
    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("resolve").arg("https://example.com/cat.png");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("https://example.com/cat.png\n"));
}

#[test]
fn test_resolve_strict_fails_without_id() {
    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("resolve").arg("--strict").arg("nothing here");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no video id found"));
}

#[test]
fn test_config_show_reads_file_and_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\ntimeout_secs = 12").unwrap();

    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("--config")
        .arg(file.path())
        .arg("config")
        .arg("show")
        .env("THUMBBOARD_DB", "/tmp/elsewhere.db")
        .env_remove("THUMBBOARD_BIND")
        .env_remove("THUMBBOARD_TIMEOUT");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("timeout_secs = 12"))
        .stdout(predicate::str::contains("/tmp/elsewhere.db"));
}

#[test]
fn test_config_missing_file_fails() {
    let mut cmd = Command::cargo_bin("thumbboard").unwrap();
    cmd.arg("--config")
        .arg("/nonexistent/thumbboard.toml")
        .arg("config")
        .arg("show");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
