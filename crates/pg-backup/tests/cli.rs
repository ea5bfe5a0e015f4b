//! Tests for the command line
//!
//! `true` and `false` stand in for the container runtime.

#![cfg(unix)]

use std::fs;

use assert_cmd::Command;
use chrono::Local;
use common::names_in;
use predicates::{prelude::PredicateBooleanExt, str::contains};

mod common;

fn pg_backup() -> Command {
    Command::cargo_bin("pg-backup").unwrap()
}

#[test]
fn unavailable_runtime_fails_before_backup() {
    let directory = tempfile::tempdir().unwrap();

    pg_backup()
        .args(["--docker-bin", "false", "--backup-dir"])
        .arg(directory.path())
        .args(["--db-container", "db", "--db-name", "app", "--db-user", "postgres"])
        .assert()
        .failure()
        .stdout(contains("Container runtime is unavailable"));

    assert!(names_in(directory.path()).is_empty());
}

#[test]
fn missing_values_fail() {
    pg_backup()
        .args(["--docker-bin", "true", "--db-name", "app"])
        .assert()
        .failure()
        .stdout(contains(
            "backup-dir, db-container, db-name and db-user must all be provided",
        ));
}

#[test]
fn negative_keep_backups_is_rejected() {
    pg_backup()
        .args(["--docker-bin", "true", "--keep-backups", "-1"])
        .assert()
        .failure();
}

#[test]
fn missing_config_file_fails() {
    let directory = tempfile::tempdir().unwrap();

    pg_backup()
        .arg("--config")
        .arg(directory.path().join("missing.toml"))
        .assert()
        .failure()
        .stdout(contains("Could not load config"));
}

#[test]
fn backup_is_written() {
    let directory = tempfile::tempdir().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d");

    // `true exec ...` succeeds with no output, giving an empty dump.
    pg_backup()
        .args(["--docker-bin", "true", "--backup-dir"])
        .arg(directory.path())
        .args(["--db-container", "db", "--db-name", "app", "--db-user", "postgres"])
        .assert()
        .success()
        .stdout(contains("Backup saved to"));

    assert_eq!(
        names_in(directory.path()),
        vec![format!("backup_app_{today}.sql")]
    );
}

#[test]
fn init_writes_loadable_config() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("config.toml");

    pg_backup().arg("init").arg(&path).assert().success();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("keep_backups = 2"));

    // Flags override the template's backup directory.
    let backups = directory.path().join("backups");
    fs::create_dir(&backups).unwrap();
    pg_backup()
        .arg("--config")
        .arg(&path)
        .args(["--docker-bin", "true", "--backup-dir"])
        .arg(&backups)
        .assert()
        .success();

    assert_eq!(names_in(&backups).len(), 1);
}

#[test]
fn log_directory_and_verbose_logging() {
    let directory = tempfile::tempdir().unwrap();
    let backups = directory.path().join("backups");
    let logs = directory.path().join("logs");
    fs::create_dir(&backups).unwrap();

    pg_backup()
        .args(["--docker-bin", "true", "--verbose", "--backup-dir"])
        .arg(&backups)
        .arg("--log-dir")
        .arg(&logs)
        .args(["--db-container", "db", "--db-name", "app", "--db-user", "postgres"])
        .assert()
        .success()
        .stdout(contains("DEBUG"))
        .stdout(contains("Running"));

    let log_files: Vec<String> = names_in(&logs)
        .into_iter()
        .filter(|name| name.starts_with("pg-backup.") && name.ends_with(".log"))
        .collect();
    assert_eq!(log_files.len(), 1, "{:?}", names_in(&logs));

    let contents = fs::read_to_string(logs.join(&log_files[0])).unwrap();
    assert!(contents.contains("Backup saved to"));
    assert!(contents.contains("DEBUG"));
}

#[test]
fn default_level_hides_debug() {
    let directory = tempfile::tempdir().unwrap();

    pg_backup()
        .args(["--docker-bin", "true", "--backup-dir"])
        .arg(directory.path())
        .args(["--db-container", "db", "--db-name", "app", "--db-user", "postgres"])
        .assert()
        .success()
        .stdout(contains("Running").not());
}
