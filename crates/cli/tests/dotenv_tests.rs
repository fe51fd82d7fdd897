//! Regression tests for `.env` handling in the CLI.
//!
//! Responsibilities:
//! - Prove that `DOTENV_DISABLED=1` prevents the CLI from loading `.env`.
//! - Prove that `.env` in the working directory or `--env-file` feeds configuration.
//! - Prove that `.env` never overrides existing variables unless asked.
//!
//! Invariants / assumptions:
//! - `load_dotenv()` is gated by `DOTENV_DISABLED` ("true" or "1" disables).

mod common;

use common::infisical_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_env(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();
    write_env(&temp_dir, ".env", "INFISICAL_PROJECT_ID=from-dotenv\n");

    infisical_cmd()
        .current_dir(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-dotenv").not());
}

#[test]
fn test_dotenv_enabled_loads_env_file_from_cwd() {
    let temp_dir = TempDir::new().unwrap();
    write_env(&temp_dir, ".env", "INFISICAL_PROJECT_ID=from-dotenv\n");

    infisical_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-dotenv"));
}

#[test]
fn test_env_file_option() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env(&temp_dir, "ci.env", "INFISICAL_ENVIRONMENT=ci\n");

    infisical_cmd()
        .env_remove("DOTENV_DISABLED")
        .arg("--env-file")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment:    ci"));
}

#[test]
fn test_missing_env_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    infisical_cmd()
        .env_remove("DOTENV_DISABLED")
        .arg("--env-file")
        .arg(temp_dir.path().join("missing.env"))
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_invalid_env_file_warns_without_leaking() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env(
        &temp_dir,
        ".env",
        "INFISICAL_PROJECT_ID=leaky-secret-value\nNOT A VALID LINE\n",
    );

    infisical_cmd()
        .env_remove("DOTENV_DISABLED")
        .arg("--env-file")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration:  none"))
        .stdout(predicate::str::contains("leaky-secret-value").not())
        .stderr(predicate::str::contains(".env"))
        .stderr(predicate::str::contains("leaky-secret-value").not());
}

#[cfg(unix)]
#[test]
fn test_dotenv_does_not_override_existing_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env(&temp_dir, "app.env", "SHARED=from-file\nONLY_FILE=yes\n");

    infisical_cmd()
        .env_remove("DOTENV_DISABLED")
        .env("SHARED", "from-process")
        .arg("--env-file")
        .arg(&path)
        .args(["run", "--", "sh", "-c", "printf '%s,%s' \"$SHARED\" \"$ONLY_FILE\""])
        .assert()
        .success()
        .stdout("from-process,yes");
}

#[cfg(unix)]
#[test]
fn test_dotenv_override_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env(&temp_dir, "app.env", "SHARED=from-file\n");

    infisical_cmd()
        .env_remove("DOTENV_DISABLED")
        .env("SHARED", "from-process")
        .arg("--env-file")
        .arg(&path)
        .args([
            "--dotenv-override",
            "run",
            "--",
            "sh",
            "-c",
            "printf '%s' \"$SHARED\"",
        ])
        .assert()
        .success()
        .stdout("from-file");
}
