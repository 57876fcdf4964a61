#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn shortly_cmd(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("shortly"));
    cmd.env("SHORTLY_DATA", data.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("SHORTLY_LOG");
    cmd
}

fn logged_in(data: &Path) {
    shortly_cmd(data)
        .args(["register", "me@x.io", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered successfully"));
    shortly_cmd(data)
        .args(["login", "me@x.io", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));
}

#[test]
fn test_full_link_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    logged_in(data);

    // 1. Shorten
    shortly_cmd(data)
        .args(["shorten", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short.ly/"))
        .stdout(predicate::str::contains("https://example.com"));

    // 2. Same URL again is refused
    shortly_cmd(data)
        .args(["shorten", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL already shortened"));

    // 3. List (also the default command)
    shortly_cmd(data)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. short.ly/"))
        .stdout(predicate::str::contains("https://example.com"));

    // 4. Out of range delete
    shortly_cmd(data)
        .args(["delete", "2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No link #2"));

    // 5. Delete
    shortly_cmd(data)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link deleted"));

    shortly_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No links yet."));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    logged_in(data);
    shortly_cmd(data).args(["shorten", "a.io"]).assert().success();

    shortly_cmd(data)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    shortly_cmd(data)
        .args(["list"])
        .assert()
        .stdout(predicate::str::contains("https://a.io"));

    shortly_cmd(data)
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Link deleted"));
}

#[test]
fn test_login_errors() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    shortly_cmd(data)
        .args(["login", "nobody@x.io", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found"));

    shortly_cmd(data)
        .args(["register", "me@x.io", "--password", "pw"])
        .assert()
        .success();

    shortly_cmd(data)
        .args(["register", "me@x.io", "--password", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));

    shortly_cmd(data)
        .args(["login", "me@x.io", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_link_commands_need_a_session() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    shortly_cmd(data)
        .args(["shorten", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please login first"));

    logged_in(data);
    shortly_cmd(data)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("me@x.io"));

    shortly_cmd(data)
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    shortly_cmd(data)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_invalid_url_is_rejected() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    logged_in(data);

    shortly_cmd(data)
        .args(["shorten", "not a url!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid URL"));
}

#[test]
fn test_config_roundtrip() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    shortly_cmd(data)
        .args(["config", "confirm-delete", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm-delete set to false"));

    shortly_cmd(data)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-code-attempts = 32"))
        .stdout(predicate::str::contains("confirm-delete = false"));
}
