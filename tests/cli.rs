//! Command-line integration tests.
//!
//! These never open the interactive timer; they cover the commands that
//! print and exit.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("POMO_LOG")
        .env_remove("POMO_TICK_MS");
    cmd
}

#[test]
fn test_help_mentions_keys() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"))
        .stdout(predicate::str::contains("space / p"));
}

#[test]
fn test_config_path_under_home() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo/config.yaml"));
}

#[test]
fn test_config_show_defaults_as_json() {
    let home = TempDir::new().unwrap();
    let output = pomo(&home)
        .args(["config", "show", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["exists"], false);
    assert_eq!(parsed["config"]["timer"]["focus_minutes"], 25);
    assert_eq!(parsed["config"]["timer"]["break_minutes"], 5);
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
    assert!(home.path().join(".pomo/config.yaml").exists());

    pomo(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    pomo(&home)
        .args(["config", "show", "-o", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25:00"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".pomo")).unwrap();
    std::fs::write(
        home.path().join(".pomo/config.yaml"),
        "timer:\n  focus_minutes: 61\n",
    )
    .unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("focus duration"));
}

#[test]
fn test_start_rejects_out_of_range_focus() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["start", "--focus", "90"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("focus duration"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_pomo"));
}

#[test]
fn test_completions_without_home() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .env_remove("HOME")
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));

    pomo(&home)
        .env_remove("HOME")
        .args(["config", "path"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("home directory"));
}
