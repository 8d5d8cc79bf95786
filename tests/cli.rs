//! End-to-end tests for the focusdesk binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn focusdesk(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focusdesk").unwrap();
    cmd.env("FOCUSDESK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_bmi_pretty() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["bmi", "--weight", "70", "--height", "175"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22.86"))
        .stdout(predicate::str::contains("Normal weight"));
}

#[test]
fn test_bmi_rejects_zero_height() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["bmi", "-w", "70", "-H", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid height."));
}

#[test]
fn test_age_json() {
    let home = TempDir::new().unwrap();
    let output = focusdesk(&home)
        .args(["-o", "json", "age", "1990-05-15", "--on", "2024-03-10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["age"]["years"], 33);
    assert_eq!(parsed["age"]["months"], 9);
    assert_eq!(parsed["age"]["days"], 24);
}

#[test]
fn test_age_rejects_future_birth() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["age", "2030-01-01", "--on", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_task_lifecycle_persists() {
    let home = TempDir::new().unwrap();

    focusdesk(&home)
        .args(["task", "add", "Write report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    let output = focusdesk(&home)
        .args(["task", "list", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 1);
    let id = parsed["items"][0]["id"].as_i64().unwrap().to_string();

    focusdesk(&home)
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    focusdesk(&home)
        .args(["task", "rm", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    focusdesk(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 tasks"));
}

#[test]
fn test_task_rm_declined_on_stdin() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["task", "add", "Keep me"])
        .assert()
        .success();

    let output = focusdesk(&home)
        .args(["-o", "json", "task", "list"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = parsed["items"][0]["id"].as_i64().unwrap().to_string();

    focusdesk(&home)
        .args(["task", "rm", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));
}

#[test]
fn test_task_add_empty_fails() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["task", "add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a task."));
}

#[test]
fn test_config_path_uses_home_override() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            home.path().join("config.yaml").display().to_string(),
        ));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.yaml").exists());

    focusdesk(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    focusdesk(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_minutes: 25"));
}

#[test]
fn test_config_default_output_is_honoured() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    let output = focusdesk(&home)
        .args(["bmi", "-w", "90", "-H", "180"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["category"], "overweight");
}

#[test]
fn test_timer_rejects_zero_minutes() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["timer", "run", "--focus", "0", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timer configuration"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    focusdesk(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focusdesk"));
}
