//! Tests for error reporting, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn laracrud(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("laracrud").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

fn laravel_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("composer.json"),
        r#"{"autoload": {"psr-4": {"App\\": "app/"}}}"#,
    )
    .unwrap();
    dir
}

#[test]
fn test_error_missing_composer_json() {
    let dir = TempDir::new().unwrap();

    laracrud(&dir)
        .args(["make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no composer.json"))
        .stderr(predicate::str::contains("--root"));

    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_error_invalid_model_name() {
    let dir = laravel_project();

    laracrud(&dir)
        .args(["make", "Invoice-Item", "Billing", "--no-autoload"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid model name"));
}

#[test]
fn test_error_root_is_not_a_directory() {
    let dir = TempDir::new().unwrap();

    laracrud(&dir)
        .args(["make", "Invoice", "Billing", "--root", "missing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_error_conflict_with_fail_policy_writes_nothing() {
    let dir = laravel_project();
    let model = dir.path().join("app/Models/Invoice.php");
    fs::create_dir_all(model.parent().unwrap()).unwrap();
    fs::write(&model, "<?php // mine").unwrap();

    laracrud(&dir)
        .args(["make", "Invoice", "Billing", "--no-autoload", "--on-conflict", "fail"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exist"))
        .stderr(predicate::str::contains("--on-conflict skip"));

    assert_eq!(fs::read_to_string(&model).unwrap(), "<?php // mine");
    assert!(!dir.path().join("app/Http").exists());
}

#[test]
fn test_error_unknown_token_in_strict_mode() {
    let dir = laravel_project();
    let stubs = dir.path().join("my-stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("model.stub"), "<?php // {{author}}").unwrap();

    laracrud(&dir)
        .args(["make", "Invoice", "Billing", "--no-autoload", "--strict", "--stubs"])
        .arg(&stubs)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("author"));

    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_error_invalid_flag_value() {
    let dir = TempDir::new().unwrap();

    laracrud(&dir)
        .args(["make", "Invoice", "Billing", "--on-conflict", "ask"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ask"));
}

#[test]
fn test_error_unknown_config_key() {
    let dir = TempDir::new().unwrap();

    laracrud(&dir)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_broken_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".laracrud.toml"), "[routes]\nstrategy = \"email\"\n").unwrap();

    laracrud(&dir).arg("list").assert().code(4);
}

#[test]
fn test_error_json_mode_reports_json() {
    let dir = TempDir::new().unwrap();

    laracrud(&dir)
        .args(["--output-format", "json", "make", "Invoice", "Billing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"exit_code\":3"));
}
