//! Integration tests for the `laracrud` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COMPOSER_JSON: &str = r#"{
    "name": "laravel/laravel",
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    }
}
"#;

/// A minimal Laravel project: just `composer.json`.
fn laravel_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("composer.json"), COMPOSER_JSON).unwrap();
    temp
}

/// `laracrud` isolated from the developer's own config and environment.
fn laracrud(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("laracrud").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("LARACRUD_ROUTES__STRATEGY")
        .env_remove("LARACRUD_GENERATOR__ON_CONFLICT");
    cmd
}

fn migration(root: &Path, table: &str) -> Option<String> {
    let suffix = format!("_create_{table}_table.php");
    fs::read_dir(root.join("database/migrations"))
        .ok()?
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|name| name.ends_with(&suffix))
}

#[test]
fn test_help_flag() {
    laracrud(Path::new("."))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("stubs"));
}

#[test]
fn test_version_flag() {
    laracrud(Path::new("."))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_make_command_help() {
    laracrud(Path::new("."))
        .args(["make", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--on-conflict"))
        .stdout(predicate::str::contains("--routes"))
        .stdout(predicate::str::contains("--naming"));
}

#[test]
fn test_make_generates_invoice_crud() {
    let project = laravel_project();
    let root = project.path();

    laracrud(root)
        .args(["make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated Routes:"))
        .stdout(predicate::str::contains(
            "Route::resource('invoices', InvoiceController::class)->except('show');",
        ))
        .stdout(predicate::str::contains("Copy these routes to your routes file."))
        .stdout(predicate::str::contains("CRUD for Invoice generated successfully!"))
        .stdout(predicate::str::contains("php artisan migrate"));

    let controller =
        fs::read_to_string(root.join("app/Http/Controllers/billing/InvoiceController.php"))
            .unwrap();
    assert!(controller.contains("InvoiceController"));
    assert!(root.join("app/Repositories/InvoiceRepository.php").is_file());
    assert!(root.join("app/Models/Invoice.php").is_file());
    assert!(root.join("app/Http/Requests/Invoice/StoreInvoiceRequest.php").is_file());
    assert!(root.join("resources/views/billing/invoices/archive.blade.php").is_file());
    assert!(migration(root, "invoices").is_some());

    let composer = fs::read_to_string(root.join("composer.json")).unwrap();
    assert!(composer.contains(r#""App\\Repositories\\": "app/Repositories/""#));
    assert!(composer.contains(r#""App\\Http\\Requests\\": "app/Http/Requests/""#));

    // routes were printed, not written
    assert!(!root.join("routes/web.php").exists());
}

#[test]
fn test_make_crud_alias_and_root_flag() {
    let project = laravel_project();
    let cwd = TempDir::new().unwrap();

    laracrud(cwd.path())
        .args(["make:crud", "Person", "Admin", "--no-autoload", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("'people'"));

    assert!(project.path().join("app/Models/Person.php").is_file());
    assert!(!cwd.path().join("app").exists());
}

#[test]
fn test_make_dry_run_writes_nothing() {
    let project = laravel_project();
    let root = project.path();

    laracrud(root)
        .args(["make", "Category", "Shop", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("app/Models/Category.php"))
        .stdout(predicate::str::contains("'categories'"));

    assert!(!root.join("app").exists());
    assert_eq!(fs::read_to_string(root.join("composer.json")).unwrap(), COMPOSER_JSON);
}

#[test]
fn test_make_append_routes_is_idempotent() {
    let project = laravel_project();
    let root = project.path();

    for _ in 0..2 {
        laracrud(root)
            .args(["make", "OrderItem", "Shop", "--no-autoload", "--routes", "append"])
            .assert()
            .success();
    }

    let routes = fs::read_to_string(root.join("routes/web.php")).unwrap();
    assert!(routes.starts_with("<?php"));
    assert_eq!(routes.matches("Route::resource('order-items'").count(), 1);
}

#[test]
fn test_make_skip_keeps_edited_files() {
    let project = laravel_project();
    let root = project.path();
    let model = root.join("app/Models/Invoice.php");

    laracrud(root)
        .args(["make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .success();
    fs::write(&model, "<?php // edited").unwrap();

    laracrud(root)
        .args(["make", "Invoice", "Billing", "--no-autoload", "--on-conflict", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"));

    assert_eq!(fs::read_to_string(&model).unwrap(), "<?php // edited");
}

#[test]
fn test_make_json_output() {
    let project = laravel_project();

    let assert = laracrud(project.path())
        .args([
            "--output-format",
            "json",
            "make",
            "Invoice",
            "Billing",
            "--no-autoload",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.trim_start().starts_with('{'));
    assert!(stdout.contains("\"run_id\""));
    assert!(stdout.contains("\"snake_plural\": \"invoices\""));
    assert!(!stdout.contains("Generated Routes:"));
}

#[test]
fn test_project_stub_overrides_are_used() {
    let project = laravel_project();
    let root = project.path();
    let stubs = root.join("stubs/laracrud");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("model.stub"), "<?php // custom {{singular}} model\n").unwrap();

    laracrud(root)
        .args(["make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("app/Models/Invoice.php")).unwrap(),
        "<?php // custom Invoice model\n"
    );
}

#[test]
fn test_quiet_flag_still_prints_routes() {
    let project = laravel_project();

    laracrud(project.path())
        .args(["-q", "make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route::resource('invoices'"))
        .stdout(predicate::str::contains("generated successfully").not());
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let project = laravel_project();

    laracrud(project.path())
        .args(["-v", "make", "Invoice", "Billing", "--no-autoload"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_list_command() {
    let dir = TempDir::new().unwrap();
    laracrud(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifacts:"))
        .stdout(predicate::str::contains("app/Models/"))
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn test_list_plain_names() {
    let dir = TempDir::new().unwrap();
    laracrud(dir.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("controller.stub"))
        .stdout(predicate::str::contains("archive_view.stub"));
}

#[test]
fn test_stubs_publish_and_keep() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    laracrud(root).arg("stubs").assert().success();
    let model_stub = root.join("stubs/laracrud/model.stub");
    assert!(model_stub.is_file());
    assert_eq!(fs::read_dir(root.join("stubs/laracrud")).unwrap().count(), 12);

    fs::write(&model_stub, "edited").unwrap();
    laracrud(root)
        .arg("stubs")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&model_stub).unwrap(), "edited");

    laracrud(root).args(["stubs", "--force"]).assert().success();
    assert_ne!(fs::read_to_string(&model_stub).unwrap(), "edited");
}

#[test]
fn test_init_then_config_get() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    laracrud(root).arg("init").assert().success();
    assert!(root.join(".laracrud.toml").is_file());

    laracrud(root)
        .args(["config", "get", "routes.file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("routes/web.php"));
}

#[test]
fn test_local_config_changes_defaults() {
    let project = laravel_project();
    let root = project.path();
    fs::write(
        root.join(".laracrud.toml"),
        "[routes]\nstrategy = \"append\"\n\n[autoload]\nrefresh = false\n",
    )
    .unwrap();

    laracrud(root)
        .args(["make", "Invoice", "Billing"])
        .assert()
        .success();
    assert!(root.join("routes/web.php").is_file());
}

#[test]
fn test_env_overrides_config() {
    let dir = TempDir::new().unwrap();
    laracrud(dir.path())
        .env("LARACRUD_ROUTES__STRATEGY", "append")
        .args(["config", "get", "routes.strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("append"));
}

#[test]
fn test_shell_completions() {
    laracrud(Path::new("."))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
