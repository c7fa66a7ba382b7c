//! Tests for error reporting and exit codes.

mod common;

use common::Project;
use predicates::prelude::*;

#[test]
fn help_exits_zero() {
    Project::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn version_exits_zero() {
    Project::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_argument_exits_one() {
    Project::new()
        .cmd()
        .args(["generate", "Product", "--bogus"])
        .assert()
        .code(1);
}

#[test]
fn only_with_exclude_is_rejected_before_writing() {
    let project = Project::new();

    project
        .cmd()
        .args(["generate", "Product", "--path", "p", "--only", "index", "--exclude", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--only and --exclude cannot be used together"));

    assert!(!project.path().join("resources").exists());
}

#[test]
fn invalid_view_names_are_all_reported() {
    Project::new()
        .cmd()
        .args(["generate", "Product", "--path", "p", "--only", "index,bogus,Detail"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid view name(s): bogus, detail"));
}

#[test]
fn empty_filters_count_as_absent() {
    let project = Project::new();

    project
        .cmd()
        .args(["generate", "Product", "--path", "p", "--only", "", "--exclude", ""])
        .assert()
        .success();

    assert!(project.view("p/forms/form.blade.php").is_file());
}

#[test]
fn unknown_entity_suggests_declaring_it() {
    Project::new()
        .cmd()
        .args(["generate", "Ghost", "--path", "ghosts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Entity 'Ghost' not found"))
        .stderr(predicate::str::contains("[entities.Ghost]"));
}

#[test]
fn invalid_entity_name_is_rejected() {
    Project::new()
        .cmd()
        .args(["generate", "../etc", "--path", "p"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid entity name"));
}

#[test]
fn broken_schema_is_a_configuration_error() {
    let project = Project::new();
    std::fs::write(project.path().join("crudgen.toml"), "[entities.Product\n").unwrap();

    project
        .cmd()
        .args(["generate", "Product", "--path", "p"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid entity schema"));
}

#[test]
fn missing_config_file_is_an_error() {
    let project = Project::new();
    std::fs::remove_file(project.path().join("config.toml")).unwrap();

    project
        .cmd()
        .args(["config", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn json_errors_go_to_stderr_as_json() {
    let assert = Project::new()
        .cmd()
        .env("RUST_LOG", "off")
        .args(["--output-format", "json", "generate", "Ghost", "--path", "p"])
        .assert()
        .code(1);

    let error: serde_json::Value = serde_json::from_slice(&assert.get_output().stderr).unwrap();
    assert_eq!(error["status"], "error");
    assert_eq!(error["category"], "NotFound");
}
