//! Behavioral specs for preflight checks: test directory, mock files,
//! and config loading.

use crate::prelude::*;

/// > Missing test directory short-circuits with exit code 1
#[test]
fn missing_test_directory_fails() {
    let project = Project::empty();

    proctor_cmd()
        .arg("unit")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("test directory not found"));
}

/// > CI mode with missing mock files exits 1 without invoking pytest
#[test]
fn ci_mode_requires_mock_files() {
    let project = Project::standard();

    proctor_cmd()
        .arg("unit")
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("missing mock test files"))
        .stdout(predicates::str::contains("test_mock_auth.py"))
        // The runner never starts.
        .stdout(predicates::str::contains("Running unit tests").not());
}

/// > The preflight message suggests --force-local as a way out
#[test]
fn mock_preflight_suggests_force_local() {
    let project = Project::standard();

    proctor_cmd()
        .arg("all")
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("--force-local"));
}

/// > Local mode skips the mock preflight entirely
#[test]
fn local_mode_ignores_missing_mock_files() {
    let project = Project::standard();
    // No database listening on this port: setup fails, but only after
    // the preflight has passed.
    project.file(
        "proctor.toml",
        "[database]\nhost = \"127.0.0.1\"\nport = 1\nconnect_timeout_ms = 200\n",
    );

    proctor_cmd()
        .arg("unit")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("missing mock test files").not())
        .stdout(predicates::str::contains("database connection failed"));
}

/// > Malformed proctor.toml is reported with the file path
#[test]
fn invalid_config_fails_with_parse_error() {
    let project = Project::standard();
    project.file("proctor.toml", "[database]\nport = \"not a number\"\n");

    proctor_cmd()
        .arg("--info")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to parse"))
        .stderr(predicates::str::contains("proctor.toml"));
}

/// > Unknown config keys are rejected
#[test]
fn unknown_config_keys_are_rejected() {
    let project = Project::standard();
    project.file("proctor.toml", "[coverage]\nthreshold = 80\n");

    proctor_cmd()
        .arg("--info")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to parse"));
}
