//! Behavioral specs for coverage report generation, using a stub
//! `coverage` executable placed first on PATH.

use crate::prelude::*;

/// > A passing run followed by coverage generation exits 0
#[test]
fn passing_run_generates_coverage_reports() {
    let project = Project::with_mock_suite();
    project.stub_pytest(0);

    proctor_cmd()
        .arg("all")
        .env("CI", "true")
        .env("PATH", project.stub_coverage(0))
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Generating HTML coverage report"))
        .stdout(predicates::str::contains("Coverage reports generated:"))
        .stdout(predicates::str::contains("htmlcov/index.html"));
}

/// > Report failures after a passing run do not change the exit code
#[test]
fn coverage_failure_after_passing_run_still_exits_zero() {
    let project = Project::with_mock_suite();
    project.stub_pytest(0);

    proctor_cmd()
        .arg("unit")
        .env("CI", "true")
        .env("PATH", project.stub_coverage(2))
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("FAILED: Generating HTML coverage report"))
        .stdout(predicates::str::contains("All operations completed successfully"));
}

/// > --coverage-only generates reports without running tests
#[test]
fn coverage_only_exits_zero_on_success() {
    let project = Project::standard();

    proctor_cmd()
        .arg("--coverage-only")
        .env("PATH", project.stub_coverage(0))
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage reports generated:"))
        .stdout(predicates::str::contains("Running").not());
}

/// > --coverage-only treats a report failure as the run's result
#[test]
fn coverage_only_failure_exits_one() {
    let project = Project::standard();

    proctor_cmd()
        .arg("--coverage-only")
        .env("PATH", project.stub_coverage(1))
        .current_dir(project.path())
        .assert()
        .code(1)
        // The first failing step short-circuits the sequence.
        .stdout(predicates::str::contains("Generating XML coverage report").not())
        .stdout(predicates::str::contains("Some operations failed"));
}
