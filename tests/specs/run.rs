//! Behavioral specs for test execution and coverage gating, using a
//! stub runner configured through proctor.toml.

use std::net::TcpListener;

use crate::prelude::*;

/// > A successful run yields exit code 0
#[test]
fn successful_mock_run_exits_zero() {
    let project = Project::with_mock_suite();
    project.stub_pytest(0);

    proctor_cmd()
        .args(["unit", "--no-coverage"])
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Running unit tests (mock)"))
        .stdout(predicates::str::contains("All operations completed successfully"));
}

/// > A failed run yields exit code 1
#[test]
fn failed_mock_run_exits_one() {
    let project = Project::with_mock_suite();
    project.stub_pytest(1);

    proctor_cmd()
        .args(["unit", "--no-coverage"])
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Some operations failed"));
}

/// > A failed run does not trigger coverage generation
#[test]
fn failed_run_skips_coverage_reports() {
    let project = Project::with_mock_suite();
    project.stub_pytest(2);

    proctor_cmd()
        .arg("all")
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Generating HTML coverage report").not());
}

/// > Local mode runs once the database probe succeeds
#[test]
fn local_run_with_reachable_database_exits_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let project = Project::standard();
    project.file(
        "proctor.toml",
        &format!(
            "[database]\nhost = \"127.0.0.1\"\nport = {port}\n\n\
             [pytest]\nprogram = \"sh\"\nargs = [\"-c\", \"exit 0\"]\n"
        ),
    );

    proctor_cmd()
        .args(["smoke", "--no-coverage"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Running smoke tests (real database)"))
        .stdout(predicates::str::contains("Full integration tests passed"));
}

/// > Local mode fails fast when the database is unreachable
#[test]
fn local_run_without_database_fails_before_pytest() {
    let project = Project::standard();
    project.file(
        "proctor.toml",
        "[database]\nhost = \"127.0.0.1\"\nport = 1\nconnect_timeout_ms = 200\n",
    );

    proctor_cmd()
        .arg("integration")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("database connection failed"))
        .stdout(predicates::str::contains("Running integration tests").not());
}

/// > The failure summary carries a mode-appropriate hint
#[test]
fn ci_failure_hint_points_at_local_debugging() {
    let project = Project::with_mock_suite();
    project.stub_pytest(1);

    proctor_cmd()
        .args(["auth", "--no-coverage"])
        .env("CI", "true")
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Try running locally"));
}
