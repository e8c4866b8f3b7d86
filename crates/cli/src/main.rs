// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! proctor binary: parse arguments, orchestrate, map the outcome to an
//! exit code (0 success, 1 failure).

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use proctor::clean::clean_artifacts;
use proctor::cli::Cli;
use proctor::color::resolve_color;
use proctor::config;
use proctor::coverage;
use proctor::environment::{self, Environment};
use proctor::info::{self, EnvironmentInfo, StructureInfo};
use proctor::layout;
use proctor::probe::probe_database;
use proctor::pytest::{self, RunOptions};
use proctor::status::StatusReporter;
use proctor::suites;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PROCTOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "proctor", &mut std::io::stdout());
        return Ok(true);
    }

    let status = StatusReporter::new(resolve_color(cli.color, cli.no_color));

    // JSON dumps stay machine-readable: no banner around them.
    let json_dump = cli.json && (cli.info || cli.structure);
    if !json_dump {
        status.banner("proctor - backend test runner");
        if cli.force_ci {
            status.plain("Forced CI mode - using mock tests");
        } else if cli.force_local {
            status.plain("Forced local mode - using real database tests");
        }
    }

    let root = std::env::current_dir().context("failed to resolve working directory")?;

    let env = environment::resolve(cli.force_ci, cli.force_local);
    tracing::debug!(?env, "environment resolved");

    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::load_or_default(&root)?,
    };

    let test_dir = layout::detect_test_dir(&root);

    // Informational dumps exit before any orchestration.
    if cli.info || cli.structure {
        let env_info = EnvironmentInfo::collect(&root, env, &config, &test_dir);
        let structure = layout::detect_structure(&root);
        if cli.json {
            let doc = if cli.structure {
                serde_json::json!({
                    "structure": StructureInfo::from(structure),
                    "environment": env_info,
                })
            } else {
                serde_json::json!({ "environment": env_info })
            };
            status.plain(&serde_json::to_string_pretty(&doc)?);
        } else {
            if cli.structure {
                info::print_structure(&status, structure);
            }
            env_info.print_text(&status);
        }
        return Ok(true);
    }

    EnvironmentInfo::collect(&root, env, &config, &test_dir).print_text(&status);

    let structure = layout::detect_structure(&root);
    info::print_structure(&status, structure);
    if !structure.is_known() {
        status.warn("unexpected project structure; this might cause test discovery issues");
    }

    if !test_dir.exists {
        status.error(&format!("test directory not found: {}", test_dir.display_dir()));
        status.plain("Please ensure your tests are in 'tests/' or 'backend/tests/'");
        return Ok(false);
    }

    // Mock-file preflight: never start pytest against a missing suite.
    if env.is_ci() {
        let missing = layout::missing_mock_files(&root, &test_dir);
        if !missing.is_empty() {
            status.error("missing mock test files:");
            for path in &missing {
                status.plain(&format!("  - {}", path.display()));
            }
            status.plain(&format!(
                "Please create these files in your {} directory.",
                test_dir.display_dir()
            ));
            status.plain("Run with --force-local to use real database tests instead.");
            return Ok(false);
        }
    }

    if cli.clean {
        clean_artifacts(&root, &status)?;
    }

    let coverage_enabled = !cli.no_coverage;

    let success = if cli.coverage_only {
        coverage::generate_reports(&status)?
    } else {
        if !prepare_environment(&status, env, &config) {
            status.summary(false, env);
            return Ok(false);
        }

        let selectors = suites::selectors(cli.suite, env, &root, &test_dir);
        let opts = RunOptions {
            verbose: cli.verbose,
            coverage: coverage_enabled,
            parallel: cli.parallel,
            force_local: cli.force_local,
        };

        let passed = pytest::run_suite(&status, &config, env, cli.suite, opts, &selectors)?;
        if passed && coverage_enabled {
            // Report failures never override a passing run; the report
            // result decides the exit code only in --coverage-only mode.
            coverage::generate_reports(&status)?;
        }
        passed
    };

    status.summary(success, env);
    Ok(success)
}

/// Verify the run's prerequisites: nothing for mock suites, a reachable
/// database for real ones.
fn prepare_environment(status: &StatusReporter, env: Environment, config: &config::Config) -> bool {
    status.section("Setting up test environment");

    match env {
        Environment::Ci => {
            status.plain("CI environment detected - using mock tests");
            status.step_ok("mock environment ready");
            true
        }
        Environment::Local => {
            status.plain("Local environment detected - using real database tests");
            match probe_database(&config.database) {
                Ok(()) => {
                    status.step_ok(&format!("database reachable at {}", config.database.addr()));
                    true
                }
                Err(err) => {
                    status.error(&format!(
                        "database connection failed ({}): {err}",
                        config.database.addr()
                    ));
                    status.plain(&format!(
                        "Please ensure MongoDB is running on {}",
                        config.database.addr()
                    ));
                    status.plain("Or set CI=true (or pass --force-ci) to use mock tests");
                    false
                }
            }
        }
    }
}
