// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pytest invocation: argument construction and execution.

use std::process::Command;

use crate::config::Config;
use crate::environment::Environment;
use crate::exec;
use crate::status::StatusReporter;
use crate::suites::Suite;

/// Options that shape one pytest invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub verbose: bool,
    pub coverage: bool,
    pub parallel: bool,
    /// Clear CI indicator variables in the child (for --force-local).
    pub force_local: bool,
}

/// Build the pytest argument list (excluding the program and its base
/// args from config).
pub fn build_args(
    config: &Config,
    env: Environment,
    opts: RunOptions,
    selectors: &[String],
) -> Vec<String> {
    let mut args = Vec::new();

    args.push(if opts.verbose { "-v" } else { "-q" }.to_string());

    if opts.coverage {
        args.push(format!("--cov={}", config.coverage.source));
        args.push("--cov-report=html:htmlcov".to_string());
        args.push("--cov-report=term-missing".to_string());
        args.push(format!("--cov-fail-under={}", config.coverage.fail_under(env)));
    }

    // Mock suites run serially; worker processes fight over the shared
    // in-memory database stand-in.
    if opts.parallel && !env.is_ci() {
        args.push("-n".to_string());
        args.push("auto".to_string());
    }

    args.extend(selectors.iter().cloned());

    if env.is_ci() {
        args.push("-p".to_string());
        args.push("no:warnings".to_string());
        args.push("--tb=short".to_string());
    }

    args
}

/// Run the selected suite. Returns whether pytest passed.
pub fn run_suite(
    status: &StatusReporter,
    config: &Config,
    env: Environment,
    suite: Suite,
    opts: RunOptions,
    selectors: &[String],
) -> anyhow::Result<bool> {
    let mut cmd = Command::new(&config.pytest.program);
    cmd.args(&config.pytest.args);
    cmd.args(build_args(config, env, opts, selectors));

    if env.is_ci() {
        // The test suite's conftest switches to the mock database on CI=true.
        cmd.env("CI", "true");
    } else if opts.force_local {
        cmd.env_remove("CI");
        cmd.env_remove("GITHUB_ACTIONS");
    }

    let mode = if env.is_ci() { "mock" } else { "real database" };
    let description = format!("Running {} tests ({mode})", suite.name());
    exec::run_step(status, &description, &mut cmd)
}

#[cfg(test)]
#[path = "pytest_tests.rs"]
mod tests;
