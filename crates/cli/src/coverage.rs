// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage report generation via the external `coverage` tool.

use std::process::Command;

use crate::exec;
use crate::status::StatusReporter;

const STEPS: &[(&str, &str)] = &[
    ("html", "Generating HTML coverage report"),
    ("xml", "Generating XML coverage report"),
    ("report", "Displaying coverage summary"),
];

/// Generate HTML and XML reports plus the terminal summary.
///
/// Steps run in order; the first failure short-circuits.
pub fn generate_reports(status: &StatusReporter) -> anyhow::Result<bool> {
    for (subcommand, description) in STEPS {
        let mut cmd = Command::new("coverage");
        cmd.arg(subcommand);
        if !exec::run_step(status, description, &mut cmd)? {
            return Ok(false);
        }
    }

    status.plain("");
    status.plain("Coverage reports generated:");
    status.plain("- HTML report: htmlcov/index.html");
    status.plain("- XML report: coverage.xml");
    Ok(true)
}
