// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking subprocess execution with status reporting.

use std::process::Command;

use anyhow::Context;

use crate::status::StatusReporter;

/// Render a command line for display.
pub fn render_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run one step: announce it, block on the child, report the outcome.
///
/// Returns `Ok(false)` when the child exits non-zero; spawn failures
/// (tool not installed) are hard errors.
pub fn run_step(status: &StatusReporter, description: &str, cmd: &mut Command) -> anyhow::Result<bool> {
    status.section(description);
    status.command(&render_command(cmd));

    tracing::debug!(command = %render_command(cmd), "spawning");
    let exit = cmd
        .status()
        .with_context(|| format!("failed to launch `{}`", cmd.get_program().to_string_lossy()))?;

    if exit.success() {
        status.step_ok(description);
        Ok(true)
    } else {
        status.step_failed(description, exit.code());
        Ok(false)
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
