// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment and structure reporting for --info / --structure.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::environment::Environment;
use crate::layout::{self, Structure, TestDir};
use crate::status::StatusReporter;

/// Snapshot of the detected test environment.
#[derive(Debug, Serialize)]
pub struct EnvironmentInfo {
    pub environment: String,
    pub test_mode: String,
    pub database: String,
    pub coverage_fail_under: u32,
    pub working_dir: String,
    pub test_dir: String,
    pub test_dir_exists: bool,
    pub ci_var: String,
    pub github_actions_var: String,
    pub test_file_count: usize,
}

impl EnvironmentInfo {
    pub fn collect(root: &Path, env: Environment, config: &Config, test_dir: &TestDir) -> Self {
        let (test_mode, database) = match env {
            Environment::Ci => (
                "mock tests (no database required)".to_string(),
                "in-memory mock database".to_string(),
            ),
            Environment::Local => (
                "full integration tests".to_string(),
                format!("MongoDB at {}", config.database.addr()),
            ),
        };

        Self {
            environment: env.label().to_string(),
            test_mode,
            database,
            coverage_fail_under: config.coverage.fail_under(env),
            working_dir: root.display().to_string(),
            test_dir: test_dir.display_dir(),
            test_dir_exists: test_dir.exists,
            ci_var: std::env::var("CI").unwrap_or_else(|_| "false".to_string()),
            github_actions_var: std::env::var("GITHUB_ACTIONS")
                .unwrap_or_else(|_| "false".to_string()),
            test_file_count: layout::count_test_files(root, test_dir),
        }
    }

    pub fn print_text(&self, status: &StatusReporter) {
        status.section("Test Environment Information");
        status.plain(&format!("Environment: {}", self.environment));
        status.plain(&format!("Test mode: {}", self.test_mode));
        status.plain(&format!("Database: {}", self.database));
        status.plain(&format!(
            "Coverage threshold: {}%",
            self.coverage_fail_under
        ));
        status.plain(&format!("Working directory: {}", self.working_dir));
        if self.test_dir_exists {
            status.plain(&format!("Test directory: {}", self.test_dir));
            status.plain(&format!(
                "Available test files: {} found",
                self.test_file_count
            ));
        } else {
            status.plain(&format!("Test directory: {} (not found)", self.test_dir));
        }
        status.plain(&format!("CI environment variable: {}", self.ci_var));
        status.plain(&format!(
            "GitHub Actions variable: {}",
            self.github_actions_var
        ));
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Print the structure classification.
pub fn print_structure(status: &StatusReporter, structure: Structure) {
    status.section("Project Structure Detection");
    match structure {
        Structure::Backend => {
            status.plain("Backend structure detected:");
            status.plain("  app/ - application code");
            status.plain("  backend/tests/ - test files");
        }
        Structure::Standard => {
            status.plain("Standard structure detected:");
            status.plain("  app/ - application code");
            status.plain("  tests/ - test files");
        }
        Structure::BackendOnly { has_app, has_tests } => {
            status.plain("Backend directory found");
            if has_app {
                status.plain("  backend/app/ - application code");
            }
            if has_tests {
                status.plain("  backend/tests/ - test files");
            }
        }
        Structure::Unknown => {
            status.plain("No standard structure detected");
            status.plain("  expected: app/ + tests/ OR app/ + backend/tests/");
        }
    }
}

/// Serializable form of the structure classification for --json.
#[derive(Debug, Serialize)]
pub struct StructureInfo {
    pub structure: &'static str,
    pub known: bool,
}

impl StructureInfo {
    pub fn from(structure: Structure) -> Self {
        let name = match structure {
            Structure::Backend => "backend",
            Structure::Standard => "standard",
            Structure::BackendOnly { .. } => "backend-only",
            Structure::Unknown => "unknown",
        };
        Self {
            structure: name,
            known: structure.is_known(),
        }
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
