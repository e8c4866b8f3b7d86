// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite selection: maps a test category to pytest selectors.
//!
//! Each category resolves to a different selector list depending on
//! whether the run uses the mock suite (CI) or the real-database suite
//! (local). Selectors are file paths, `file::Class::test` node ids, or
//! `-m <marker>` pairs, passed through to pytest verbatim.

use std::path::Path;

use globset::Glob;

use crate::environment::Environment;
use crate::layout::TestDir;

/// Test categories accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Suite {
    Unit,
    Routes,
    Integration,
    Auth,
    Models,
    Smoke,
    All,
}

impl Suite {
    pub fn name(self) -> &'static str {
        match self {
            Suite::Unit => "unit",
            Suite::Routes => "routes",
            Suite::Integration => "integration",
            Suite::Auth => "auth",
            Suite::Models => "models",
            Suite::Smoke => "smoke",
            Suite::All => "all",
        }
    }
}

/// Resolve the pytest selectors for a suite.
///
/// `root` is only consulted for the local `routes` glob expansion.
pub fn selectors(suite: Suite, env: Environment, root: &Path, test_dir: &TestDir) -> Vec<String> {
    if env.is_ci() {
        mock_selectors(suite, test_dir)
    } else {
        real_selectors(suite, root, test_dir)
    }
}

/// Mock suite: everything funnels into the two mock test files.
fn mock_selectors(suite: Suite, test_dir: &TestDir) -> Vec<String> {
    let dir = test_dir.display_dir();
    let auth = format!("{dir}test_mock_auth.py");
    let integration = format!("{dir}test_mock_integration.py");

    match suite {
        // Routes coverage with mocks is limited to the auth surface.
        Suite::Unit | Suite::Routes | Suite::Auth => vec![auth],
        // Models are exercised through the integration workflows.
        Suite::Integration | Suite::Models => vec![integration],
        Suite::Smoke => vec![format!(
            "{integration}::TestMockIntegrationWorkflows::test_mock_home_endpoint"
        )],
        Suite::All => vec![auth, integration],
    }
}

fn real_selectors(suite: Suite, root: &Path, test_dir: &TestDir) -> Vec<String> {
    let dir = test_dir.display_dir();

    match suite {
        Suite::Unit => vec![format!("{dir}test_models.py"), format!("{dir}test_auth.py")],
        Suite::Routes => expand_routes_glob(root, test_dir),
        Suite::Integration => vec![format!("{dir}test_integration.py")],
        Suite::Auth => vec!["-m".to_string(), "auth".to_string()],
        Suite::Models => vec!["-m".to_string(), "models".to_string()],
        Suite::Smoke => vec![format!(
            "{dir}test_integration.py::TestIntegrationWorkflows::test_home_endpoint"
        )],
        Suite::All => vec![dir],
    }
}

/// Expand `test_routes_*.py` against the test directory.
///
/// pytest does not glob its arguments, so proctor expands the pattern
/// itself. When nothing matches the literal pattern passes through and
/// pytest reports the missing file.
fn expand_routes_glob(root: &Path, test_dir: &TestDir) -> Vec<String> {
    const PATTERN: &str = "test_routes_*.py";
    let dir = test_dir.display_dir();

    let matcher = match Glob::new(PATTERN) {
        Ok(glob) => glob.compile_matcher(),
        Err(_) => return vec![format!("{dir}{PATTERN}")],
    };

    let mut matches: Vec<String> = std::fs::read_dir(root.join(&test_dir.path))
        .into_iter()
        .flatten()
        .filter_map(|e| e.ok())
        .filter(|e| matcher.is_match(e.file_name()))
        .map(|e| format!("{dir}{}", e.file_name().to_string_lossy()))
        .collect();
    matches.sort();

    if matches.is_empty() {
        vec![format!("{dir}{PATTERN}")]
    } else {
        matches
    }
}

#[cfg(test)]
#[path = "suites_tests.rs"]
mod tests;
