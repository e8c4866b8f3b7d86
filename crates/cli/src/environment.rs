// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CI environment detection.
//!
//! Classification is a pure function over the two indicator variables so
//! the four truth-table combinations are testable without touching the
//! process environment.

/// Execution environment for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Automated CI context: mock test suite, no database required.
    Ci,
    /// Developer machine: real database test suite.
    Local,
}

impl Environment {
    pub fn is_ci(self) -> bool {
        matches!(self, Environment::Ci)
    }

    /// Human-readable label for status output.
    pub fn label(self) -> &'static str {
        match self {
            Environment::Ci => "CI/CD",
            Environment::Local => "local development",
        }
    }
}

/// Classify from raw indicator values (`CI` and `GITHUB_ACTIONS`).
///
/// Either variable equal to "true" (case-insensitive, surrounding
/// whitespace ignored) means CI.
pub fn classify(ci: Option<&str>, github_actions: Option<&str>) -> Environment {
    if is_truthy(ci) || is_truthy(github_actions) {
        Environment::Ci
    } else {
        Environment::Local
    }
}

fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Classify from the process environment.
pub fn detect() -> Environment {
    classify(
        std::env::var("CI").ok().as_deref(),
        std::env::var("GITHUB_ACTIONS").ok().as_deref(),
    )
}

/// Resolve the environment, letting force flags override auto-detection.
pub fn resolve(force_ci: bool, force_local: bool) -> Environment {
    if force_ci {
        Environment::Ci
    } else if force_local {
        Environment::Local
    } else {
        detect()
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
