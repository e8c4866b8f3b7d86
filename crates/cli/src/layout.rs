// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project layout detection.
//!
//! Tests are expected in `tests/` or `backend/tests/`; application code
//! in `app/`. CI mode additionally requires a fixed set of mock test
//! files to exist before the runner is invoked.

use std::path::{Path, PathBuf};

/// Mock test files that must exist for a CI (mock) run, relative to the
/// test directory.
pub const MOCK_TEST_FILES: &[&str] = &[
    "test_mock_auth.py",
    "test_mock_integration.py",
    "conftest_mock.py",
    "mocks/__init__.py",
    "mocks/mock_database.py",
];

/// The detected test directory, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDir {
    pub path: PathBuf,
    pub exists: bool,
}

impl TestDir {
    /// Relative path with a trailing separator, as passed to pytest.
    pub fn display_dir(&self) -> String {
        format!("{}/", self.path.display())
    }
}

/// Detect the test directory: `tests/` first, then `backend/tests/`,
/// falling back to `tests/` when neither exists.
pub fn detect_test_dir(root: &Path) -> TestDir {
    for candidate in ["tests", "backend/tests"] {
        let path = PathBuf::from(candidate);
        if root.join(&path).is_dir() {
            return TestDir { path, exists: true };
        }
    }
    TestDir {
        path: PathBuf::from("tests"),
        exists: false,
    }
}

/// Recognized project structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// `app/` + `backend/tests/`
    Backend,
    /// `app/` + `tests/`
    Standard,
    /// Bare `backend/` directory, possibly holding app and tests.
    BackendOnly { has_app: bool, has_tests: bool },
    Unknown,
}

impl Structure {
    pub fn is_known(self) -> bool {
        !matches!(self, Structure::Unknown)
    }
}

/// Classify the project structure from directory existence.
pub fn detect_structure(root: &Path) -> Structure {
    let has_app = root.join("app").is_dir();
    if has_app && root.join("backend/tests").is_dir() {
        Structure::Backend
    } else if has_app && root.join("tests").is_dir() {
        Structure::Standard
    } else if root.join("backend").is_dir() {
        Structure::BackendOnly {
            has_app: root.join("backend/app").is_dir(),
            has_tests: root.join("backend/tests").is_dir(),
        }
    } else {
        Structure::Unknown
    }
}

/// Mock files missing from the test directory, relative to the root.
///
/// Empty means the mock suite preflight passed.
pub fn missing_mock_files(root: &Path, test_dir: &TestDir) -> Vec<PathBuf> {
    MOCK_TEST_FILES
        .iter()
        .map(|name| test_dir.path.join(name))
        .filter(|rel| !root.join(rel).is_file())
        .collect()
}

/// Count `test_*.py` files directly under the test directory.
pub fn count_test_files(root: &Path, test_dir: &TestDir) -> usize {
    let Ok(entries) = std::fs::read_dir(root.join(&test_dir.path)) else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with("test_") && name.ends_with(".py")
        })
        .count()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
