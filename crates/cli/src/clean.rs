// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test artifact cleanup.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::status::StatusReporter;

/// Root-level artifacts removed by --clean.
pub const ARTIFACTS: &[&str] = &[
    ".pytest_cache",
    "__pycache__",
    "htmlcov",
    ".coverage",
    "coverage.xml",
    "test-results.xml",
    ".mypy_cache",
];

/// Remove known artifacts and `__pycache__` directories under `app/`.
///
/// Missing artifacts are not an error; removal failures are.
pub fn clean_artifacts(root: &Path, status: &StatusReporter) -> anyhow::Result<()> {
    status.section("Cleaning test artifacts");

    for artifact in ARTIFACTS {
        let path = root.join(artifact);
        if path.is_file() {
            std::fs::remove_file(&path)?;
            status.plain(&format!("Removed file: {artifact}"));
        } else if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
            status.plain(&format!("Removed directory: {artifact}"));
        }
    }

    for cache in pycache_dirs(&root.join("app")) {
        if cache.exists() {
            std::fs::remove_dir_all(&cache)?;
            let rel = cache.strip_prefix(root).unwrap_or(&cache);
            status.plain(&format!("Removed cache: {}", rel.display()));
        }
    }

    Ok(())
}

/// Collect `__pycache__` directories under `dir`.
///
/// Standard filters are disabled: `__pycache__` is almost always
/// gitignored, which is exactly why we are looking for it.
fn pycache_dirs(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkBuilder::new(dir)
        .standard_filters(false)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_some_and(|t| t.is_dir())
                && entry.file_name() == std::ffi::OsStr::new("__pycache__")
        })
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
