//! Test helpers for behavioral specifications.
//!
//! Provides a project-fixture builder and a preconfigured command for
//! the proctor binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;
use std::process::Command;

use proctor::layout::MOCK_TEST_FILES;
use tempfile::TempDir;

/// Returns a Command for the proctor binary with CI indicator variables
/// cleared, so specs control the detected environment explicitly.
pub fn proctor_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("proctor"));
    cmd.env_remove("CI")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("PROCTOR_CONFIG");
    cmd
}

/// A throwaway project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Standard layout: `app/` plus an empty `tests/` directory.
    pub fn standard() -> Self {
        let project = Self::empty();
        project.dir("app");
        project.dir("tests");
        project
    }

    /// Standard layout with the full mock suite present.
    pub fn with_mock_suite() -> Self {
        let project = Self::standard();
        for file in MOCK_TEST_FILES {
            project.file(&format!("tests/{file}"), "");
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
        self
    }

    pub fn dir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    /// Write a proctor.toml that replaces pytest with a stub command.
    ///
    /// `sh -c "exit N"` ignores the appended pytest flags, so the
    /// orchestration sees a runner with a fixed exit code.
    pub fn stub_pytest(&self, exit_code: i32) -> &Self {
        self.file(
            "proctor.toml",
            &format!("[pytest]\nprogram = \"sh\"\nargs = [\"-c\", \"exit {exit_code}\"]\n"),
        )
    }

    /// Place a stub `coverage` executable with a fixed exit code first
    /// on PATH. Returns the PATH value to set on the command.
    #[cfg(unix)]
    pub fn stub_coverage(&self, exit_code: i32) -> String {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.dir.path().join("stub-bin");
        std::fs::create_dir_all(&bin).unwrap();
        let script = bin.join("coverage");
        std::fs::write(&script, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        format!(
            "{}:{}",
            bin.display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }
}
