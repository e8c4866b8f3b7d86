// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! proctor.toml configuration.
//!
//! Every setting has a default; a project without a config file gets the
//! conventional layout (MongoDB on localhost:27017, `app/` as the
//! coverage source, `python -m pytest` as the runner). Discovery walks
//! from the working directory up to the git root.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::environment::Environment;

pub const CONFIG_FILE: &str = "proctor.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database: DatabaseConfig,
    pub coverage: CoverageConfig,
    pub pytest: PytestConfig,
}

/// Database the local (real) test suite depends on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_host")]
    pub host: String,

    #[serde(default = "DatabaseConfig::default_port")]
    pub port: u16,

    /// Connect timeout for the reachability probe, in milliseconds.
    #[serde(default = "DatabaseConfig::default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            connect_timeout_ms: Self::default_connect_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    fn default_host() -> String {
        "localhost".to_string()
    }

    fn default_port() -> u16 {
        27017
    }

    fn default_connect_timeout_ms() -> u64 {
        1000
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// Coverage instrumentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverageConfig {
    /// Package measured by `--cov=`.
    #[serde(default = "CoverageConfig::default_source")]
    pub source: String,

    /// `--cov-fail-under` threshold for mock suites.
    #[serde(default = "CoverageConfig::default_mock_fail_under")]
    pub mock_fail_under: u32,

    /// `--cov-fail-under` threshold for real-database suites.
    #[serde(default = "CoverageConfig::default_local_fail_under")]
    pub local_fail_under: u32,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            source: Self::default_source(),
            mock_fail_under: Self::default_mock_fail_under(),
            local_fail_under: Self::default_local_fail_under(),
        }
    }
}

impl CoverageConfig {
    fn default_source() -> String {
        "app".to_string()
    }

    fn default_mock_fail_under() -> u32 {
        50
    }

    fn default_local_fail_under() -> u32 {
        70
    }

    /// Threshold for the given environment. Mock suites get a reduced
    /// bar since they exercise less of the application.
    pub fn fail_under(&self, env: Environment) -> u32 {
        if env.is_ci() {
            self.mock_fail_under
        } else {
            self.local_fail_under
        }
    }
}

/// How to invoke the test runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PytestConfig {
    #[serde(default = "PytestConfig::default_program")]
    pub program: String,

    #[serde(default = "PytestConfig::default_args")]
    pub args: Vec<String>,
}

impl Default for PytestConfig {
    fn default() -> Self {
        Self {
            program: Self::default_program(),
            args: Self::default_args(),
        }
    }
}

impl PytestConfig {
    fn default_program() -> String {
        "python".to_string()
    }

    fn default_args() -> Vec<String> {
        vec!["-m".to_string(), "pytest".to_string()]
    }
}

/// Find proctor.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Load a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the discovered config, or defaults when no file exists.
pub fn load_or_default(start_dir: &Path) -> Result<Config, ConfigError> {
    match find_config(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
