//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::color::ColorMode;
use crate::suites::Suite;

/// Test orchestration for web backend projects
#[derive(Parser)]
#[command(name = "proctor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Test suite to run
    #[arg(value_enum, default_value = "all", value_name = "SUITE")]
    pub suite: Suite,

    /// Verbose test output (pytest -v instead of -q)
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip coverage instrumentation and report generation
    #[arg(long)]
    pub no_coverage: bool,

    /// Run tests in parallel (local mode only)
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Clean test artifacts before running
    #[arg(long)]
    pub clean: bool,

    /// Only generate coverage reports (don't run tests)
    #[arg(long)]
    pub coverage_only: bool,

    /// Force CI mode (use mock tests even locally)
    #[arg(long, conflicts_with = "force_local")]
    pub force_ci: bool,

    /// Force local mode (use real database tests even in CI)
    #[arg(long)]
    pub force_local: bool,

    /// Show environment information and exit
    #[arg(long)]
    pub info: bool,

    /// Show project structure detection and exit
    #[arg(long)]
    pub structure: bool,

    /// Emit --info / --structure output as JSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "PROCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
