// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing progress output.
//!
//! All orchestration status goes through this reporter rather than the
//! tracing logger: it is the program's primary output, not diagnostics.
//! Write errors (closed pipe) are swallowed.

use std::io::Write;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::scheme;
use crate::environment::Environment;

pub struct StatusReporter {
    choice: ColorChoice,
}

impl StatusReporter {
    pub fn new(choice: ColorChoice) -> Self {
        Self { choice }
    }

    fn with_color(&self, spec: &ColorSpec, text: &str) {
        let mut out = StandardStream::stdout(self.choice);
        let _ = out.set_color(spec);
        let _ = write!(out, "{text}");
        let _ = out.reset();
        let _ = writeln!(out);
    }

    /// Top banner.
    pub fn banner(&self, title: &str) {
        self.with_color(&scheme::section(), title);
        self.plain(&"=".repeat(50));
    }

    /// Section header for a step about to run.
    pub fn section(&self, title: &str) {
        self.plain("");
        self.with_color(&scheme::section(), title);
        self.plain(&"-".repeat(50));
    }

    /// Echo the command line for a step.
    pub fn command(&self, rendered: &str) {
        self.with_color(&scheme::command(), &format!("command: {rendered}"));
    }

    pub fn plain(&self, msg: &str) {
        let mut out = StandardStream::stdout(self.choice);
        let _ = writeln!(out, "{msg}");
    }

    pub fn step_ok(&self, description: &str) {
        self.with_color(&scheme::pass(), &format!("ok: {description}"));
    }

    pub fn step_failed(&self, description: &str, code: Option<i32>) {
        let line = match code {
            Some(code) => format!("FAILED: {description} (exit code {code})"),
            None => format!("FAILED: {description} (terminated by signal)"),
        };
        self.with_color(&scheme::fail(), &line);
    }

    pub fn warn(&self, msg: &str) {
        self.with_color(&scheme::warn(), &format!("warning: {msg}"));
    }

    pub fn error(&self, msg: &str) {
        self.with_color(&scheme::fail(), &format!("error: {msg}"));
    }

    /// Final summary after all steps.
    pub fn summary(&self, success: bool, env: Environment) {
        self.plain("");
        if success {
            self.with_color(&scheme::pass(), "All operations completed successfully");
            match env {
                Environment::Ci => self.plain("Mock tests passed - ready for deployment"),
                Environment::Local => self.plain("Full integration tests passed"),
            }
        } else {
            self.with_color(&scheme::fail(), "Some operations failed");
            match env {
                Environment::Ci => {
                    self.plain("Try running locally with full database tests for debugging");
                }
                Environment::Local => {
                    self.plain("Ensure MongoDB is running and try again");
                }
            }
        }
    }
}
