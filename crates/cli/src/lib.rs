// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! proctor library: test orchestration for web backend projects.
//!
//! The binary in `main.rs` is a thin dispatcher; everything testable
//! lives here.

pub mod clean;
pub mod cli;
pub mod color;
pub mod config;
pub mod coverage;
pub mod environment;
pub mod exec;
pub mod info;
pub mod layout;
pub mod probe;
pub mod pytest;
pub mod status;
pub mod suites;
