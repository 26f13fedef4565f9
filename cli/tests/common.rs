//! # rulechat CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own crate and runs the compiled `rulechat`
//! binary through `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the compiled `rulechat` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn rulechat_cmd() -> Command {
    Command::cargo_bin("rulechat").expect("Failed to find rulechat binary for testing")
}

/// A `rulechat` command isolated inside `dir`: it runs there, and the user
/// config directory points into it, so no real configuration leaks in.
pub fn rulechat_cmd_in(dir: &Path) -> Command {
    let mut cmd = rulechat_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}
