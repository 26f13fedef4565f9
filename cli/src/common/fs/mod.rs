//! # rulechat Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Functionality lives in submodules; import from them directly, e.g.
//! `crate::common::fs::io::append_string_to_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `append_string_to_file`).
pub mod io;
