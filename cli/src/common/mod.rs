//! # rulechat Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! Shared utilities that are not specific to any one command. Currently this
//! is only filesystem I/O (`fs`), used for reading configuration and rule
//! files and for appending to the conversation transcript.
//!

/// Utilities for filesystem operations (reading, appending, directories).
pub mod fs;
