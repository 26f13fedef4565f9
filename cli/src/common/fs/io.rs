//! # rulechat Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add `anyhow` context to errors:
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and
//!   rejects a path that exists but is not a directory.
//! - **`read_file_to_string`**: reads configuration and rule-table files.
//! - **`append_string_to_file`**: appends to the conversation transcript. The
//!   file is opened for the duration of a single append and closed again before
//!   the function returns, on success and on error alike.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! io::append_string_to_file(Path::new("chat_log.txt"), "2024-01-01 09:00:00 - User: hi\n")?;
//! let text = io::read_file_to_string(Path::new("chat_log.txt"))?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates it recursively (like `mkdir -p`) when missing.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!("Path exists but is not a directory: {:?}", path);
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends `content` to the file at `path`, creating it (and its parent
/// directory) if necessary.
///
/// The handle lives only inside this call; it is flushed explicitly and then
/// dropped, so nothing stays open between appends.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the file
/// cannot be opened, written, or flushed.
pub fn append_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // A bare file name has an empty parent, which means the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    file.flush()
        .with_context(|| format!("Failed to flush file {:?}", path))?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}
