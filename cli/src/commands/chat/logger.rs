//! # Conversation Logger
//!
//! File: cli/src/commands/chat/logger.rs
//!
//! ## Overview
//!
//! Every completed exchange is recorded twice: in an owned, append-only
//! in-memory transcript, and (when a path is configured) appended to a plain
//! text file. The on-disk format is two lines per exchange sharing one
//! timestamp:
//!
//! ```text
//! 2024-05-01 09:15:02 - User: hello
//! 2024-05-01 09:15:02 - Bot: Hello! How can I help you today?
//! ```
//!
//! The file is opened and closed for each append. A failed append is returned
//! to the caller, who reports it as a warning; the in-memory entry is kept
//! regardless.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `strftime` format of transcript timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub user_input: String,
    pub bot_response: String,
}

impl LogEntry {
    pub fn new(timestamp: &str, user_input: &str, bot_response: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            user_input: user_input.to_string(),
            bot_response: bot_response.to_string(),
        }
    }

    /// The two transcript lines for this exchange, newline-terminated.
    pub fn render(&self) -> String {
        format!(
            "{ts} - User: {}\n{ts} - Bot: {}\n",
            self.user_input,
            self.bot_response,
            ts = self.timestamp
        )
    }
}

/// Append-only recorder of exchanges.
#[derive(Debug, Default)]
pub struct ConversationLogger {
    path: Option<PathBuf>,
    transcript: Vec<LogEntry>,
}

impl ConversationLogger {
    /// A logger that also appends to `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            transcript: Vec::new(),
        }
    }

    /// A logger that keeps the in-memory transcript only.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Entries recorded so far, oldest first.
    pub fn transcript(&self) -> &[LogEntry] {
        &self.transcript
    }

    /// Records an exchange stamped with the current local time.
    pub fn log_exchange(&mut self, user_input: &str, bot_response: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.record(LogEntry::new(&timestamp, user_input, bot_response))
    }

    /// Records `entry` in memory, then appends it to the file if one is set.
    pub fn record(&mut self, entry: LogEntry) -> Result<()> {
        let rendered = entry.render();
        self.transcript.push(entry);
        if let Some(path) = &self.path {
            io::append_string_to_file(path, &rendered)?;
            debug!("Logged exchange to {}", path.display());
        }
        Ok(())
    }
}
