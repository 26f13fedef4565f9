//! # rulechat Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout rulechat. The decision
//! engine itself never fails once built: normalization and matching are total,
//! and the default branch always produces a reply. Every variant here is
//! therefore either a startup failure (a bad rule table or configuration) or a
//! failure reported by an external collaborator (the sentiment scorer).
//!
//! ## Architecture
//!
//! - `ChatError`: a custom error enum using `thiserror` for the specific cases.
//! - `Result<T>`: a type alias for `anyhow::Result<T>` for flexible propagation.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if defaults.is_empty() {
//!     return Err(ChatError::EmptyDefaults)?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read rule table: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the rulechat application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule '{pattern}' has no candidate responses.")]
    EmptyResponseSet { pattern: String },

    #[error("The default response set cannot be empty.")]
    EmptyDefaults,

    /// Error type of the `SentimentPort` contract. The bundled lexicon scorer
    /// never fails, so only external adapters build it.
    #[allow(dead_code)]
    #[error("Sentiment scoring failed: {0}")]
    Sentiment(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
