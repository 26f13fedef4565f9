//! # rulechat Decision Engine
//!
//! File: cli/src/engine/mod.rs
//!
//! ## Overview
//!
//! This module holds the part of rulechat with actual decision logic: turning a
//! line of user input into exactly one canned reply. Terminal I/O, transcript
//! logging and configuration live elsewhere and only call into this module.
//!
//! ## Architecture
//!
//! - `normalize`: lowercasing, punctuation stripping, trimming.
//! - `rules`: the ordered, immutable rule table and the default responses,
//!   built in or loaded from a `rules.toml` file.
//! - `sentiment`: the `SentimentPort` trait and the bundled lexicon scorer.
//! - `selector`: the rule → sentiment → default cascade.
//! - `greeting`: the time-of-day greeting printed when a session starts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::engine::{rules, selector::ResponseSelector, sentiment::LexiconScorer};
//!
//! let (table, defaults) = rules::builtin()?;
//! let selector = ResponseSelector::new(table, defaults);
//! let reply = selector.select_response("Hello there!", &LexiconScorer::new());
//! assert_eq!(reply, "Hello! How can I help you today?");
//! ```
//!
pub mod greeting;
pub mod normalize;
pub mod rules;
pub mod selector;
pub mod sentiment;
