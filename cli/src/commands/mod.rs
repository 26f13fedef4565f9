//! # rulechat Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the rulechat CLI and the small
//! amount of setup they share.
//!
//! ## Commands
//!
//! - `chat`: interactive session with greeting, transcript and exit handling
//! - `ask`: answer a single message and exit
//! - `rules`: print the effective rule table
//!
//! Each command defines its own arguments structure and handler function.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::rules as rule_table;
use crate::engine::selector::ResponseSelector;
use std::path::Path;
use tracing::debug;

/// One-shot selection for a single message.
pub mod ask;
/// Interactive session, transcript logging and the read loop.
pub mod chat;
/// Rule-table listing.
pub mod rules;

/// Builds the selector from `--rules` if given, else from the configured
/// rule table, else from the built-in table.
pub fn load_selector(rules_override: Option<&Path>, config: &Config) -> Result<ResponseSelector> {
    let configured = config.rules_path();
    let path = rules_override.or(configured.as_deref());
    let (table, defaults) = rule_table::load(path)?;
    debug!(
        "Rule table ready: {} rule(s), {} default response(s)",
        table.rules().len(),
        defaults.len()
    );
    Ok(ResponseSelector::new(table, defaults))
}
