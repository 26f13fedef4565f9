//! # rulechat Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `rulechat chat` starts an interactive session on the terminal. It greets the
//! user according to the local time of day, then answers one line at a time
//! until `exit`, `quit` or end of input. Each exchange is appended to the
//! conversation transcript (`chat_log.txt` by default).
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the built-in rules, logging to ./chat_log.txt
//! rulechat chat
//!
//! # Use a custom rule table and log elsewhere
//! rulechat chat --rules ./rules.toml --log-file ~/logs/chat.txt
//!
//! # Do not write a transcript file
//! rulechat chat --no-log
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::greeting;
use crate::engine::sentiment::LexiconScorer;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub mod logger;
pub mod session;

use logger::ConversationLogger;

/// Arguments for `rulechat chat`.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Append the transcript to this file instead of the configured one.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not write a transcript file for this session.
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Load the rule table from this TOML file instead of the configured one.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// Picks the transcript sink: `--no-log` wins, then `--log-file`, then config.
fn build_logger(args: &ChatArgs, config: &Config) -> ConversationLogger {
    if args.no_log || (!config.log.enabled && args.log_file.is_none()) {
        info!("Conversation transcript disabled for this session");
        return ConversationLogger::in_memory();
    }
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| config.log_path());
    info!("Logging conversation to {}", path.display());
    ConversationLogger::to_file(path)
}

/// Handler for `rulechat chat`.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let selector = super::load_selector(args.rules.as_deref(), config)?;
    let mut logger = build_logger(&args, config);
    let scorer = LexiconScorer::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = session::run_session(
        &selector,
        &scorer,
        &mut logger,
        greeting::current_greeting(),
        stdin.lock(),
        stdout.lock(),
    )?;
    match logger.path() {
        Some(path) => info!(
            "Session ended ({:?}); {} exchange(s) logged to {}",
            end,
            logger.transcript().len(),
            path.display()
        ),
        None => info!("Session ended ({:?}); transcript not written", end),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LogConfig;

    #[test]
    fn test_no_log_flag_wins() {
        let args = ChatArgs {
            no_log: true,
            ..Default::default()
        };
        assert!(build_logger(&args, &Config::default()).path().is_none());
    }

    #[test]
    fn test_log_file_flag_overrides_config() {
        let args = ChatArgs {
            log_file: Some(PathBuf::from("/tmp/elsewhere.txt")),
            ..Default::default()
        };
        let config = Config {
            log: LogConfig {
                file: "configured.txt".into(),
                enabled: false,
            },
            ..Default::default()
        };
        let logger = build_logger(&args, &config);
        assert_eq!(logger.path(), Some(std::path::Path::new("/tmp/elsewhere.txt")));
    }

    #[test]
    fn test_config_controls_default_sink() {
        let logger = build_logger(&ChatArgs::default(), &Config::default());
        assert_eq!(logger.path(), Some(std::path::Path::new("chat_log.txt")));

        let disabled = Config {
            log: LogConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(build_logger(&ChatArgs::default(), &disabled).path().is_none());
    }
}
