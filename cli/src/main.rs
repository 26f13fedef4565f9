//! # rulechat Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the rulechat CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up diagnostic logging based on verbosity flags
//! - Loading the layered configuration
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `engine`: the response-selection core (normalization, rule table,
//!   sentiment port, selector, greeting)
//! - `commands`: one module per subcommand (`chat`, `ask`, `rules`)
//! - `core`: configuration and error types
//! - `common`: filesystem helpers
//!
//! Diagnostics go to stderr so that stdout carries only the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (same as `rulechat chat`)
//! rulechat
//!
//! # One-shot answer with debug diagnostics
//! rulechat -vv ask "good morning"
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (chat, ask, rules)
mod common; // Shared utilities (filesystem)
mod core; // Core infrastructure (errors, config)
mod engine; // Response-selection engine

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "rulechat",
    about = "A rule-based chatbot with a sentiment fallback",
    long_about = "Answers each line of input with a canned reply chosen by ordered pattern rules,\n\
                  falling back to sentiment and then to a deterministic default.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file instead of the user and project files.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session (default)
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single message and exit
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Show the effective rule table
    #[command(alias = "r")]
    Rules(commands::rules::RulesArgs),
}

fn run(cli: Cli) -> crate::core::error::Result<()> {
    let config = crate::core::config::load_config(cli.config.as_deref())?;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));

    match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &config),
        Commands::Ask(args) => commands::ask::handle_ask(args, &config),
        Commands::Rules(args) => commands::rules::handle_rules(args, &config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["rulechat"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["rulechat", "ask", "thank", "you"]).unwrap();
        match cli.command {
            Some(Commands::Ask(args)) => assert_eq!(args.text, ["thank", "you"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_file_conflicts_with_no_log() {
        let result =
            Cli::try_parse_from(["rulechat", "chat", "--no-log", "--log-file", "x.txt"]);
        assert!(result.is_err());
    }
}
