//! # rulechat Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! `rulechat ask <TEXT>...` runs a single selection and prints the reply on
//! stdout, without a greeting, prompt or transcript. Multiple words are joined
//! with single spaces, so quoting is optional.
//!
//! ```bash
//! rulechat ask "what is your name?"
//! rulechat ask thank you so much
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::sentiment::LexiconScorer;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for `rulechat ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to answer.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Load the rule table from this TOML file instead of the configured one.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// Handler for `rulechat ask`.
pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let selector = super::load_selector(args.rules.as_deref(), config)?;
    let input = args.text.join(" ");
    let (reply, branch) = selector.select_with_branch(&input, &LexiconScorer::new());
    debug!("Answered via {:?} branch", branch);
    println!("{}", reply);
    Ok(())
}
