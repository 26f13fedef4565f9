//! # rulechat Rules Command
//!
//! File: cli/src/commands/rules.rs
//!
//! `rulechat rules` prints the effective rule table in the order it is scanned,
//! followed by the default responses with their indices. Useful for checking a
//! custom `rules.toml` before chatting with it.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::selector::ResponseSelector;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for `rulechat rules`.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Load the rule table from this TOML file instead of the configured one.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// Renders the table as aligned text, one rule per line.
fn render(selector: &ResponseSelector) -> String {
    let mut out = String::new();
    let rules = selector.rules().rules();
    let width = rules
        .iter()
        .map(|r| r.pattern().chars().count())
        .max()
        .unwrap_or(0);

    out.push_str("Rules (scanned top to bottom):\n");
    for (i, rule) in rules.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. [{:<8}] {:<width$}  -> {}",
            i + 1,
            rule.group.to_string(),
            rule.pattern(),
            rule.responses().first(),
            width = width
        ));
        let unused = rule.responses().candidates().len() - 1;
        if unused > 0 {
            out.push_str(&format!(" (+{} unused)", unused));
        }
        out.push('\n');
    }
    out.push_str("Default responses:\n");
    for (i, reply) in selector.defaults().as_slice().iter().enumerate() {
        out.push_str(&format!("  [{}] {}\n", i, reply));
    }
    out
}

/// Handler for `rulechat rules`.
pub fn handle_rules(args: RulesArgs, config: &Config) -> Result<()> {
    let selector = super::load_selector(args.rules.as_deref(), config)?;
    print!("{}", render(&selector));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules;

    #[test]
    fn test_render_lists_rules_in_scan_order() {
        let (table, defaults) = rules::builtin().unwrap();
        let text = render(&ResponseSelector::new(table, defaults));
        let hello = text.find("hello|hi|hey|greetings").unwrap();
        let thanks = text.find("thank you|thanks").unwrap();
        assert!(hello < thanks);
        assert!(text.contains("[greeting]"));
        assert!(text.contains("[qa      ]"));
        assert!(text.contains("  [3] I didn't catch that. What else can I help with?"));
    }

    #[test]
    fn test_render_counts_unreachable_candidates() {
        let (table, defaults) = rules::parse(
            "defaults = [\"d\"]\n\n[[qa]]\npattern = \"ping\"\nresponses = [\"pong\", \"pang\", \"pung\"]\n",
        )
        .unwrap();
        let text = render(&ResponseSelector::new(table, defaults));
        assert_eq!(
            text,
            "Rules (scanned top to bottom):\n   1. [qa      ] ping  -> pong (+2 unused)\nDefault responses:\n  [0] d\n"
        );
    }
}
