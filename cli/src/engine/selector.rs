//! # Response Selector
//!
//! File: cli/src/engine/selector.rs
//!
//! ## Overview
//!
//! The selector turns one line of raw input into one reply. The cascade is fixed
//! and the first applicable branch wins:
//!
//! 1. Normalize the input.
//! 2. Scan the rule table; on a match return the rule's first candidate.
//! 3. Score the *raw* input through the sentiment port. Above `0.3` the reply is
//!    the positive prefix plus default #1; below `-0.3` it is the frustration
//!    prefix plus default #0. Exactly `±0.3` is neutral.
//! 4. Otherwise return the default at index `len(normalized) % defaults.len()`.
//!
//! Selection is deterministic: the same input and the same score always produce
//! the same reply.
//!
use super::normalize::normalize;
use super::rules::{DefaultResponses, RuleTable};
use super::sentiment::{checked_polarity, SentimentPort};
use tracing::debug;

/// Scores strictly above this pick the positive reply.
pub const POSITIVE_THRESHOLD: f64 = 0.3;
/// Scores strictly below this pick the frustration reply.
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

const POSITIVE_PREFIX: &str = "You sound positive! ";
const NEGATIVE_PREFIX: &str = "I sense some frustration. ";

/// Index of the default appended to the positive prefix.
const POSITIVE_DEFAULT: usize = 1;
/// Index of the default appended to the frustration prefix.
const NEGATIVE_DEFAULT: usize = 0;

/// Which branch of the cascade produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Rule,
    Positive,
    Negative,
    Default,
}

/// Chooses replies from an injected rule table and default set.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    rules: RuleTable,
    defaults: DefaultResponses,
}

impl ResponseSelector {
    pub fn new(rules: RuleTable, defaults: DefaultResponses) -> Self {
        Self { rules, defaults }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn defaults(&self) -> &DefaultResponses {
        &self.defaults
    }

    /// Selects the reply for `raw_input`.
    pub fn select_response(&self, raw_input: &str, sentiment: &dyn SentimentPort) -> String {
        self.select_with_branch(raw_input, sentiment).0
    }

    /// Like `select_response`, also reporting which branch answered.
    pub fn select_with_branch(
        &self,
        raw_input: &str,
        sentiment: &dyn SentimentPort,
    ) -> (String, Branch) {
        let text = normalize(raw_input);

        if let Some(set) = self.rules.find_first_match(&text) {
            return (set.first().to_string(), Branch::Rule);
        }

        let score = checked_polarity(sentiment, raw_input);
        debug!("No rule matched; polarity {:.3}", score);
        if score > POSITIVE_THRESHOLD {
            let reply = format!("{}{}", POSITIVE_PREFIX, self.defaults.get(POSITIVE_DEFAULT));
            return (reply, Branch::Positive);
        }
        if score < NEGATIVE_THRESHOLD {
            let reply = format!("{}{}", NEGATIVE_PREFIX, self.defaults.get(NEGATIVE_DEFAULT));
            return (reply, Branch::Negative);
        }

        let index = text.chars().count() % self.defaults.len();
        debug!("Falling back to default response #{}", index);
        (self.defaults.get(index).to_string(), Branch::Default)
    }
}
