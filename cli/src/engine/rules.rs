//! # Rule Table
//!
//! File: cli/src/engine/rules.rs
//!
//! ## Overview
//!
//! The rule table is the ordered list of (pattern, responses) pairs the selector
//! scans before falling back to sentiment. It is split into two groups, greetings
//! and question/acknowledgment rules, and the greeting group is always scanned
//! first. Within a group, declaration order decides. The first rule whose pattern
//! matches anywhere in the normalized input wins.
//!
//! The table is built once (from the built-in canonical rules or from a
//! `rules.toml` file) and is never mutated afterwards.
//!
//! ## File Format
//!
//! ```toml
//! defaults = ["I'm not sure I understand.", "Tell me more."]
//!
//! [[greetings]]
//! pattern = "hello|hi|hey"
//! responses = ["Hello!"]
//!
//! [[qa]]
//! pattern = "thank you|thanks"
//! responses = ["You're welcome!"]
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Which of the two scan groups a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    Greeting,
    Qa,
}

impl fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleGroup::Greeting => write!(f, "greeting"),
            RuleGroup::Qa => write!(f, "qa"),
        }
    }
}

/// A non-empty, ordered list of candidate replies for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSet(Vec<String>);

impl ResponseSet {
    /// The reply the selector returns. Later candidates are never chosen.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn candidates(&self) -> &[String] {
        &self.0
    }
}

/// One compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub group: RuleGroup,
    pattern: Regex,
    responses: ResponseSet,
}

impl Rule {
    /// Compiles `pattern` and checks that `responses` is not empty.
    pub fn new(group: RuleGroup, pattern: &str, responses: Vec<String>) -> Result<Self> {
        if responses.is_empty() {
            anyhow::bail!(ChatError::EmptyResponseSet {
                pattern: pattern.to_string(),
            });
        }
        let compiled = Regex::new(pattern).map_err(|source| ChatError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            group,
            pattern: compiled,
            responses: ResponseSet(responses),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// True when the pattern matches anywhere within `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// The ordered, immutable rule table: every greeting rule, then every QA rule.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Builds a table from the two groups, preserving their order.
    pub fn new(greetings: Vec<Rule>, qa: Vec<Rule>) -> Self {
        let mut rules = greetings;
        rules.extend(qa);
        Self { rules }
    }

    /// Returns the responses of the first rule matching `text`, in table order.
    pub fn find_first_match(&self, text: &str) -> Option<&ResponseSet> {
        let hit = self.rules.iter().find(|rule| rule.matches(text))?;
        debug!("Input matched {} rule '{}'", hit.group, hit.pattern());
        Some(hit.responses())
    }

    /// All rules in scan order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Fallback replies used when no rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResponses(Vec<String>);

impl DefaultResponses {
    /// Fails with `ChatError::EmptyDefaults` when `responses` is empty.
    pub fn new(responses: Vec<String>) -> Result<Self> {
        if responses.is_empty() {
            anyhow::bail!(ChatError::EmptyDefaults);
        }
        Ok(Self(responses))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entry `index` modulo the number of defaults.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Raw rule entry as it appears in `rules.toml`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    pub responses: Vec<String>,
}

/// Raw rule-table file, before compilation and validation.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleTableSpec {
    #[serde(default)]
    pub greetings: Vec<RuleSpec>,
    #[serde(default)]
    pub qa: Vec<RuleSpec>,
    pub defaults: Vec<String>,
}

impl RuleTableSpec {
    /// Compiles the patterns and checks the non-empty invariants.
    pub fn compile(self) -> Result<(RuleTable, DefaultResponses)> {
        let greetings = compile_group(RuleGroup::Greeting, self.greetings)?;
        let qa = compile_group(RuleGroup::Qa, self.qa)?;
        let defaults = DefaultResponses::new(self.defaults)?;
        Ok((RuleTable::new(greetings, qa), defaults))
    }
}

fn compile_group(group: RuleGroup, specs: Vec<RuleSpec>) -> Result<Vec<Rule>> {
    specs
        .into_iter()
        .map(|spec| Rule::new(group, &spec.pattern, spec.responses))
        .collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn spec(pattern: &str, responses: &[&str]) -> RuleSpec {
    RuleSpec {
        pattern: pattern.to_string(),
        responses: owned(responses),
    }
}

/// The canonical built-in table.
pub fn builtin_spec() -> RuleTableSpec {
    RuleTableSpec {
        greetings: vec![
            spec(
                "hello|hi|hey|greetings",
                &["Hello! How can I help you today?", "Hi there!"],
            ),
            spec("good morning", &["Good morning! How can I assist you?"]),
            spec("good afternoon", &["Good afternoon! What can I do for you?"]),
            spec("good evening", &["Good evening! How may I help you?"]),
            spec(
                "how are you|how's it going",
                &["I'm doing well, thank you!", "All systems operational!"],
            ),
        ],
        qa: vec![
            spec(
                "what is your name|who are you",
                &["I'm your AI assistant.", "You can call me ChatBot."],
            ),
            spec(
                "bye|goodbye|see you",
                &["Goodbye! Have a great day!", "Farewell! Come back soon."],
            ),
            spec("thank you|thanks", &["You're welcome!", "Happy to help!"]),
        ],
        defaults: owned(&[
            "I'm not sure I understand. Could you rephrase that?",
            "Interesting! Tell me more.",
            "I'm still learning. Could you ask me something else?",
            "I didn't catch that. What else can I help with?",
        ]),
    }
}

/// Compiles the built-in table.
pub fn builtin() -> Result<(RuleTable, DefaultResponses)> {
    builtin_spec().compile()
}

/// Parses and compiles a rule table from TOML text.
pub fn parse(content: &str) -> Result<(RuleTable, DefaultResponses)> {
    let spec: RuleTableSpec =
        toml::from_str(content).context("Failed to parse rule table TOML")?;
    spec.compile()
}

/// Loads the rule table at `path`, or the built-in table when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<(RuleTable, DefaultResponses)> {
    match path {
        Some(path) => {
            info!("Loading rule table from: {}", path.display());
            let content = io::read_file_to_string(path)?;
            parse(&content).with_context(|| format!("Invalid rule table: {}", path.display()))
        }
        None => {
            debug!("Using built-in rule table");
            builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn table() -> RuleTable {
        builtin().unwrap().0
    }

    #[test]
    fn test_builtin_order_is_greetings_then_qa() {
        let t = table();
        let groups: Vec<RuleGroup> = t.rules().iter().map(|r| r.group).collect();
        assert_eq!(groups.len(), 8);
        assert!(groups[..5].iter().all(|g| *g == RuleGroup::Greeting));
        assert!(groups[5..].iter().all(|g| *g == RuleGroup::Qa));
        assert_eq!(t.rules()[0].pattern(), "hello|hi|hey|greetings");
        assert_eq!(t.rules()[7].pattern(), "thank you|thanks");
    }

    #[test]
    fn test_first_match_returns_response_set() {
        let t = table();
        let set = t.find_first_match("thank you so much").unwrap();
        assert_eq!(set.first(), "You're welcome!");
        assert_eq!(set.candidates().len(), 2);
    }

    #[test]
    fn test_greeting_wins_over_qa_on_overlap() {
        // "hi" and "bye" both appear; greetings are scanned first.
        let t = table();
        let set = t.find_first_match("hi and bye").unwrap();
        assert_eq!(set.first(), "Hello! How can I help you today?");
    }

    #[test]
    fn test_substring_semantics() {
        // "this" contains "hi", so the hello group matches.
        let t = table();
        assert_eq!(
            t.find_first_match("this").unwrap().first(),
            "Hello! How can I help you today?"
        );
    }

    #[test]
    fn test_no_match() {
        assert!(table().find_first_match("zzzzzzz").is_none());
        assert!(table().find_first_match("").is_none());
    }

    #[test]
    fn test_empty_response_set_is_rejected() {
        let err = Rule::new(RuleGroup::Qa, "x", vec![]).unwrap_err();
        assert!(err.to_string().contains("has no candidate responses"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Rule::new(RuleGroup::Qa, "(oops", vec!["a".into()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChatError>(),
            Some(ChatError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_empty_defaults_are_rejected() {
        let err = DefaultResponses::new(vec![]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChatError>(),
            Some(ChatError::EmptyDefaults)
        ));
    }

    #[test]
    fn test_parse_custom_table() {
        let content = r#"
            defaults = ["only default"]

            [[greetings]]
            pattern = "yo"
            responses = ["Yo!", "Sup"]

            [[qa]]
            pattern = "yo there"
            responses = ["Never reached"]
        "#;
        let (t, d) = parse(content).unwrap();
        assert_eq!(t.rules().len(), 2);
        assert_eq!(t.find_first_match("yo there").unwrap().first(), "Yo!");
        assert_eq!(d.len(), 1);
        assert_eq!(d.get(5), "only default");
    }

    #[test]
    fn test_parse_rejects_missing_defaults() {
        let content = r#"
            [[qa]]
            pattern = "x"
            responses = ["y"]
        "#;
        assert!(parse(content).is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "defaults = [\"d\"]\n")?;
        let (t, d) = load(Some(path.as_path()))?;
        assert!(t.rules().is_empty());
        assert_eq!(d.as_slice(), ["d".to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load(Some(missing.as_path())).is_err());
    }
}
