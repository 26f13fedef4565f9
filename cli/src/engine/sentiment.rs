//! # Sentiment Port
//!
//! File: cli/src/engine/sentiment.rs
//!
//! ## Overview
//!
//! The selector consults a polarity scorer only when no rule matches. The scorer
//! is an external capability, so the engine depends on the `SentimentPort` trait
//! rather than on any concrete implementation. Scores are real numbers where
//! positive values mean positive affect and negative values negative affect,
//! nominally within `[-1.0, 1.0]`.
//!
//! `LexiconScorer` is the adapter the binary ships with: a small keyword table
//! with simple negation and exclamation handling. Anything that can produce a
//! polarity (a native library, a remote service) can be plugged in instead.
//!
//! `checked_polarity` is the boundary the selector goes through. It turns a
//! failed or non-finite score into `0.0` and clamps finite scores into range, so
//! scorer misbehavior always lands in the neutral branch.
//!
use crate::core::error::ChatError;
use tracing::{trace, warn};

/// A polarity-scoring capability.
pub trait SentimentPort {
    /// Scores `text`, returning a polarity nominally in `[-1.0, 1.0]`.
    fn polarity(&self, text: &str) -> Result<f64, ChatError>;
}

impl<F> SentimentPort for F
where
    F: Fn(&str) -> Result<f64, ChatError>,
{
    fn polarity(&self, text: &str) -> Result<f64, ChatError> {
        self(text)
    }
}

/// Scores `text` through `port`, mapping failures and NaN/infinite values to
/// `0.0` and clamping finite values into `[-1.0, 1.0]`.
pub fn checked_polarity(port: &dyn SentimentPort, text: &str) -> f64 {
    match port.polarity(text) {
        Ok(score) if score.is_finite() => score.clamp(-1.0, 1.0),
        Ok(score) => {
            warn!("Sentiment scorer returned non-finite score {}; treating as neutral", score);
            0.0
        }
        Err(e) => {
            warn!("{}; treating as neutral", e);
            0.0
        }
    }
}

/// Words that flip the polarity of the next scored word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "isnt", "isn't", "cant", "can't", "wont", "won't",
];

/// (word, weight) pairs. Weights are in `[-1.0, 1.0]`.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("cool", 0.35),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("love", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("wonderful", 1.0),
    ("angry", -0.5),
    ("annoyed", -0.6),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("frustrated", -0.7),
    ("frustrating", -0.7),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("sad", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Exclamation multiplier applied when the text ends with `!`.
const EXCLAMATION_BOOST: f64 = 1.1;

/// Keyword-lexicon polarity scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn weight(word: &str) -> Option<f64> {
        LEXICON
            .iter()
            .find(|(entry, _)| *entry == word)
            .map(|(_, weight)| *weight)
    }
}

impl SentimentPort for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, ChatError> {
        let lower = text.to_lowercase();
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut negate = false;

        for token in lower.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            let word = token.trim_matches('\'');
            if word.is_empty() {
                continue;
            }
            if NEGATORS.contains(&word) {
                negate = true;
                continue;
            }
            if let Some(weight) = Self::weight(word) {
                total += if negate { -0.5 * weight } else { weight };
                hits += 1;
                negate = false;
            }
        }

        if hits == 0 {
            return Ok(0.0);
        }
        let mut score = total / hits as f64;
        if text.trim_end().ends_with('!') {
            score *= EXCLAMATION_BOOST;
        }
        let score = score.clamp(-1.0, 1.0);
        trace!("Lexicon polarity {:.3} over {} scored word(s)", score, hits);
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().polarity(text).unwrap()
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        assert_eq!(score("the cat sat on the mat"), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn test_positive_and_negative_words() {
        assert!(score("this is great") > 0.3);
        assert!(score("this is terrible") < -0.3);
    }

    #[test]
    fn test_negation_flips_and_softens() {
        let s = score("this is not good");
        assert!(s < 0.0);
        assert!((s - (-0.35)).abs() < 1e-9);
    }

    #[test]
    fn test_exclamation_intensifies_and_clamps() {
        assert!((score("good!") - 0.77).abs() < 1e-9);
        assert_eq!(score("awesome!"), 1.0);
    }

    #[test]
    fn test_checked_polarity_maps_failures_to_neutral() {
        let failing = |_: &str| -> Result<f64, ChatError> {
            Err(ChatError::Sentiment("backend offline".into()))
        };
        assert_eq!(checked_polarity(&failing, "anything"), 0.0);

        let nan = |_: &str| -> Result<f64, ChatError> { Ok(f64::NAN) };
        assert_eq!(checked_polarity(&nan, "anything"), 0.0);
    }

    #[test]
    fn test_checked_polarity_clamps() {
        let big = |_: &str| -> Result<f64, ChatError> { Ok(4.0) };
        assert_eq!(checked_polarity(&big, "x"), 1.0);
        let small = |_: &str| -> Result<f64, ChatError> { Ok(-2.5) };
        assert_eq!(checked_polarity(&small, "x"), -1.0);
    }
}
