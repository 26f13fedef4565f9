//! # Input Normalization
//!
//! File: cli/src/engine/normalize.rs
//!
//! Every rule pattern is matched against normalized text: lowercase, with all
//! ASCII punctuation removed and surrounding whitespace trimmed. Internal
//! whitespace is left alone, so "how  are you" does not match `how are you`.

/// Returns the lowercase, punctuation-free, trimmed form of `raw`.
///
/// Total and idempotent: applying it to its own output changes nothing.
/// Punctuation is removed before trimming so that input such as `"hi !"`
/// does not leave a trailing space behind.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("What's your NAME?"), "whats your name");
    }

    #[test]
    fn test_trims_but_keeps_internal_whitespace() {
        assert_eq!(normalize("   good   morning \t"), "good   morning");
        assert_eq!(normalize("hi !"), "hi");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!..."), "");
    }

    #[test]
    fn test_is_idempotent() {
        let samples = [
            "Hello, World!",
            "  ¿Qué tal?  ",
            "how's it going?!",
            "a - b",
            "ÉCOLE",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_non_ascii_punctuation_is_kept() {
        // Only the ASCII punctuation set is removed.
        assert_eq!(normalize("¿qué?"), "¿qué");
    }
}
