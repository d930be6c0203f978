// ============================================================
// Layer 4 - Word Tokenizer
// ============================================================
// Splits text into words and single punctuation symbols:
//
//   [\w']+      a run of word characters (apostrophes included)
//   [^\s\w]     any one character that is neither space nor word
//
// Whitespace is dropped. The same rule is used for questions,
// answers, and the live user utterance.
//
// Examples:
//   "I'm sad..."        → ["I'm", "sad", ".", ".", "."]
//   "<START> hi <END>"  → ["<", "START", ">", "hi", "<", "END", ">"]
//
// Reference: fancy-regex crate documentation

use anyhow::{anyhow, Result};
use fancy_regex::Regex;

/// The split pattern. Kept in one place so the vocabulary and
/// the inference input are always tokenised identically.
pub const TOKEN_PATTERN: &str = r"[\w']+|[^\s\w]";

pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Compile the token pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN)?;
        Ok(Self { pattern })
    }

    /// Return every token in `text`, in order, borrowing from the input.
    pub fn tokenize<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                m.map(|m| m.as_str())
                    .map_err(|e| anyhow!("tokeniser failed on {text:?}: {e}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        WordTokenizer::new()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_splits_words_and_punctuation() {
        assert_eq!(tok("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_apostrophes_stay_inside_words() {
        assert_eq!(tok("I'm fine, don't worry"), vec!["I'm", "fine", ",", "don't", "worry"]);
    }

    #[test]
    fn test_punctuation_runs_split_per_char() {
        assert_eq!(tok("wait..."), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn test_sentinels_are_split_apart() {
        assert_eq!(tok("<START> hi <END>"), vec!["<", "START", ">", "hi", "<", "END", ">"]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tok(" \t\n ").is_empty());
    }
}
