// ============================================================
// Layer 4 - Answer Preprocessor
// ============================================================
// Cleans answer text before it is tokenised for the decoder side.
//
// The model was trained on answers where these characters had
// been replaced by a single space:
//   newline  (  )  ,  -  /
// We must apply the exact same rewrite, otherwise the output
// vocabulary (and therefore every output index) would differ
// from the one the network's dense layer was trained against.
//
// Questions are NOT cleaned. Carriage returns are NOT touched.
//
// Cleaning never mutates the loaded corpus: `clean_corpus`
// returns a new Vec of pairs and leaves its input alone.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::qa_pair::QaPair;

/// Characters that are turned into spaces in answer text.
const ANSWER_SEPARATORS: [char; 6] = ['\n', '(', ')', ',', '-', '/'];

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Replace each separator character with one space.
    /// Runs of separators become runs of spaces; the tokenizer
    /// discards whitespace anyway.
    pub fn clean_answer(&self, answer: &str) -> String {
        answer
            .chars()
            .map(|c| if ANSWER_SEPARATORS.contains(&c) { ' ' } else { c })
            .collect()
    }

    /// Produce a cleaned copy of the whole corpus.
    pub fn clean_corpus(&self, pairs: &[QaPair]) -> Vec<QaPair> {
        pairs
            .iter()
            .map(|p| p.map_answer(|a| self.clean_answer(a)))
            .collect()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
