// ============================================================
// Layer 3 - QaPair Domain Type
// ============================================================
// One row of the conversation corpus: a question a user might
// ask and the scripted answer the model was trained to produce.
//
// Example:
//   Question: "What is depression?"
//   Answer:   "Depression is a common mental disorder ..."
//
// The answer text stored here is exactly what the corpus file
// holds. Punctuation cleaning happens later, in the data layer,
// and produces a NEW QaPair instead of editing this one.
//
// Reference: Rust Book §5 (Structs)

/// A question and its scripted answer, as loaded from the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    /// What the user might say (encoder side)
    pub question: String,

    /// What the bot should reply (decoder side)
    pub answer: String,
}

impl QaPair {
    /// Create a new QaPair.
    /// Accepts &str or String for both fields.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }

    /// Return a copy of this pair with a transformed answer.
    /// The question is carried over untouched.
    pub fn map_answer(&self, f: impl FnOnce(&str) -> String) -> Self {
        Self {
            question: self.question.clone(),
            answer:   f(&self.answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_answer_leaves_source_pair_untouched() {
        let pair    = QaPair::new("hi?", "hello, friend");
        let cleaned = pair.map_answer(|a| a.replace(',', " "));
        assert_eq!(cleaned.answer, "hello  friend");
        assert_eq!(cleaned.question, "hi?");
        assert_eq!(pair.answer, "hello, friend");
    }
}
