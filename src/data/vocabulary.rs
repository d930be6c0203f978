// ============================================================
// Layer 4 - Vocabulary Builder
// ============================================================
// Rebuilds, from the corpus, the exact token ↔ index tables the
// network was trained with.
//
// Two vocabularies are built:
//   input  → tokens of every question (encoder one-hot width)
//   output → tokens of every cleaned answer, plus <START>/<END>
//            (decoder one-hot width and dense-layer output size)
//
// Tokens are sorted by their text before indices are assigned.
// The trained dense layer's output unit N means "token N in
// this sorted order", so any change to the ordering or to the
// token set makes the model emit the wrong words with no error.
//
// Two sequence bounds are also recorded:
//   max_encoder_seq_length → longest question, in tokens
//   max_decoder_seq_length → longest wrapped answer, in tokens
//
// The decoder bound re-tokenises "<START> ... <END>" with the
// word tokenizer, so each sentinel counts as three tokens
// ("<", "START", ">"). The deployed model was sized that way.
//
// Reference: Rust Book §8 (HashMap)
//            std::collections::BTreeSet (sorted, deduplicated)

use anyhow::{bail, Result};
use std::collections::{BTreeSet, HashMap};

use crate::data::tokenizer::WordTokenizer;
use crate::domain::one_hot::OneHotSequence;
use crate::domain::qa_pair::QaPair;

pub const START_TOKEN: &str = "<START>";
pub const END_TOKEN:   &str = "<END>";

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// A sorted set of tokens with dense indices `0..len`.
///
/// `tokens[i]` is the inverse of `index[token]`; both are built
/// together in `from_tokens` and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index:  HashMap<String, usize>,
}

impl Vocabulary {
    /// Deduplicate, sort, and index a set of tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // BTreeSet<String> orders by UTF-8 bytes, which is code point order
        let sorted: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
        let tokens: Vec<String>      = sorted.into_iter().collect();
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { tokens, index }
    }

    pub fn len(&self) -> usize { self.tokens.len() }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub fn tokens(&self) -> &[String] { &self.tokens }

    /// One-hot vector for a known token.
    #[cfg(test)]
    pub fn one_hot(&self, token: &str) -> Option<Vec<f32>> {
        self.index_of(token)
            .map(|i| crate::domain::one_hot::one_hot(i, self.len()))
    }

    /// Encode a token sequence as a `[timesteps, len]` one-hot matrix.
    ///
    /// Tokens missing from the vocabulary leave their row all-zero but
    /// still use up a timestep. A known token past the last timestep
    /// cannot be placed and is an error.
    pub fn encode_sequence(&self, tokens: &[&str], timesteps: usize) -> Result<OneHotSequence> {
        let mut matrix = OneHotSequence::zeros(timesteps, self.len());
        for (t, token) in tokens.iter().enumerate() {
            let Some(i) = self.index_of(token) else { continue };
            if t >= timesteps {
                bail!(
                    "input has {} tokens but the encoder accepts at most {}",
                    tokens.len(), timesteps
                );
            }
            matrix.set(t, i);
        }
        Ok(matrix)
    }
}

// ─── CorpusVocabulary ─────────────────────────────────────────────────────────
/// Everything the encoder/decoder needs to know about the corpus.
#[derive(Debug, Clone)]
pub struct CorpusVocabulary {
    pub input:                  Vocabulary,
    pub output:                 Vocabulary,
    pub max_encoder_seq_length: usize,
    pub max_decoder_seq_length: usize,
}

impl CorpusVocabulary {
    /// Build both vocabularies and both bounds from an already
    /// cleaned corpus (see `Preprocessor::clean_corpus`).
    pub fn build(pairs: &[QaPair], tokenizer: &WordTokenizer) -> Result<Self> {
        if pairs.is_empty() {
            bail!("corpus contains no rows");
        }

        let mut input_tokens:  BTreeSet<String> = BTreeSet::new();
        let mut output_tokens: BTreeSet<String> = BTreeSet::new();
        let mut max_encoder_seq_length = 0usize;
        let mut max_decoder_seq_length = 0usize;

        for pair in pairs {
            // ── Encoder side ──────────────────────────────────────────────────
            let question = tokenizer.tokenize(&pair.question)?;
            max_encoder_seq_length = max_encoder_seq_length.max(question.len());
            input_tokens.extend(question.into_iter().map(String::from));

            // ── Decoder side ──────────────────────────────────────────────────
            let target_doc = wrap_target(&tokenizer.tokenize(&pair.answer)?);
            max_decoder_seq_length =
                max_decoder_seq_length.max(tokenizer.tokenize(&target_doc)?.len());
            output_tokens.extend(target_doc.split_whitespace().map(String::from));
        }

        let vocab = Self {
            input:  Vocabulary::from_tokens(input_tokens),
            output: Vocabulary::from_tokens(output_tokens),
            max_encoder_seq_length,
            max_decoder_seq_length,
        };

        tracing::info!(
            "Vocabulary: {} input tokens, {} output tokens, \
             max encoder len {}, max decoder len {}",
            vocab.input.len(),
            vocab.output.len(),
            vocab.max_encoder_seq_length,
            vocab.max_decoder_seq_length,
        );
        Ok(vocab)
    }

    /// Output index of `<START>`. Always present after `build`.
    pub fn start_index(&self) -> Option<usize> {
        self.output.index_of(START_TOKEN)
    }

    /// Output index of `<END>`. Always present after `build`.
    pub fn end_index(&self) -> Option<usize> {
        self.output.index_of(END_TOKEN)
    }
}

/// "<START> tok tok ... <END>"
fn wrap_target(tokens: &[&str]) -> String {
    format!("{START_TOKEN} {} {END_TOKEN}", tokens.join(" "))
}
