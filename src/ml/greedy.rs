// ============================================================
// Layer 5 - Greedy Decoder
// ============================================================
// Generates a reply one token at a time:
//
//   START     encode the whole input once → (hidden, cell)
//             first decoder input = one-hot(<START>)
//   STEPPING  decode_step → pick the highest score → append
//             " token" → feed that token back in, carry state
//   DONE      when the token is <END>, or when the reply STRING
//             is longer than max_decoder_seq_length characters
//
// The second stop rule compares a character count with a bound
// that was measured in tokens. The deployed bot has always
// stopped this way, so replies are cut at the same point. Every
// step adds at least two characters, so the loop always ends.
//
// No beam search and no sampling: one input, one output.
//
// Reference: Sutskever et al. (2014) Sequence to Sequence Learning

use anyhow::{ensure, Context, Result};

use crate::data::vocabulary::{CorpusVocabulary, Vocabulary};
use crate::domain::one_hot::{one_hot, OneHotSequence};
use crate::domain::traits::Seq2Seq;

#[derive(Debug, Clone)]
pub struct GreedyDecoder {
    start_index:            usize,
    end_index:              usize,
    max_decoder_seq_length: usize,
}

impl GreedyDecoder {
    /// Read the sentinel indices and the length bound from the vocabulary.
    pub fn new(vocab: &CorpusVocabulary) -> Result<Self> {
        Ok(Self {
            start_index: vocab.start_index().context("output vocabulary has no <START>")?,
            end_index:   vocab.end_index().context("output vocabulary has no <END>")?,
            max_decoder_seq_length: vocab.max_decoder_seq_length,
        })
    }

    /// Run the decode loop. Returns the generated tokens joined by
    /// spaces, trimmed. A trailing `<END>` is left in place.
    pub fn decode<M: Seq2Seq>(
        &self,
        model:  &M,
        output: &Vocabulary,
        input:  &OneHotSequence,
    ) -> Result<String> {
        let width = output.len();

        // ── START ─────────────────────────────────────────────────────────────
        let mut state    = model.encode(input)?;
        let mut target   = one_hot(self.start_index, width);
        let mut sentence = String::new();
        let mut chars    = 0usize;

        // ── STEPPING ──────────────────────────────────────────────────────────
        loop {
            let (scores, next_state) = model.decode_step(&target, state)?;
            ensure!(scores.len() == width,
                "decoder returned {} scores for an output vocabulary of {}",
                scores.len(), width);

            let index = argmax(&scores).context("decoder returned no scores")?;
            let token = output
                .token(index)
                .with_context(|| format!("no output token at index {index}"))?;

            sentence.push(' ');
            sentence.push_str(token);
            chars += 1 + token.chars().count();
            tracing::debug!("step token={:?} index={} chars={}", token, index, chars);

            if index == self.end_index || chars > self.max_decoder_seq_length {
                break;
            }

            target = one_hot(index, width);
            state  = next_state;
        }

        // ── DONE ──────────────────────────────────────────────────────────────
        Ok(sentence.trim().to_string())
    }
}

/// Index of the largest score; ties go to the lowest index.
/// A NaN wins outright, as with numpy's argmax.
fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        if s.is_nan() {
            return Some(i);
        }
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}
