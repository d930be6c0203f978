// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer talks to the outside world only through
// these traits:
//   - CorpusSource → where the Q&A rows come from (CSV file)
//   - Seq2Seq      → the trained encoder/decoder network
//   - Responder    → anything that turns an utterance into a reply
//
// Seq2Seq is the seam that keeps Burn out of every other layer.
// Tests plug in small stub models here so the decode loop can be
// checked without a trained artifact.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::one_hot::OneHotSequence;
use crate::domain::qa_pair::QaPair;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the question/answer corpus.
///
/// Implementations:
///   - CsvCorpusLoader → reads a Latin-1 CSV with Questions/Answer columns
pub trait CorpusSource {
    /// Load every row of the corpus, in file order.
    fn load_all(&self) -> Result<Vec<QaPair>>;
}

// ─── Seq2Seq ──────────────────────────────────────────────────────────────────
/// The two calls the greedy decoder needs from a trained
/// encoder/decoder network.
///
/// `State` is the recurrent (hidden, cell) pair. It is opaque to
/// the caller, which only threads it from one call into the next.
pub trait Seq2Seq {
    type State;

    /// Run the encoder over a full, zero-padded one-hot input matrix
    /// and return its final recurrent state.
    fn encode(&self, input: &OneHotSequence) -> Result<Self::State>;

    /// Feed one one-hot token plus the current state through the decoder.
    /// Returns one score per output-vocabulary entry and the next state.
    fn decode_step(&self, token: &[f32], state: Self::State) -> Result<(Vec<f32>, Self::State)>;
}

// ─── Responder ────────────────────────────────────────────────────────────────
/// Turns one user utterance into one reply.
///
/// Per-request failures are absorbed by the implementation and
/// turned into canned text, so this call cannot fail.
pub trait Responder {
    fn respond(&self, utterance: &str) -> String;
}
