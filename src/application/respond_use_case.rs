// ============================================================
// Layer 2 - Respond Use Case
// ============================================================
// Turns one utterance into one reply:
//
//   Startup (fatal on failure):
//     Step 1: Load the CSV corpus              (Layer 4 - data)
//     Step 2: Clean answers, build vocabulary  (Layer 4 - data)
//     Step 3: Load the trained network         (Layer 5/6)
//
//   Per request (never fails):
//     Step 4: Exit / negative short-circuits   (Layer 3 - domain)
//     Step 5: Tokenise + one-hot the input     (Layer 4 - data)
//     Step 6: Greedy decode                    (Layer 5 - ml)
//     Step 7: Strip <START>/<END>, trim, fall back if empty
//
// Any error in steps 5-7 is logged and replaced by the apology
// reply, so a bad request never takes the process down.

use anyhow::Result;

use crate::data::{
    loader::CsvCorpusLoader,
    preprocessor::Preprocessor,
    tokenizer::WordTokenizer,
    vocabulary::{CorpusVocabulary, END_TOKEN, START_TOKEN},
};
use crate::domain::intent::{Intent, APOLOGY_REPLY, CLARIFY_REPLY};
use crate::domain::traits::{CorpusSource, Responder, Seq2Seq};
use crate::infra::checkpoint::ModelStore;
use crate::ml::{greedy::GreedyDecoder, inferencer::Inferencer};

// ─── Chat Configuration ──────────────────────────────────────────────────────
// Where the two static inputs live. Filled in by the CLI layer.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub corpus_path: String,
    pub model_dir:   String,
}

// ─── RespondUseCase ───────────────────────────────────────────────────────────
// Generic over the model so tests can swap in stubs.
pub struct RespondUseCase<M: Seq2Seq> {
    vocab:     CorpusVocabulary,
    tokenizer: WordTokenizer,
    decoder:   GreedyDecoder,
    model:     M,
}

impl RespondUseCase<Inferencer> {
    /// Load corpus, vocabulary and network. Any failure is fatal.
    pub fn from_config(cfg: &ChatConfig) -> Result<Self> {
        let tokenizer = WordTokenizer::new()?;

        // ── Steps 1-2: corpus → vocabulary ────────────────────────────────────
        let vocab = load_vocabulary(cfg, &tokenizer)
            .inspect_err(|e| tracing::error!("Error loading data: {e:#}"))?;

        // ── Step 3: trained network ───────────────────────────────────────────
        let store = ModelStore::new(&cfg.model_dir);
        let model = Inferencer::from_store(&store, vocab.input.len(), vocab.output.len())
            .inspect_err(|e| tracing::error!("Error loading model: {e:#}"))?;

        Self::new(vocab, tokenizer, model)
    }
}

impl<M: Seq2Seq> RespondUseCase<M> {
    pub fn new(vocab: CorpusVocabulary, tokenizer: WordTokenizer, model: M) -> Result<Self> {
        let decoder = GreedyDecoder::new(&vocab)?;
        Ok(Self { vocab, tokenizer, decoder, model })
    }

    /// Steps 5-7.
    fn generate(&self, utterance: &str) -> Result<String> {
        let tokens = self.tokenizer.tokenize(utterance)?;
        let input  = self.vocab.input
            .encode_sequence(&tokens, self.vocab.max_encoder_seq_length)?;

        let raw = self.decoder.decode(&self.model, &self.vocab.output, &input)?;

        let reply = raw
            .replace(START_TOKEN, "")
            .replace(END_TOKEN, "")
            .trim()
            .to_string();

        if reply.is_empty() {
            Ok(CLARIFY_REPLY.to_string())
        } else {
            Ok(reply)
        }
    }
}

impl<M: Seq2Seq> Responder for RespondUseCase<M> {
    fn respond(&self, utterance: &str) -> String {
        // ── Step 4: canned replies skip the model entirely ────────────────────
        let intent = Intent::classify(utterance);
        if let Some(reply) = intent.canned_reply() {
            tracing::debug!("Short-circuit on {:?} intent", intent);
            return reply.to_string();
        }

        match self.generate(utterance) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Error generating response: {e:#}");
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

/// Read the corpus and rebuild the vocabularies the model was trained on.
fn load_vocabulary(cfg: &ChatConfig, tokenizer: &WordTokenizer) -> Result<CorpusVocabulary> {
    let pairs   = CsvCorpusLoader::new(&cfg.corpus_path).load_all()?;
    let cleaned = Preprocessor::new().clean_corpus(&pairs);
    CorpusVocabulary::build(&cleaned, tokenizer)
}
