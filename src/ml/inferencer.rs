// ============================================================
// Layer 5 - Inferencer
// ============================================================
// Adapts the Burn network to the Seq2Seq trait: plain f32 slices
// in, plain Vec<f32> out, LstmState threaded through as the
// opaque recurrent state.
use anyhow::{anyhow, ensure, Result};
use burn::{nn::LstmState, prelude::*};

use crate::domain::one_hot::OneHotSequence;
use crate::domain::traits::Seq2Seq;
use crate::infra::checkpoint::ModelStore;
use crate::ml::model::{ChatbotNet, ChatbotNetConfig};

// One short request per process: the CPU backend starts instantly.
pub type InferBackend = burn::backend::NdArray;
pub type InferDevice  = burn::backend::ndarray::NdArrayDevice;

pub struct Inferencer {
    model:              ChatbotNet<InferBackend>,
    num_encoder_tokens: usize,
    num_decoder_tokens: usize,
    device:             InferDevice,
}

impl Inferencer {
    pub fn new(config: &ChatbotNetConfig, model: ChatbotNet<InferBackend>, device: InferDevice) -> Self {
        Self {
            model,
            num_encoder_tokens: config.num_encoder_tokens,
            num_decoder_tokens: config.num_decoder_tokens,
            device,
        }
    }

    /// Load the trained network, refusing an artifact whose vocabulary
    /// sizes differ from the ones rebuilt from the corpus.
    pub fn from_store(
        store:              &ModelStore,
        num_encoder_tokens: usize,
        num_decoder_tokens: usize,
    ) -> Result<Self> {
        let device = InferDevice::default();
        let cfg    = store.load_config()?;
        ModelStore::check_dimensions(&cfg, num_encoder_tokens, num_decoder_tokens)?;

        let model: ChatbotNet<InferBackend> = cfg.init(&device);
        let model = store.load_model(model, &device)?;
        tracing::info!("Model loaded (latent_dim={})", cfg.latent_dim);
        Ok(Self::new(&cfg, model, device))
    }
}

impl Seq2Seq for Inferencer {
    type State = LstmState<InferBackend, 2>;

    fn encode(&self, input: &OneHotSequence) -> Result<Self::State> {
        ensure!(input.width() == self.num_encoder_tokens,
            "encoder expects {} features per step, got {}",
            self.num_encoder_tokens, input.width());
        ensure!(input.timesteps() > 0, "encoder input has no timesteps");

        let x = Tensor::<InferBackend, 1>::from_floats(input.as_slice(), &self.device)
            .reshape([1, input.timesteps(), input.width()]);
        Ok(self.model.encode(x))
    }

    fn decode_step(&self, token: &[f32], state: Self::State) -> Result<(Vec<f32>, Self::State)> {
        ensure!(token.len() == self.num_decoder_tokens,
            "decoder expects {} features per step, got {}",
            self.num_decoder_tokens, token.len());

        let x = Tensor::<InferBackend, 1>::from_floats(token, &self.device)
            .reshape([1, 1, token.len()]);
        let (probs, state) = self.model.decode_step(x, state);

        // [1, 1, vocab] → [vocab]
        let probs = probs
            .flatten::<1>(0, 2)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read decoder output: {e:?}"))?;
        Ok((probs, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::one_hot::one_hot;

    fn tiny() -> Inferencer {
        let device = InferDevice::default();
        let cfg    = ChatbotNetConfig::new(4, 5).with_latent_dim(3);
        let model  = cfg.init::<InferBackend>(&device);
        Inferencer::new(&cfg, model, device)
    }

    #[test]
    fn test_decode_step_returns_distribution() {
        let inf = tiny();
        let mut input = OneHotSequence::zeros(2, 4);
        input.set(0, 1);

        let state      = inf.encode(&input).unwrap();
        let (probs, s) = inf.decode_step(&one_hot(0, 5), state).unwrap();
        assert_eq!(probs.len(), 5);
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-4);

        // state threads into the next step
        let (probs, _) = inf.decode_step(&one_hot(3, 5), s).unwrap();
        assert_eq!(probs.len(), 5);
    }

    #[test]
    fn test_rejects_wrong_encoder_width() {
        let inf = tiny();
        assert!(inf.encode(&OneHotSequence::zeros(2, 7)).is_err());
    }

    #[test]
    fn test_rejects_wrong_decoder_width() {
        let inf   = tiny();
        let state = inf.encode(&OneHotSequence::zeros(1, 4)).unwrap();
        assert!(inf.decode_step(&one_hot(0, 2), state).is_err());
    }
}
