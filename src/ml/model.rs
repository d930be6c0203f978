use burn::{
    nn::{Linear, LinearConfig, Lstm, LstmConfig, LstmState},
    prelude::*,
    tensor::activation::softmax,
};

// Shape of the trained network. Stored next to the weights as
// model_config.json so the module can be rebuilt before loading.
// NOTE: #[derive(Config)] already generates new(), with_*() setters,
// Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct ChatbotNetConfig {
    pub num_encoder_tokens: usize,
    pub num_decoder_tokens: usize,
    #[config(default = 256)]
    pub latent_dim:         usize,
}

impl ChatbotNetConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ChatbotNet<B> {
        let encoder_lstm  = LstmConfig::new(self.num_encoder_tokens, self.latent_dim, true).init(device);
        let decoder_lstm  = LstmConfig::new(self.num_decoder_tokens, self.latent_dim, true).init(device);
        let decoder_dense = LinearConfig::new(self.latent_dim, self.num_decoder_tokens).init(device);
        ChatbotNet { encoder_lstm, decoder_lstm, decoder_dense }
    }
}

/// LSTM encoder/decoder. Field names are the record keys the
/// weights are stored under.
#[derive(Module, Debug)]
pub struct ChatbotNet<B: Backend> {
    pub encoder_lstm:  Lstm<B>,
    pub decoder_lstm:  Lstm<B>,
    pub decoder_dense: Linear<B>,
}

impl<B: Backend> ChatbotNet<B> {
    /// input: [batch, timesteps, num_encoder_tokens] → final (cell, hidden)
    pub fn encode(&self, input: Tensor<B, 3>) -> LstmState<B, 2> {
        // Only the final state is used; the per-step outputs are dropped.
        let (_, state) = self.encoder_lstm.forward(input, None);
        state
    }

    /// token: [batch, 1, num_decoder_tokens] → probabilities [batch, 1, num_decoder_tokens]
    pub fn decode_step(
        &self,
        token: Tensor<B, 3>,
        state: LstmState<B, 2>,
    ) -> (Tensor<B, 3>, LstmState<B, 2>) {
        let (output, state) = self.decoder_lstm.forward(token, Some(state));
        let logits = self.decoder_dense.forward(output);
        (softmax(logits, 2), state)
    }
}
