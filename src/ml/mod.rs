// ============================================================
// Layer 5 - ML / Model Layer (Burn)
// ============================================================
// All Burn framework code lives here. Other layers reach the
// network only through the Seq2Seq trait from the domain layer.
//
//   model.rs      - The LSTM encoder/decoder architecture
//                   • encoder_lstm  (input vocab → latent state)
//                   • decoder_lstm  (output vocab + state → latent)
//                   • decoder_dense (latent → output vocab, softmax)
//
//   inferencer.rs - Burn adapter implementing Seq2Seq
//                   Loads the artifact, converts one-hot slices
//                   to tensors and back
//
//   greedy.rs     - The greedy decode loop
//                   Backend-agnostic: works with any Seq2Seq
//
// Reference: Burn Book §3 (Building Blocks)
//            Sutskever et al. (2014) Sequence to Sequence Learning

/// LSTM encoder/decoder architecture
pub mod model;

/// Burn-backed Seq2Seq implementation
pub mod inferencer;

/// Greedy autoregressive decoding
pub mod greedy;
