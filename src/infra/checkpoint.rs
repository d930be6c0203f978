// ============================================================
// Layer 6 - Model Store
// ============================================================
// Loads the trained encoder/decoder from its artifact directory
// using Burn's CompactRecorder.
//
// Artifact layout:
//   models/
//     model_config.json  ← network shape (vocab sizes, latent_dim)
//     model.mpk.gz       ← weights, keyed by component name:
//                            encoder_lstm, decoder_lstm, decoder_dense
//
// Why a separate config file?
//   The module has to be built with the right shape before the
//   weights can be loaded into it, and the shape must match the
//   vocabularies rebuilt from the corpus. Reading the config first
//   lets us reject a mismatched artifact with a clear message
//   instead of producing nonsense replies.
//
// Components are looked up by name, never by position, so a
// change in layer order on the training side cannot silently
// swap which weights end up where.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::ml::model::{ChatbotNet, ChatbotNetConfig};

const CONFIG_FILE: &str = "model_config.json";
// CompactRecorder appends .mpk.gz
const WEIGHTS_FILE: &str = "model";

// model_config.json as written by the training side. latent_dim
// may be left out; it then takes the network's default.
#[derive(Debug, Deserialize)]
struct ModelConfigFile {
    num_encoder_tokens: usize,
    num_decoder_tokens: usize,
    #[serde(default = "default_latent_dim")]
    latent_dim:         usize,
}

fn default_latent_dim() -> usize {
    ChatbotNetConfig::new(0, 0).latent_dim
}

impl From<ModelConfigFile> for ChatbotNetConfig {
    fn from(file: ModelConfigFile) -> Self {
        ChatbotNetConfig::new(file.num_encoder_tokens, file.num_decoder_tokens)
            .with_latent_dim(file.latent_dim)
    }
}

/// Reads the model artifact from one directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the network shape from model_config.json.
    pub fn load_config(&self) -> Result<ChatbotNetConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read model config from '{}'", path.display()))?;

        let file: ModelConfigFile = serde_json::from_str(&json)
            .with_context(|| format!("Invalid model config in '{}'", path.display()))?;
        Ok(file.into())
    }

    /// Reject an artifact trained against a different vocabulary.
    pub fn check_dimensions(
        cfg:                &ChatbotNetConfig,
        num_encoder_tokens: usize,
        num_decoder_tokens: usize,
    ) -> Result<()> {
        if cfg.num_encoder_tokens != num_encoder_tokens {
            bail!(
                "model expects {} input tokens but the corpus yields {}",
                cfg.num_encoder_tokens, num_encoder_tokens
            );
        }
        if cfg.num_decoder_tokens != num_decoder_tokens {
            bail!(
                "model expects {} output tokens but the corpus yields {}",
                cfg.num_decoder_tokens, num_decoder_tokens
            );
        }
        Ok(())
    }

    /// Load the weights into a freshly initialised module.
    ///
    /// The module must have been built from this store's config,
    /// otherwise the record will not fit and loading fails.
    pub fn load_model<B: Backend>(
        &self,
        model:  ChatbotNet<B>,
        device: &B::Device,
    ) -> Result<ChatbotNet<B>> {
        let path = self.dir.join(WEIGHTS_FILE);
        tracing::debug!("Loading weights from '{}.mpk.gz'", path.display());

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| format!("Cannot load model weights '{}.mpk.gz'", path.display()))?;

        Ok(model.load_record(record))
    }

    /// Write a config and weights pair the way the training side does.
    #[cfg(test)]
    pub fn save<B: Backend>(&self, cfg: &ChatbotNetConfig, model: ChatbotNet<B>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::json!({
            "num_encoder_tokens": cfg.num_encoder_tokens,
            "num_decoder_tokens": cfg.num_decoder_tokens,
            "latent_dim":         cfg.latent_dim,
        });
        fs::write(self.dir.join(CONFIG_FILE), json.to_string())?;
        CompactRecorder::new()
            .record(model.into_record(), self.dir.join(WEIGHTS_FILE))
            .context("Cannot save model weights")?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_config(json: &str) -> (tempfile::TempDir, ModelStore) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), json).unwrap();
        let store = ModelStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_config() {
        let (_dir, store) = store_with_config(
            r#"{"num_encoder_tokens": 12, "num_decoder_tokens": 30, "latent_dim": 64}"#,
        );
        let cfg = store.load_config().unwrap();
        assert_eq!(cfg.num_encoder_tokens, 12);
        assert_eq!(cfg.num_decoder_tokens, 30);
        assert_eq!(cfg.latent_dim, 64);
    }

    #[test]
    fn test_latent_dim_defaults_to_256() {
        let (_dir, store) = store_with_config(
            r#"{"num_encoder_tokens": 1, "num_decoder_tokens": 2}"#,
        );
        assert_eq!(store.load_config().unwrap().latent_dim, 256);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelStore::new(dir.path()).load_config().unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let cfg = ChatbotNetConfig::new(10, 20);
        assert!(ModelStore::check_dimensions(&cfg, 10, 20).is_ok());
        assert!(ModelStore::check_dimensions(&cfg, 11, 20).is_err());
        assert!(ModelStore::check_dimensions(&cfg, 10, 19).is_err());
    }

    #[test]
    fn test_config_without_counts_is_an_error() {
        let (_dir, store) = store_with_config(r#"{"latent_dim": 8}"#);
        assert!(store.load_config().is_err());
    }

    // Weights are stored half precision, so compare loosely
    fn assert_close(a: Vec<f32>, b: Vec<f32>) {
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(&b).all(|(x, y)| (x - y).abs() < 1e-2));
    }

    #[test]
    fn test_saved_weights_load_back_by_name() {
        type B = burn::backend::NdArray;
        let dir    = tempfile::tempdir().unwrap();
        let store  = ModelStore::new(dir.path());
        let device = Default::default();
        let cfg    = ChatbotNetConfig::new(3, 4).with_latent_dim(5);

        let saved = cfg.init::<B>(&device);
        let expected = saved.decoder_dense.weight.val().into_data().to_vec::<f32>().unwrap();
        store.save(&cfg, saved).unwrap();
        assert!(dir.path().join("model.mpk.gz").exists());

        let loaded_cfg = store.load_config().unwrap();
        assert_eq!(loaded_cfg.latent_dim, 5);
        let fresh  = loaded_cfg.init::<B>(&device);
        let loaded = store.load_model(fresh, &device).unwrap();
        let actual = loaded.decoder_dense.weight.val().into_data().to_vec::<f32>().unwrap();
        assert_close(expected, actual);
    }

    #[test]
    fn test_missing_weights_is_an_error() {
        let (_dir, store) = store_with_config(
            r#"{"num_encoder_tokens": 2, "num_decoder_tokens": 3, "latent_dim": 4}"#,
        );
        let device = Default::default();
        let model  = store.load_config().unwrap().init::<burn::backend::NdArray>(&device);
        assert!(store.load_model(model, &device).is_err());
    }
}
