// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// The command line carries exactly one thing: the user's
// utterance, taken verbatim from the first argument. It is never
// parsed as a flag, so "--help" or "--corpus=x" are just things a
// user said. Further arguments are ignored.
//
// The two static paths (corpus, model artifact) come from the
// environment. clap resolves them against their defaults, the
// same way it resolves any other env-backed setting.
//
// Whatever happens, exactly one JSON object is printed:
//   {"response": "..."}  exit 0
//   {"error": "..."}     exit 1
//
// Reference: Rust Book §12 (Building a CLI Program)

pub mod reply;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;

use crate::application::respond_use_case::{ChatConfig, RespondUseCase};
use crate::domain::traits::Responder;
use reply::Reply;

pub const NO_INPUT_ERROR: &str = "No input provided";

const BIN_NAME: &str = "seq2seq-chatbot";

/// Where the corpus and the model artifact live.
#[derive(Parser, Debug, Clone)]
#[command(name = BIN_NAME, disable_help_flag = true)]
pub struct Settings {
    /// CSV corpus with `Questions` and `Answer` columns (Latin-1)
    #[arg(long, env = "CHATBOT_CORPUS", default_value = "data/Happiness.csv")]
    pub corpus: String,

    /// Directory holding model_config.json and model.mpk.gz
    #[arg(long, env = "CHATBOT_MODEL_DIR", default_value = "models")]
    pub model_dir: String,
}

impl Settings {
    /// Resolve every setting from its environment variable or default.
    /// No command-line argument is offered to clap.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from([BIN_NAME])
    }
}

/// Convert settings into the application-layer ChatConfig.
/// The application layer never sees clap types.
impl From<&Settings> for ChatConfig {
    fn from(settings: &Settings) -> Self {
        ChatConfig {
            corpus_path: settings.corpus.clone(),
            model_dir:   settings.model_dir.clone(),
        }
    }
}

#[derive(Debug)]
pub struct Cli {
    pub utterance: Option<String>,
    pub settings:  Settings,
}

impl Cli {
    /// `args` is the full argv, program name first.
    pub fn from_args<I>(args: I, settings: Settings) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let utterance = args.into_iter().nth(1).map(|arg| {
            let arg: OsString = arg.into();
            arg.to_string_lossy().into_owned()
        });
        Self { utterance, settings }
    }

    /// Load the chatbot and answer the utterance.
    pub fn run(self) -> Reply {
        let config = ChatConfig::from(&self.settings);
        reply_with(self.utterance.as_deref(), || RespondUseCase::from_config(&config))
    }
}

/// The outer catch: a missing utterance or a startup failure
/// becomes an error reply; everything else is a response.
///
/// The responder is built before the utterance is looked at, so a
/// broken corpus or model fails every request, canned ones included.
pub fn reply_with<R, F>(utterance: Option<&str>, load: F) -> Reply
where
    R: Responder,
    F: FnOnce() -> Result<R>,
{
    let Some(utterance) = utterance else {
        return Reply::error(NO_INPUT_ERROR);
    };

    match load() {
        Ok(responder) => Reply::response(responder.respond(utterance)),
        Err(e)        => Reply::error(format!("{e:#}")),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::domain::intent::{ACKNOWLEDGE_REPLY, FAREWELL_REPLY};

    struct Echo;

    impl Responder for Echo {
        fn respond(&self, utterance: &str) -> String {
            format!("echo: {utterance}")
        }
    }

    fn settings(corpus: &str, model_dir: &str) -> Settings {
        Settings { corpus: corpus.to_string(), model_dir: model_dir.to_string() }
    }

    fn utterance_of(args: &[&str]) -> Option<String> {
        Cli::from_args(args.iter().copied(), settings("c.csv", "m")).utterance
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let loaded = Cell::new(false);
        let reply  = reply_with(None, || { loaded.set(true); Ok(Echo) });
        assert_eq!(reply, Reply::error(NO_INPUT_ERROR));
        assert_eq!(reply.to_json(), r#"{"error":"No input provided"}"#);
        assert!(!loaded.get());
    }

    #[test]
    fn test_load_failure_is_an_error() {
        let reply = reply_with(Some("hello"), || -> Result<Echo> {
            Err(anyhow::anyhow!("missing weights").context("Error loading model"))
        });
        assert_eq!(reply, Reply::error("Error loading model: missing weights"));
    }

    #[test]
    fn test_response_wraps_responder_output() {
        let reply = reply_with(Some("hi"), || Ok(Echo));
        assert_eq!(reply, Reply::response("echo: hi"));
    }

    #[test]
    fn test_first_argument_is_the_utterance() {
        assert_eq!(utterance_of(&[BIN_NAME, "how are you?"]).as_deref(), Some("how are you?"));
        assert_eq!(utterance_of(&[BIN_NAME]), None);
    }

    #[test]
    fn test_flag_lookalikes_are_taken_verbatim() {
        for said in ["--help", "-h", "--version", "--corpus=x y", "--", "-_- feeling low"] {
            assert_eq!(utterance_of(&[BIN_NAME, said]).as_deref(), Some(said));
        }
    }

    #[test]
    fn test_utterance_never_changes_settings() {
        let cli = Cli::from_args([BIN_NAME, "--corpus=x y"], settings("c.csv", "m"));
        assert_eq!(cli.settings.corpus, "c.csv");
        assert_eq!(cli.settings.model_dir, "m");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(utterance_of(&[BIN_NAME, "hi", "there"]).as_deref(), Some("hi"));
    }

    #[test]
    fn test_settings_defaults() {
        let s = Settings::try_parse_from([BIN_NAME]).unwrap();
        // Only checked when the variables are unset in the test environment
        if std::env::var_os("CHATBOT_CORPUS").is_none() {
            assert_eq!(s.corpus, "data/Happiness.csv");
        }
        if std::env::var_os("CHATBOT_MODEL_DIR").is_none() {
            assert_eq!(s.model_dir, "models");
        }
    }

    // ── End to end through the real loaders ──────────────────────────────────
    // Canned replies still need a loadable corpus and model. With no
    // model artifact the run fails with an error reply.
    #[test]
    fn test_canned_reply_still_requires_model() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.csv");
        std::fs::write(&corpus, b"Questions,Answer\nHi?,Hello there.\n").unwrap();

        let cli = Cli::from_args(
            [BIN_NAME, "bye for now"],
            settings(corpus.to_str().unwrap(), dir.path().join("missing").to_str().unwrap()),
        );

        let reply = cli.run();
        assert!(reply.is_error());
        assert_ne!(reply, Reply::response(FAREWELL_REPLY));
    }

    #[test]
    fn test_missing_corpus_is_an_error_reply() {
        let cli = Cli::from_args(
            [BIN_NAME, "nope not interested"],
            settings("no/such/corpus.csv", "models"),
        );
        let reply = cli.run();
        assert!(reply.is_error());
        assert_ne!(reply, Reply::response(ACKNOWLEDGE_REPLY));
    }
}
