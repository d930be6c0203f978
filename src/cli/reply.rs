// ============================================================
// Layer 1 - JSON Reply
// ============================================================
// The single line written to stdout. Serde's default enum
// representation turns each variant into a one-key object:
//
//   Reply::Response("Hi")  → {"response":"Hi"}
//   Reply::Error("boom")   → {"error":"boom"}
//
// so a reply can never carry both fields.

use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Response(String),
    Error(String),
}

impl Reply {
    pub fn response(text: impl Into<String>) -> Self {
        Reply::Response(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// 0 for a response (canned and fallback replies included), 1 for an error.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Cannot encode reply: {e}") }).to_string()
        })
    }
}
