// ============================================================
// Layer 3 - Canned Intents and Replies
// ============================================================
// Some utterances never reach the neural model. If the user is
// saying goodbye, or declining, the bot answers with fixed text.
//
// Matching is a plain substring test on the lowercased input,
// so "no" also fires inside "know" or "nothing". That is the
// behaviour the deployed bot has always had, and it is kept.

/// Phrases that end the conversation.
pub const EXIT_PHRASES: [&str; 7] = ["quit", "pause", "exit", "goodbye", "bye", "later", "stop"];

/// Phrases that decline or apologise.
pub const NEGATIVE_PHRASES: [&str; 6] = ["no", "nope", "nah", "naw", "not a chance", "sorry"];

pub const FAREWELL_REPLY: &str = "Goodbye! Take care of yourself.";

pub const ACKNOWLEDGE_REPLY: &str = "I understand. Is there anything else you'd like to talk about?";

/// Used when the model produced nothing but control markers.
pub const CLARIFY_REPLY: &str = "I'm not sure how to respond to that. Could you rephrase?";

/// Used when decoding fails for any reason.
pub const APOLOGY_REPLY: &str = "I apologize, but I'm having trouble processing your request right now.";

/// What the short-circuit check decided about an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Negative,
    /// Nothing matched, run the model.
    Open,
}

impl Intent {
    /// Classify an utterance. Exit phrases win over negative ones.
    pub fn classify(utterance: &str) -> Self {
        let lower = utterance.to_lowercase();
        if EXIT_PHRASES.iter().any(|p| lower.contains(p)) {
            Intent::Exit
        } else if NEGATIVE_PHRASES.iter().any(|p| lower.contains(p)) {
            Intent::Negative
        } else {
            Intent::Open
        }
    }

    /// The fixed reply for this intent, if it has one.
    pub fn canned_reply(self) -> Option<&'static str> {
        match self {
            Intent::Exit     => Some(FAREWELL_REPLY),
            Intent::Negative => Some(ACKNOWLEDGE_REPLY),
            Intent::Open     => None,
        }
    }
}
