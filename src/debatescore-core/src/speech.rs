//! Speech and round-context definitions.
//!
//! A round is an ordered list of speeches plus an explicit context object
//! carrying the motion and the human participant's role.

use serde::{Deserialize, Serialize};

/// Who delivered a speech: the human user or a simulated opponent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human practising in the arena.
    User,
    /// A simulated (AI) debater.
    Ai,
}

/// One delivered speech in a debate round.
///
/// Immutable once captured; held in an ordered sequence for the duration
/// of the round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speech {
    /// Speaking position, e.g. "Prime Minister".
    pub role: String,
    /// Bench label, e.g. "Government" or "Opening Opposition".
    pub side: String,
    /// Transcript content. Absent or null in upstream payloads is
    /// treated the same as empty.
    #[serde(default)]
    pub text: Option<String>,
}

impl Speech {
    pub fn new(
        role: impl Into<String>,
        side: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            side: side.into(),
            text: Some(text.into()),
        }
    }

    /// Transcript text, empty if none was captured.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Explicit per-round context passed into the aggregator by the caller.
///
/// Replaces any ambient global debate state: the scoring core only sees
/// what the caller hands it.
#[derive(Debug, Clone, Default)]
pub struct RoundContext {
    /// The motion being debated.
    pub motion: String,
    /// Role the human user spoke in, if any. Used to tag evaluations
    /// with the [`Speaker`] sentinel.
    pub user_role: Option<String>,
}

impl RoundContext {
    pub fn new(motion: impl Into<String>) -> Self {
        Self {
            motion: motion.into(),
            user_role: None,
        }
    }

    /// Set the role the human user is speaking in.
    pub fn with_user_role(mut self, role: impl Into<String>) -> Self {
        self.user_role = Some(role.into());
        self
    }

    /// Which sentinel a given role should be tagged with.
    pub fn speaker_for_role(&self, role: &str) -> Speaker {
        match &self.user_role {
            Some(user_role) if user_role == role => Speaker::User,
            _ => Speaker::Ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_text_defaults_to_empty() {
        let speech = Speech {
            role: "Prime Minister".to_string(),
            side: "Government".to_string(),
            text: None,
        };
        assert_eq!(speech.text(), "");
    }

    #[test]
    fn test_speech_deserializes_without_text() {
        let speech: Speech =
            serde_json::from_str(r#"{"role":"Government Whip","side":"Government"}"#).unwrap();
        assert_eq!(speech.text(), "");
    }

    #[test]
    fn test_speech_deserializes_null_text() {
        let speech: Speech =
            serde_json::from_str(r#"{"role":"Government Whip","side":"Government","text":null}"#)
                .unwrap();
        assert_eq!(speech.text(), "");
    }

    #[test]
    fn test_speaker_sentinel_from_context() {
        let ctx = RoundContext::new("This House would ban targeted advertising")
            .with_user_role("Prime Minister");
        assert_eq!(ctx.speaker_for_role("Prime Minister"), Speaker::User);
        assert_eq!(ctx.speaker_for_role("Leader of Opposition"), Speaker::Ai);
    }

    #[test]
    fn test_speaker_defaults_to_ai_without_user_role() {
        let ctx = RoundContext::new("motion");
        assert_eq!(ctx.speaker_for_role("Prime Minister"), Speaker::Ai);
    }
}
