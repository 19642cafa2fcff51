//! External adjudication client.
//!
//! Optionally delegates the verdict to an OpenAI-compatible service. The
//! response shape is not contractually fixed, so this module only gets the
//! reply text and extracts a JSON payload from it; the verdict module
//! reads that payload defensively. Any failure here degrades to `None`,
//! and the caller falls back to the local heuristic model.

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use serde_json::Value;

use crate::error::ScoreError;
use crate::speech::Speech;

/// Connection settings for the external adjudication service.
#[derive(Debug, Clone)]
pub struct AdjudicatorConfig {
    /// OpenAI-compatible API base URL.
    pub api_base: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model to adjudicate with.
    pub model: String,
}

impl AdjudicatorConfig {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

const SYSTEM_PROMPT: &str = "You are an experienced parliamentary debate adjudicator. \
Respond with a single JSON object and no other text.";

/// One attempt plus a single retry, per round.
const MAX_ATTEMPTS: u32 = 2;

/// Client for the external adjudication service.
pub struct ExternalAdjudicator {
    config: AdjudicatorConfig,
}

impl ExternalAdjudicator {
    pub fn new(config: AdjudicatorConfig) -> Self {
        Self { config }
    }

    /// Ask the external service to adjudicate. Returns `None` on any
    /// transport failure, empty reply, or unparseable payload.
    pub async fn adjudicate(&self, prompt: &str) -> Option<Value> {
        match self.request_verdict(prompt).await {
            Ok(reply) => extract_json(&reply),
            Err(e) => {
                eprintln!("Adjudication call failed, using local scoring: {e}");
                None
            }
        }
    }

    /// Get the raw adjudication reply, retrying once on failure.
    async fn request_verdict(&self, prompt: &str) -> Result<String, ScoreError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ScoreError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let config = OpenAIConfig::new()
            .with_api_key(&self.config.api_key)
            .with_api_base(&self.config.api_base);

        let client = Client::with_config(config).with_http_client(http_client);

        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: SYSTEM_PROMPT.to_string().into(),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: prompt.to_string().into(),
                name: None,
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .max_completion_tokens(1200u32)
            .messages(messages)
            .build()?;

        let mut last_error = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            }

            match client.chat().create(request.clone()).await {
                Ok(response) => {
                    let content = response
                        .choices
                        .first()
                        .and_then(|c| c.message.content.clone())
                        .unwrap_or_default();
                    return Ok(content);
                }
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.map(ScoreError::from).unwrap_or_else(|| {
            ScoreError::Config("Unknown API error after retries".to_string())
        }))
    }
}

/// Render the transcript for the adjudication prompt.
pub fn render_transcript(speeches: &[Speech]) -> String {
    speeches
        .iter()
        .map(|s| format!("[{} — {}]\n{}\n", s.side, s.role, s.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the first JSON object from a model reply.
///
/// Strips markdown code fences first, then falls back to the outermost
/// brace span. Returns `None` if nothing parses.
pub fn extract_json(reply: &str) -> Option<Value> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(re) = regex::Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```") {
        if let Some(caps) = re.captures(trimmed) {
            if let Some(m) = caps.get(1) {
                if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
                    return value.is_object().then_some(value);
                }
            }
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<Value>(&trimmed[start..=end])
        .ok()
        .filter(Value::is_object)
}
