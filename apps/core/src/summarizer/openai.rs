//! OpenAI-compatible chat-completion summarizer.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::traits::{ExternalMetadata, Summarizer, SummaryOutcome};
use crate::brain::Sentiment;
use crate::config::SummarizerConfig;
use crate::error::AppError;

const SYSTEM_PROMPT: &str = "Summarize the text in 1-2 sentences, then extract JSON with keys: \
summary, title, topics, sentiment (positive/neutral/negative).";

/// Outermost `{ ... }` span, used when the model wraps its JSON in prose.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid regex: JSON object span"));

/// Errors raised inside the client. They never leave this module.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("unparseable reply: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

/// JSON object the model is asked to produce.
#[derive(Debug, Default, Deserialize)]
struct ModelReply {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    topics: Option<Vec<String>>,
    #[serde(default)]
    sentiment: Option<String>,
}

impl ModelReply {
    fn into_outcome(self) -> SummaryOutcome {
        SummaryOutcome::Produced {
            summary: self.summary.unwrap_or_default(),
            metadata: ExternalMetadata {
                title: self.title,
                topics: self.topics.unwrap_or_default(),
                sentiment: self
                    .sentiment
                    .as_deref()
                    .map(Sentiment::from_label)
                    .unwrap_or_default(),
            },
        }
    }
}

/// Parse the assistant message, falling back to the outermost braces.
fn parse_reply(content: &str) -> Result<ModelReply, SummarizerError> {
    if let Ok(reply) = serde_json::from_str::<ModelReply>(content) {
        return Ok(reply);
    }

    let span = JSON_OBJECT
        .find(content)
        .ok_or_else(|| SummarizerError::Parse("no JSON object in reply".to_string()))?;

    serde_json::from_str(span.as_str()).map_err(|e| SummarizerError::Parse(e.to_string()))
}

/// Summarizer backed by a chat-completion endpoint.
pub struct OpenAiSummarizer {
    config: SummarizerConfig,
    client: Client,
}

impl OpenAiSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.as_str().trim_end_matches('/')
        )
    }

    async fn request_summary(&self, text: &str) -> Result<ModelReply, SummarizerError> {
        let truncated: String = text.chars().take(self.config.max_input_chars).collect();
        let payload = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &truncated,
                },
            ],
            temperature: self.config.temperature,
        };

        let mut request = self.client.post(self.endpoint()).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let res = request
            .send()
            .await
            .map_err(|e| SummarizerError::Connection(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SummarizerError::Api(format!("HTTP {}: {}", status, body)));
        }

        let chat: ChatResponse = res
            .json()
            .await
            .map_err(|e| SummarizerError::Parse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| "{}".to_string());
        debug!("Summarizer reply: {} chars", content.len());

        parse_reply(&content)
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> SummaryOutcome {
        match self.request_summary(text).await {
            Ok(reply) => {
                info!("External summary received from {}", self.config.model);
                reply.into_outcome()
            }
            Err(e) => {
                warn!("External summarizer unavailable, using heuristics: {}", e);
                SummaryOutcome::Unavailable
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
