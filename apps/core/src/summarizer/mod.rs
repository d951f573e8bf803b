//! # Summarizer Module
//!
//! Optional external summary sources. The backend is chosen once at startup
//! from configuration and handed to the analyzer as a trait object.
//!
//! ## Components
//! - `traits`: the `Summarizer` contract and its tagged outcome
//! - `openai`: chat-completion client for OpenAI-compatible APIs

pub mod openai;
pub mod traits;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::SummarizerConfig;

pub use openai::OpenAiSummarizer;
pub use traits::{ExternalMetadata, Summarizer, SummaryOutcome};

/// Summarizer used when no remote backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSummarizer;

#[async_trait]
impl Summarizer for DisabledSummarizer {
    async fn summarize(&self, _text: &str) -> SummaryOutcome {
        SummaryOutcome::Unavailable
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Select the summarizer backend for this process.
pub fn from_config(config: &SummarizerConfig) -> Arc<dyn Summarizer> {
    if !config.is_active() {
        if config.enabled {
            info!("USE_OPENAI is set but OPENAI_API_KEY is missing; summaries are heuristic only");
        }
        return Arc::new(DisabledSummarizer);
    }

    match OpenAiSummarizer::new(config.clone()) {
        Ok(summarizer) => {
            info!("Remote summarizer enabled (model: {})", config.model);
            Arc::new(summarizer)
        }
        Err(e) => {
            error!("Failed to build remote summarizer, falling back to heuristics: {}", e);
            Arc::new(DisabledSummarizer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_is_unavailable() {
        assert_eq!(
            DisabledSummarizer.summarize("anything").await,
            SummaryOutcome::Unavailable
        );
    }

    #[test]
    fn test_selection() {
        let disabled = SummarizerConfig::default();
        assert_eq!(from_config(&disabled).name(), "disabled");

        let no_key = SummarizerConfig {
            enabled: true,
            ..SummarizerConfig::default()
        };
        assert_eq!(from_config(&no_key).name(), "disabled");

        let active = SummarizerConfig {
            enabled: true,
            api_key: Some("sk-test".to_string()),
            ..SummarizerConfig::default()
        };
        assert_eq!(from_config(&active).name(), "openai");
    }
}
