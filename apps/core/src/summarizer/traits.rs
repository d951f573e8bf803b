use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::brain::Sentiment;

/// Title, topics and sentiment reported alongside an external summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalMetadata {
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
}

/// Outcome of asking a summarizer for a summary.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// The summarizer answered. The summary may still be empty.
    Produced {
        summary: String,
        metadata: ExternalMetadata,
    },
    /// Disabled, unreachable, timed out, or answered with something unparseable.
    Unavailable,
}

/// Defines the public interface for an external summary source.
///
/// This trait abstracts the specific backend (a remote chat-completion API, a
/// disabled stub, a test double) so the analyzer only branches on the outcome.
/// Implementations must absorb their own failures and report them as
/// `SummaryOutcome::Unavailable`.
#[async_trait]
pub trait Summarizer: Send + Sync + 'static {
    async fn summarize(&self, text: &str) -> SummaryOutcome;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
