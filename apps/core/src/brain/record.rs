//! Analysis Record - Output structure of the analyzer.

use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;

/// Complete result of analysing one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// External title if the summarizer supplied one, else the caller's title
    pub title: Option<String>,

    /// Normalized input text
    pub text: String,

    /// One or two sentence summary
    pub summary: String,

    /// Topics, either from the summarizer or the top heuristic keywords
    pub topics: Vec<String>,

    /// Heuristic keywords, always derived locally
    pub keywords: Vec<String>,

    pub sentiment: Sentiment,

    /// Rounded to two places, never above 0.99
    pub confidence: f64,

    /// Whether the summary came from the external summarizer
    #[serde(skip)]
    pub used_external: bool,
}

impl AnalysisRecord {
    /// Get a summary for logging
    pub fn describe(&self) -> String {
        format!(
            "Topics: {}, Keywords: {}, Sentiment: {}, Confidence: {:.2}, External: {}",
            self.topics.len(),
            self.keywords.join(","),
            self.sentiment,
            self.confidence,
            if self.used_external { "yes" } else { "no" }
        )
    }
}
