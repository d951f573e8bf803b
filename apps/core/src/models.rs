use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::brain::Sentiment;
use crate::error::AppError;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Single text to analyze. Takes precedence over `texts` when non-empty.
    #[serde(default)]
    pub text: Option<String>,
    /// Title shared by every text in the request.
    #[serde(default)]
    pub title: Option<String>,
    /// Batch of texts, analysed independently.
    #[serde(default)]
    #[validate(length(min = 1, message = "Texts list cannot be empty"))]
    pub texts: Option<Vec<String>>,
}

impl AnalyzeRequest {
    /// Texts to analyze, in response order.
    pub fn inputs(&self) -> Result<Vec<&str>, AppError> {
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            return Ok(vec![text]);
        }

        self.validate()?;
        match &self.texts {
            Some(texts) => Ok(texts.iter().map(String::as_str).collect()),
            None => Err(AppError::Validation(
                "Provide either 'text' or 'texts'".to_string(),
            )),
        }
    }
}

/// Query string of `GET /search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub topic: Option<String>,
    pub keyword: Option<String>,
}

impl SearchParams {
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// Row of the `analyses` table.
#[derive(Debug, FromRow)]
pub struct AnalysisRow {
    pub id: i64,
    pub title: Option<String>,
    pub text: String,
    pub summary: String,
    pub topics: Json<Vec<String>>,
    pub keywords: Json<Vec<String>>,
    pub sentiment: String,
    pub confidence: f64,
    /// Unix timestamp of when the analysis was stored.
    pub created_at: i64,
}

/// A persisted analysis as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: i64,
    pub title: Option<String>,
    #[serde(skip_serializing, default)]
    pub text: String,
    pub summary: String,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

impl From<AnalysisRow> for StoredAnalysis {
    fn from(row: AnalysisRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            text: row.text,
            summary: row.summary,
            topics: row.topics.0,
            sentiment: Sentiment::from_label(&row.sentiment),
            keywords: row.keywords.0,
            confidence: row.confidence,
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_default(),
        }
    }
}
