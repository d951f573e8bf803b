//! Test Module
//!
//! Cross-module test suite for the Knowledge Extractor.
//!
//! ## Test Categories
//! - `brain_tests`: end-to-end analyzer behavior, heuristic and external paths
//! - `database_tests`: storage and search of analyses
//! - `integration_tests`: HTTP API round trips through the router


use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tempfile::{tempdir, TempDir};

use crate::brain::Sentiment;
use crate::summarizer::{ExternalMetadata, Summarizer, SummaryOutcome};

pub const PYTHON_TEXT: &str =
    "Python is a versatile programming language. It is widely used in AI and web development.";

/// Summarizer double that answers every request with the same outcome.
pub struct FixedSummarizer {
    outcome: SummaryOutcome,
}

impl FixedSummarizer {
    pub fn produced(
        summary: &str,
        title: Option<&str>,
        topics: &[&str],
        sentiment: Sentiment,
    ) -> Self {
        Self {
            outcome: SummaryOutcome::Produced {
                summary: summary.to_string(),
                metadata: ExternalMetadata {
                    title: title.map(str::to_string),
                    topics: topics.iter().map(|t| t.to_string()).collect(),
                    sentiment,
                },
            },
        }
    }
}

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, _text: &str) -> SummaryOutcome {
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Create a migrated test database. Keep the `TempDir` alive for the test's duration.
pub async fn create_test_pool() -> (SqlitePool, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}
