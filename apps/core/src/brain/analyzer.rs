//! Analyzer - Main orchestrator for the Brain module.
//!
//! Normalizes the input, asks the configured summarizer for a summary, falls
//! back to heuristics when it has nothing to offer, and always derives the
//! keywords and the confidence locally.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use super::confidence::confidence;
use super::keywords::KeywordExtractor;
use super::record::AnalysisRecord;
use super::sentiment::{sentiment, Sentiment};
use super::text::{normalize, split_sentences, word_matches};
use crate::error::AppError;
use crate::summarizer::{DisabledSummarizer, Summarizer, SummaryOutcome};

/// Keywords and fallback topics per record
pub const TOP_KEYWORDS: usize = 3;

/// A first sentence shorter than this is extended with the second one
const SHORT_SENTENCE_CHARS: usize = 180;

/// Summary, topics and sentiment from whichever source answered.
struct Digest {
    title: Option<String>,
    summary: String,
    topics: Vec<String>,
    sentiment: Sentiment,
    used_external: bool,
}

/// Main analyzer that orchestrates all analysis components
#[derive(Clone)]
pub struct Analyzer {
    keyword_extractor: KeywordExtractor,
    summarizer: Arc<dyn Summarizer>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl Analyzer {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
            summarizer,
        }
    }

    /// Analyzer that never calls out.
    pub fn heuristic() -> Self {
        Self::new(Arc::new(DisabledSummarizer))
    }

    /// First sentence, plus the second when the first is short.
    pub fn fallback_summary(text: &str) -> String {
        let mut sentences = split_sentences(text).into_iter();
        let mut summary = sentences.next().unwrap_or_default();
        if summary.chars().count() < SHORT_SENTENCE_CHARS {
            if let Some(second) = sentences.next() {
                summary.push(' ');
                summary.push_str(&second);
            }
        }
        summary
    }

    fn heuristic_digest(&self, text: &str, title: Option<&str>) -> Digest {
        Digest {
            title: title.map(str::to_string),
            summary: Self::fallback_summary(text),
            topics: self
                .keyword_extractor
                .extract_keywords::<&str>(text, TOP_KEYWORDS, &[]),
            sentiment: sentiment(text),
            used_external: false,
        }
    }

    /// A summary that is blank after trimming counts as no summary: the
    /// heuristic digest is used and no external bonus applies.
    async fn digest(&self, text: &str, title: Option<&str>) -> Digest {
        match self.summarizer.summarize(text).await {
            SummaryOutcome::Produced { summary, metadata } if !summary.trim().is_empty() => {
                Digest {
                    title: metadata
                        .title
                        .filter(|t| !t.is_empty())
                        .or_else(|| title.map(str::to_string)),
                    summary,
                    topics: metadata.topics,
                    sentiment: metadata.sentiment,
                    used_external: true,
                }
            }
            SummaryOutcome::Produced { .. } => {
                debug!("{} returned an empty summary", self.summarizer.name());
                self.heuristic_digest(text, title)
            }
            SummaryOutcome::Unavailable => self.heuristic_digest(text, title),
        }
    }

    /// Analyze one text.
    ///
    /// Fails only with `AppError::EmptyInput`; summarizer problems degrade to
    /// the heuristic path.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn analyze(
        &self,
        text: &str,
        title: Option<&str>,
    ) -> Result<AnalysisRecord, AppError> {
        let start = Instant::now();

        let text = normalize(text);
        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let digest = self.digest(&text, title).await;

        let boost = title.map(word_matches).unwrap_or_default();
        let keywords = self
            .keyword_extractor
            .extract_keywords(&text, TOP_KEYWORDS, &boost);

        let record = AnalysisRecord {
            title: digest.title,
            summary: normalize(&digest.summary),
            topics: digest.topics,
            keywords,
            sentiment: digest.sentiment,
            confidence: confidence(&text, digest.used_external),
            used_external: digest.used_external,
            text,
        };

        info!(
            "Analyzed in {}ms: {}",
            start.elapsed().as_millis(),
            record.describe()
        );
        Ok(record)
    }
}
