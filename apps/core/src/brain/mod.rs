//! # Brain Module
//!
//! Heuristic text analysis for the Knowledge Extractor.
//! Everything here is synchronous except the analyzer, which awaits the
//! optional external summarizer.
//!
//! ## Components
//! - `lexicon`: stopwords, verb hints and sentiment word lists
//! - `text`: normalization, sentence splitting, tokenization, noun heuristic
//! - `keywords`: frequency-based keyword ranking with boost terms
//! - `sentiment`: lexicon polarity
//! - `confidence`: saturating confidence score
//! - `record`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod confidence;
pub mod keywords;
pub mod lexicon;
pub mod record;
pub mod sentiment;
pub mod text;

pub use analyzer::{Analyzer, TOP_KEYWORDS};
pub use keywords::{KeywordExtractor, KeywordResult};
pub use record::AnalysisRecord;
pub use sentiment::Sentiment;
