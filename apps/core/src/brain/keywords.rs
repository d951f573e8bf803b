//! Keyword ranking by frequency.
//!
//! Counts noun-like tokens, optionally injects boost terms (e.g. words from a
//! title), keeps the most frequent candidates and prefers longer words on ties.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::text::{is_probable_noun, tokenize};

/// Number of distinct candidates kept before the final re-sort
const CANDIDATE_POOL: usize = 10;

/// Synthetic occurrences added for each boost term
const BOOST_WEIGHT: usize = 3;

/// Result of keyword extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The keyword
    pub keyword: String,
    /// Occurrences in the text, including boost occurrences
    pub frequency: usize,
}

/// Frequency-based keyword extractor.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    pool_size: usize,
    boost_weight: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            pool_size: CANDIDATE_POOL,
            boost_weight: BOOST_WEIGHT,
        }
    }

    /// Count candidate tokens in first-seen order.
    ///
    /// Text tokens come first, then boost terms in the order supplied.
    fn count<S: AsRef<str>>(&self, text: &str, boost: &[S]) -> Vec<KeywordResult> {
        let mut counts: Vec<KeywordResult> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let mut bump = |word: String, by: usize| {
            let next = counts.len();
            match index.entry(word) {
                Entry::Occupied(slot) => counts[*slot.get()].frequency += by,
                Entry::Vacant(slot) => {
                    counts.push(KeywordResult {
                        keyword: slot.key().clone(),
                        frequency: by,
                    });
                    slot.insert(next);
                }
            }
        };

        for token in tokenize(text).into_iter().filter(|t| is_probable_noun(t)) {
            bump(token, 1);
        }
        for term in boost {
            bump(term.as_ref().to_lowercase(), self.boost_weight);
        }

        counts
    }

    /// Extract at most `top_k` keywords from `text`.
    ///
    /// Ties on frequency at the candidate cut keep first-seen order. The
    /// surviving candidates are ordered by frequency, then by length, and any
    /// remaining tie keeps first-seen order too.
    pub fn extract<S: AsRef<str>>(
        &self,
        text: &str,
        top_k: usize,
        boost: &[S],
    ) -> Vec<KeywordResult> {
        let mut pool = self.count(text, boost);

        pool.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        pool.truncate(self.pool_size);

        pool.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| b.keyword.chars().count().cmp(&a.keyword.chars().count()))
        });
        pool.truncate(top_k);
        pool
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords<S: AsRef<str>>(
        &self,
        text: &str,
        top_k: usize,
        boost: &[S],
    ) -> Vec<String> {
        self.extract(text, top_k, boost)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }
}
