//! Static word lists used by the heuristic engine.
//!
//! Every set is built once on first access and never written to afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English function words dropped by the tokenizer
const STOPWORDS_EN: &[&str] = &[
    "a", "an", "and", "the", "is", "are", "was", "were", "be", "been", "being", "am", "do",
    "does", "did", "doing", "have", "has", "had", "having", "i", "me", "my", "we", "our", "you",
    "your", "he", "she", "it", "they", "them", "this", "that", "these", "those", "here", "there",
    "of", "on", "in", "at", "by", "for", "from", "to", "with", "without", "into", "over",
    "under", "as", "about", "above", "below", "up", "down", "not", "no", "nor", "so", "too",
    "very", "can", "will", "just", "than", "then", "now", "out", "off", "or", "if", "but",
];

/// Common verb forms that the noun filter always rejects
const VERB_HINTS: &[&str] = &[
    "be", "been", "being", "am", "is", "are", "was", "were", "do", "does", "did", "doing",
    "have", "has", "had", "having", "say", "says", "said", "make", "makes", "made", "go", "goes",
    "went", "going", "take", "takes", "took",
];

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "progress",
    "success",
    "happy",
    "love",
    "like",
    "benefit",
    "improve",
    "improved",
    "improvement",
    "strong",
    "growth",
    "win",
    "wins",
    "winning",
    "excited",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "negative",
    "fail",
    "failure",
    "sad",
    "hate",
    "dislike",
    "issue",
    "problem",
    "problems",
    "weak",
    "decline",
    "loss",
    "losses",
    "losing",
    "concerned",
];

pub static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

pub static VERB_HINT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERB_HINTS.iter().copied().collect());

pub static POSITIVE_LEXICON: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

pub static NEGATIVE_LEXICON: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_are_disjoint() {
        assert!(POSITIVE_LEXICON.is_disjoint(&NEGATIVE_LEXICON));
    }

    #[test]
    fn test_sentiment_words_survive_stopword_filter() {
        for word in POSITIVE_LEXICON.iter().chain(NEGATIVE_LEXICON.iter()) {
            assert!(!STOPWORDS.contains(word), "'{}' would never be scored", word);
        }
    }

    #[test]
    fn test_set_sizes() {
        assert_eq!(STOPWORDS.len(), STOPWORDS_EN.len());
        assert_eq!(VERB_HINT_SET.len(), VERB_HINTS.len());
    }
}
