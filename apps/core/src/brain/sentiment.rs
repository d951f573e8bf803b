//! Lexicon-based polarity scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::{NEGATIVE_LEXICON, POSITIVE_LEXICON};
use super::text::tokenize;

/// Overall polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Parse a label produced by an external model. Unknown labels are neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Positive hits minus negative hits over the stopword-filtered tokens.
pub fn polarity_score(text: &str) -> i64 {
    tokenize(text).iter().fold(0, |score, token| {
        if POSITIVE_LEXICON.contains(token.as_str()) {
            score + 1
        } else if NEGATIVE_LEXICON.contains(token.as_str()) {
            score - 1
        } else {
            score
        }
    })
}

pub fn sentiment(text: &str) -> Sentiment {
    Sentiment::from_score(polarity_score(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(sentiment("Great success, happy team"), Sentiment::Positive);
    }

    #[test]
    fn test_negative() {
        assert_eq!(sentiment("A terrible failure and a sad decline"), Sentiment::Negative);
    }

    #[test]
    fn test_neutral_without_lexicon_words() {
        assert_eq!(sentiment("The meeting is on Tuesday"), Sentiment::Neutral);
        assert_eq!(sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_balanced_is_neutral() {
        assert_eq!(polarity_score("good bad"), 0);
        assert_eq!(sentiment("good bad"), Sentiment::Neutral);
    }

    #[test]
    fn test_headline() {
        let text = "Good news: profits up, strong growth, no losses.";
        assert_eq!(polarity_score(text), 2);
        assert_eq!(sentiment(text), Sentiment::Positive);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sentiment("EXCELLENT"), Sentiment::Positive);
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(Sentiment::from_label(" Positive "), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("NEGATIVE"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::Negative.to_string(), "negative");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
