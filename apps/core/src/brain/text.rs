//! Text canonicalization, sentence segmentation and tokenization.

use regex::Regex;
use std::sync::LazyLock;

use super::lexicon::{STOPWORDS, VERB_HINT_SET};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// A word is an ASCII letter followed by at least one letter, hyphen or apostrophe.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z\-']+").expect("Invalid regex: word pattern"));

/// Map typographic quotes and dashes to ASCII and collapse all whitespace.
///
/// The result has no leading or trailing whitespace and no run of more than one
/// space. Applying it twice yields the same string as applying it once.
pub fn normalize(text: &str) -> String {
    let ascii: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect();

    WHITESPACE_RUN.replace_all(ascii.trim(), " ").into_owned()
}

/// Split text after `.`, `!` or `?` when the punctuation is followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = idx + c.len_utf8();
        let mut next_start = end;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            next_start = ws_idx + ws.len_utf8();
            chars.next();
        }
        if next_start > end {
            sentences.push(&text[start..end]);
            start = next_start;
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract every word match in source order, keeping the original case.
pub fn word_matches(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercase the text and return its word tokens minus stopwords.
///
/// Duplicates are kept so callers can count frequencies.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_matches(&lower)
        .into_iter()
        .filter(|w| !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Cheap part-of-speech guess: rejects known verbs and long `-ing`/`-ed` words.
pub fn is_probable_noun(word: &str) -> bool {
    if VERB_HINT_SET.contains(word) {
        return false;
    }
    if (word.ends_with("ing") || word.ends_with("ed")) && word.chars().count() > 5 {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_typography() {
        let raw = "\u{201C}It\u{2019}s fine\u{201D} \u{2013} she said \u{2014} \u{2018}ok\u{2019}";
        assert_eq!(normalize(raw), "\"It's fine\" - she said - 'ok'");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize("  one\n\ntwo\t three  "), "one two three");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "",
            "   ",
            "Plain text.",
            "Line one.\r\nLine two\u{00A0}with nbsp \u{2014} dash",
            "\u{201C}quoted\u{201D}\n\n\n  spaced   out  ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_split_sentences() {
        let sents = split_sentences("First one. Second one! Third? Trailing");
        assert_eq!(sents, vec!["First one.", "Second one!", "Third?", "Trailing"]);
    }

    #[test]
    fn test_split_requires_whitespace_after_punctuation() {
        let sents = split_sentences("Version 1.2 is out.Really. Yes");
        assert_eq!(sents, vec!["Version 1.2 is out.Really.", "Yes"]);
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert!(split_sentences("").is_empty());
        assert_eq!(split_sentences("Wow!!   Great."), vec!["Wow!!", "Great."]);
    }

    #[test]
    fn test_tokenize_filters_stopwords_and_keeps_duplicates() {
        let tokens = tokenize("The cat and the Cat's toy-box, the CAT.");
        assert_eq!(tokens, vec!["cat", "cat's", "toy-box", "cat"]);
    }

    #[test]
    fn test_tokenize_skips_single_letters_and_digits() {
        let tokens = tokenize("x y 42 R2 ok");
        assert_eq!(tokens, vec!["ok"]);
    }

    #[test]
    fn test_is_probable_noun() {
        assert!(!is_probable_noun("made"));
        assert!(!is_probable_noun("going"));
        assert!(!is_probable_noun("running"));
        assert!(!is_probable_noun("improved"));
        // Short -ing/-ed words pass.
        assert!(is_probable_noun("thing"));
        assert!(is_probable_noun("used"));
        assert!(is_probable_noun("bred"));
        // Exactly five characters is not "longer than five".
        assert!(is_probable_noun("bored"));
        assert!(is_probable_noun("python"));
        assert!(!is_probable_noun("building"));
    }
}
