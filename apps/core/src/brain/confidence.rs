//! Confidence estimation.
//!
//! A saturating score over the token count, a capped bonus for raw text length,
//! and a flat bonus when an external model produced the summary.

use super::text::tokenize;

/// Token count at which the base score reaches `1 - 1/e`
const TOKEN_SCALE: f64 = 60.0;
/// Characters needed for the full length bonus
const LENGTH_SCALE: f64 = 2000.0;
const MAX_LENGTH_BONUS: f64 = 0.4;
const EXTERNAL_BONUS: f64 = 0.05;
const CEILING: f64 = 0.99;

/// Round to two decimals on the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Confidence from precomputed signals.
pub fn score(token_count: usize, char_length: usize, used_external: bool) -> f64 {
    let base = 1.0 - (-(token_count as f64) / TOKEN_SCALE).exp();
    let length_bonus = MAX_LENGTH_BONUS.min((char_length as f64 / LENGTH_SCALE) * MAX_LENGTH_BONUS);
    let external_bonus = if used_external { EXTERNAL_BONUS } else { 0.0 };

    round2(CEILING.min(base + length_bonus + external_bonus))
}

/// Confidence for a normalized text.
pub fn confidence(text: &str, used_external: bool) -> f64 {
    score(tokenize(text).len(), text.chars().count(), used_external)
}
