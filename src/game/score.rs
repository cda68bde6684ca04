//! Scoring: a pure function of the accepted words
//!
//! `score = words * (1 + letters / 100)`, rounded to three decimals.

/// Multiplier bonus per accepted letter
pub const LETTER_BONUS: f64 = 0.01;

/// Total number of letters across all accepted words.
pub fn letter_count<S: AsRef<str>>(history: &[S]) -> usize {
    history.iter().map(|w| w.as_ref().chars().count()).sum()
}

/// Score a history of accepted words. Empty history scores zero.
pub fn score<S: AsRef<str>>(history: &[S]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }

    let letter_multiplier = 1.0 + letter_count(history) as f64 * LETTER_BONUS;
    let raw_score = history.len() as f64 * letter_multiplier;
    round_to_thousandths(raw_score)
}

/// Round half away from zero at the third decimal
fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
