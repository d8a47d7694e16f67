//! Keyword heuristic that nudges a confidence score into an impact score.

/// Substrings that suggest upward price pressure.
pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "increase", "boost", "raise", "improve", "benefit", "positive", "growth",
];

/// Substrings that suggest downward price pressure.
pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "decline", "drop", "reduce", "negative", "decrease", "fall", "risk",
];

/// Adjust `base_confidence` by the sentiment of `text`.
///
/// Adds 0.1 if any positive keyword occurs and subtracts 0.1 if any negative
/// keyword occurs, each at most once. Matching is by lowercase substring, so
/// `"rainfall"` counts as `"fall"`. The result is clamped to `[0.0, 1.0]` and
/// rounded to two decimals.
#[must_use]
pub fn impact_score(text: &str, base_confidence: f64) -> f64 {
    let text = text.to_lowercase();
    let mut score = base_confidence;

    if POSITIVE_KEYWORDS.iter().any(|word| text.contains(word)) {
        score += 0.1;
    }
    if NEGATIVE_KEYWORDS.iter().any(|word| text.contains(word)) {
        score -= 0.1;
    }

    round2(score.clamp(0.0, 1.0))
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
