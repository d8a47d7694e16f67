//! Acceptance checks applied to each extracted event.

const FIRST_YEAR: i32 = 2025;
const LAST_YEAR: i32 = 2029;

/// The year must render as plain digits and fall in `2025..=2029`.
#[must_use]
pub fn is_valid_timeline(timeline: i32) -> bool {
    let rendered = timeline.to_string();
    !rendered.is_empty()
        && rendered.chars().all(|c| c.is_ascii_digit())
        && (FIRST_YEAR..=LAST_YEAR).contains(&timeline)
}

/// An event counts as UK-local if any of these hold:
///
/// - its text contains `"UK"`;
/// - the resolved location contains the postcode's first two characters
///   (case-insensitive);
/// - the resolved location is not blank.
///
/// The resolver always returns at least `"Within <postcode>"`, so the last
/// clause accepts practically everything. It is kept as is.
#[must_use]
pub fn is_valid_location(event_text: &str, location: &str, postcode: &str) -> bool {
    let prefix: String = postcode.chars().take(2).collect::<String>().to_uppercase();

    event_text.contains("UK")
        || location.to_uppercase().contains(&prefix)
        || !location.trim().is_empty()
}
