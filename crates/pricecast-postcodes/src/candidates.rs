//! Candidate place-name selection from free text.

/// Title-case test on a single token.
///
/// Every uppercase letter must follow an uncased character (or start the
/// token), every lowercase letter must follow a cased one, and at least one
/// cased letter must be present. So `London`, `Kensington-Chelsea`, and
/// `O'Neill` pass; `UK`, `McDonald`, `london`, and `2026` do not.
#[must_use]
pub fn is_title_case(token: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;

    for c in token.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Title-cased whitespace tokens longer than two characters, with surrounding
/// commas and periods stripped.
///
/// The length and case checks apply to the raw token, before stripping.
#[must_use]
pub fn candidate_places(summary: &str) -> Vec<&str> {
    summary
        .split_whitespace()
        .filter(|token| token.chars().count() > 2 && is_title_case(token))
        .map(|token| token.trim_matches(|c| c == ',' || c == '.'))
        .collect()
}
