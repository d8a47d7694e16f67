//! Grammar for the model's reply.
//!
//! ```text
//! reply := "skip" | line ("\n" line)*
//! line  := event_text "–" link | event_text
//! ```
//!
//! The delimiter is the en dash (U+2013), not a hyphen. A line is kept only if
//! its event text contains a year in `2025..=2029`.

use std::sync::LazyLock;

use pricecast_core::ExtractedEvent;
use regex::Regex;

/// Confidence attached to any reply that was not `skip`.
pub const EXTRACTION_CONFIDENCE: f64 = 0.8;

const LINK_DELIMITER: char = '–';
const SKIP_TOKEN: &str = "skip";

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"202[5-9]").expect("valid year regex"));

/// Events parsed from one reply plus the confidence assigned to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub events: Vec<ExtractedEvent>,
    pub confidence_score: f64,
}

impl Extraction {
    /// No events, zero confidence. Used for `skip` replies and failed calls.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            confidence_score: 0.0,
        }
    }
}

/// Parse a full model reply.
///
/// A reply of `skip` (any case, surrounding whitespace ignored) yields
/// [`Extraction::empty`]. Anything else yields the parsed lines with
/// [`EXTRACTION_CONFIDENCE`], even when no line survived.
#[must_use]
pub fn parse_response(text: &str) -> Extraction {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case(SKIP_TOKEN) {
        return Extraction::empty();
    }

    let events = trimmed
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::debug!(line, "dropping line without a 2025-2029 year");
            }
            parsed
        })
        .collect();

    Extraction {
        events,
        confidence_score: EXTRACTION_CONFIDENCE,
    }
}

/// Parse one line into an event, or `None` when it carries no qualifying year.
#[must_use]
pub fn parse_line(line: &str) -> Option<ExtractedEvent> {
    let parts: Vec<&str> = line.split(LINK_DELIMITER).collect();
    let (event_text, link) = match parts.as_slice() {
        [event_text, link] => (event_text.trim(), link.trim()),
        _ => (line.trim(), ""),
    };

    let year = YEAR_RE.find(event_text)?.as_str().parse::<i32>().ok()?;

    Some(ExtractedEvent {
        event: event_text.to_string(),
        timeline: year,
        link: link.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reply_is_empty_with_zero_confidence() {
        assert_eq!(parse_response("skip"), Extraction::empty());
        assert_eq!(parse_response("  SKIP \n"), Extraction::empty());
        assert_eq!(parse_response("Skip"), Extraction::empty());
    }

    #[test]
    fn parses_event_and_link() {
        let event = parse_line("New hospital opens in 2026 – https://example.gov.uk/plan")
            .expect("line should parse");
        assert_eq!(event.event, "New hospital opens in 2026");
        assert_eq!(event.timeline, 2026);
        assert_eq!(event.link, "https://example.gov.uk/plan");
    }

    #[test]
    fn line_without_year_is_dropped() {
        assert!(parse_line("General infrastructure upgrade – https://example.com").is_none());
    }

    #[test]
    fn years_outside_window_are_dropped() {
        assert!(parse_line("Rail upgrade completes in 2024 – https://example.com").is_none());
        assert!(parse_line("Rail upgrade completes in 2030 – https://example.com").is_none());
    }

    #[test]
    fn hyphen_is_not_a_delimiter() {
        let event = parse_line("Library opens 2027 - https://example.com").unwrap();
        assert_eq!(event.event, "Library opens 2027 - https://example.com");
        assert_eq!(event.link, "");
    }

    #[test]
    fn more_than_one_en_dash_keeps_whole_line_as_text() {
        let event = parse_line("Park – phase two 2028 – https://example.com").unwrap();
        assert_eq!(event.event, "Park – phase two 2028 – https://example.com");
        assert_eq!(event.link, "");
        assert_eq!(event.timeline, 2028);
    }

    #[test]
    fn year_in_link_only_is_not_enough() {
        assert!(parse_line("New clinic – https://example.com/2026/clinic").is_none());
    }

    #[test]
    fn first_qualifying_year_wins() {
        let event = parse_line("Scheme runs 2025 to 2029 – https://example.com").unwrap();
        assert_eq!(event.timeline, 2025);
    }

    #[test]
    fn multi_line_reply_skips_blank_and_yearless_lines() {
        let reply = "\
New hospital opens in 2026 – https://example.gov.uk/plan

General infrastructure upgrade – https://example.com
Stamp duty threshold change in 2025 – https://gov.uk/sdlt
";
        let extraction = parse_response(reply);
        assert_eq!(extraction.events.len(), 2);
        assert_eq!(extraction.events[0].timeline, 2026);
        assert_eq!(extraction.events[1].timeline, 2025);
        assert!((extraction.confidence_score - EXTRACTION_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn reply_with_no_qualifying_lines_keeps_fixed_confidence() {
        let extraction = parse_response("Nothing concrete is planned – https://example.com");
        assert!(extraction.events.is_empty());
        assert!((extraction.confidence_score - EXTRACTION_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        let extraction = parse_response("Tram line opens 2027 – https://example.com\r\n");
        assert_eq!(extraction.events[0].link, "https://example.com");
    }
}
