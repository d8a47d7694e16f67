use pricecast_core::SearchResult;

/// Build the extraction instruction for one factor.
///
/// The raw search payload is embedded as compact JSON. An empty payload still
/// produces a valid prompt; the model is expected to answer `skip`.
#[must_use]
pub fn build_prompt(factor: &str, search_result: &SearchResult) -> String {
    let results = serde_json::to_string(search_result).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are analyzing real estate price factors in UK.

Factor: {factor}
Search Results: {results}

Task:
- Only extract concrete and actual future events only happening inside UK(United Kingdom), based on its postcode with real sources or government/local authority data.
- Only extract concrete future events happening between 2025 and 2029.
- Each event must be in one line: \"<Event> in <Year> – <Link>\".
- If no valid event in this range, return \"skip\".
- Keep output short, factual, and linked.
"
    )
}
