use pricecast_core::SearchResult;

use crate::client::GeminiClient;
use crate::error::ExtractError;
use crate::parse::{parse_response, Extraction};
use crate::prompt::build_prompt;

/// Prompt → model → parser, for one factor at a time.
pub struct EventExtractor {
    client: GeminiClient,
}

impl EventExtractor {
    #[must_use]
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Ask the model for dated events relevant to `factor` and parse its reply.
    ///
    /// # Errors
    ///
    /// Propagates any [`ExtractError`] from the model call. Parsing itself
    /// never fails.
    pub async fn extract(
        &self,
        factor: &str,
        search_result: &SearchResult,
    ) -> Result<Extraction, ExtractError> {
        let prompt = build_prompt(factor, search_result);
        let reply = self.client.generate(&prompt).await?;
        let extraction = parse_response(&reply);
        tracing::debug!(
            factor,
            events = extraction.events.len(),
            "model reply parsed"
        );
        Ok(extraction)
    }
}
