//! HTTP client for the Serper web-search API.
//!
//! Wraps `reqwest` with the API-key header and a result-count switch for test
//! mode. Failures are returned as [`SearchError`]; the caller decides whether
//! a failed search ends anything.

use pricecast_core::SearchResult;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::SearchError;

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Results requested per query in normal operation.
pub const NORMAL_RESULT_COUNT: u32 = 10;

/// Results requested per query in test mode.
pub const TEST_MODE_RESULT_COUNT: u32 = 1;

/// Compose the search query for a factor and postcode.
#[must_use]
pub fn build_query(factor: &str, postcode: &str) -> String {
    format!("{factor} impact on property price in {postcode}")
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: u32,
}

/// Client for the Serper `/search` endpoint.
pub struct SearchClient {
    client: Client,
    api_key: String,
    endpoint: String,
    test_mode: bool,
}

impl SearchClient {
    /// Creates a client pointed at the production Serper API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, user_agent: &str, test_mode: bool) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, user_agent, test_mode, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        user_agent: &str,
        test_mode: bool,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{}/search", base_url.trim_end_matches('/')),
            test_mode,
        })
    }

    /// Number of results requested per query.
    #[must_use]
    pub fn result_count(&self) -> u32 {
        if self.test_mode {
            TEST_MODE_RESULT_COUNT
        } else {
            NORMAL_RESULT_COUNT
        }
    }

    /// Runs a single search and returns the raw JSON object.
    ///
    /// The payload is not validated beyond being a JSON object; it is handed
    /// to the extractor as-is.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx status.
    /// - [`SearchError::Deserialize`] if the body is not JSON.
    /// - [`SearchError::UnexpectedShape`] if the body is JSON but not an object.
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let request = SearchRequest {
            q: query,
            num: self.result_count(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let value: Value = serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: format!("search(q={query})"),
            source: e,
        })?;

        match value {
            Value::Object(map) => {
                tracing::debug!(query, keys = map.len(), "search completed");
                Ok(map)
            }
            _ => Err(SearchError::UnexpectedShape {
                context: format!("search(q={query})"),
            }),
        }
    }
}
