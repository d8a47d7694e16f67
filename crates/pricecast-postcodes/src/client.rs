//! HTTP client for the postcodes.io lookup API.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;

const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Administrative areas covering a postcode. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostcodeAreas {
    pub admin_ward: Option<String>,
    pub admin_district: Option<String>,
    pub parish: Option<String>,
}

impl PostcodeAreas {
    /// Case-insensitive match of `place` against ward, district, or parish.
    #[must_use]
    pub fn matches(&self, place: &str) -> bool {
        let place = place.to_lowercase();
        [&self.admin_ward, &self.admin_district, &self.parish]
            .into_iter()
            .flatten()
            .any(|area| !area.is_empty() && area.to_lowercase() == place)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    result: Option<PostcodeAreas>,
}

/// Client for `GET /postcodes/{postcode}`.
pub struct PostcodesClient {
    client: Client,
    base_url: String,
}

impl PostcodesClient {
    /// Creates a client pointed at the public postcodes.io API.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, LookupError> {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn lookup_url(&self, postcode: &str) -> String {
        let encoded = utf8_percent_encode(postcode, NON_ALPHANUMERIC);
        format!("{}/postcodes/{encoded}", self.base_url)
    }

    /// Fetches the administrative areas for `postcode`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Http`] on network failure or non-2xx status (including 404
    ///   for unknown or partial postcodes).
    /// - [`LookupError::Deserialize`] if the body has an unexpected shape.
    /// - [`LookupError::NoResult`] if `result` is null.
    pub async fn lookup(&self, postcode: &str) -> Result<PostcodeAreas, LookupError> {
        let url = self.lookup_url(postcode);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let parsed: LookupResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: url.clone(),
                source: e,
            })?;

        parsed.result.ok_or_else(|| LookupError::NoResult {
            postcode: postcode.to_string(),
        })
    }
}
