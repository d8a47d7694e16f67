//! Minimal client for the Gemini `generateContent` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Text-generation client bound to one model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, user_agent: &str) -> Result<Self, ExtractError> {
        Self::with_base_url(api_key, model, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!(
                "{}/v1beta/models/{model}:generateContent",
                base_url.trim_end_matches('/')
            ),
        })
    }

    /// Sends `prompt` and returns the first candidate's text.
    ///
    /// All text parts of the first candidate are concatenated.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Http`] on network failure or non-2xx status.
    /// - [`ExtractError::Deserialize`] if the body has an unexpected shape.
    /// - [`ExtractError::Api`] if the body carries an `error` object.
    /// - [`ExtractError::EmptyResponse`] if no text came back.
    pub async fn generate(&self, prompt: &str) -> Result<String, ExtractError> {
        let request = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ExtractError::Deserialize {
                context: "generateContent".to_string(),
                source: e,
            })?;

        if let Some(error) = parsed.error {
            return Err(ExtractError::Api(error.message));
        }

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ExtractError::EmptyResponse);
        }
        Ok(text)
    }
}
