use thiserror::Error;

/// Errors returned by the web-search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but not an object.
    #[error("unexpected search response shape for {context}: expected a JSON object")]
    UnexpectedShape { context: String },
}
