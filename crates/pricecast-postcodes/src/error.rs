use thiserror::Error;

/// Errors returned by the postcode-lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The lookup succeeded but returned no `result` object.
    #[error("no result for postcode {postcode}")]
    NoResult { postcode: String },
}
