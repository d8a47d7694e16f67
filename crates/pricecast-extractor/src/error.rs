use thiserror::Error;

/// Errors returned while invoking the generative model.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API answered with an `error` object.
    #[error("model API error: {0}")]
    Api(String),

    /// The body did not match the expected response shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No candidate carried any text.
    #[error("model returned no text")]
    EmptyResponse,
}
