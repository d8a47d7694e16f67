use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("search client error: {0}")]
    Search(#[from] pricecast_search::SearchError),

    #[error("extractor error: {0}")]
    Extract(#[from] pricecast_extractor::ExtractError),

    #[error("postcode lookup error: {0}")]
    Lookup(#[from] pricecast_postcodes::LookupError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document store error: {0}")]
    Db(#[from] pricecast_db::DbError),
}
