//! JSON file artifact written once per run.

use std::path::{Path, PathBuf};

use pricecast_core::AggregateResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::PipelineError;

const ARTIFACT_SUFFIX: &str = "_price_factors.json";

/// `SW3 4AA` → `SW3_4AA_price_factors.json`.
#[must_use]
pub fn artifact_file_name(postcode: &str) -> String {
    format!("{}{ARTIFACT_SUFFIX}", postcode.replace(' ', "_"))
}

/// Render the aggregate with a four-space indent. Non-ASCII text is kept as is.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn render_artifact(aggregate: &AggregateResult) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    aggregate.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the aggregate into `dir` and return the file path.
///
/// # Errors
///
/// Returns [`PipelineError::Json`] if rendering fails or
/// [`PipelineError::Io`] if the file cannot be written.
pub async fn write_artifact(
    dir: &Path,
    aggregate: &AggregateResult,
) -> Result<PathBuf, PipelineError> {
    let path = dir.join(artifact_file_name(&aggregate.postcode));
    let bytes = render_artifact(aggregate)?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| PipelineError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
