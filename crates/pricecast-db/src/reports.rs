//! Database operations for the `price_factor_reports` table.

use chrono::{DateTime, Utc};
use pricecast_core::AggregateResult;
use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A full row from `price_factor_reports`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRow {
    pub postcode: String,
    pub document: Value,
    pub search_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportRow {
    /// Decode the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the document no longer matches
    /// [`AggregateResult`].
    pub fn aggregate(&self) -> Result<AggregateResult, serde_json::Error> {
        serde_json::from_value(self.document.clone())
    }
}

/// Listing view without the document body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportSummaryRow {
    pub postcode: String,
    pub search_count: i32,
    pub updated_at: DateTime<Utc>,
}

/// Whether an upsert created the postcode's document or replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert or fully replace the document for `aggregate.postcode`.
///
/// # Errors
///
/// Returns [`DbError::Json`] if the aggregate cannot be serialized, or
/// [`DbError::Sqlx`] if the statement fails.
pub async fn upsert_report(
    pool: &PgPool,
    aggregate: &AggregateResult,
) -> Result<UpsertOutcome, DbError> {
    let document = serde_json::to_value(aggregate)?;
    let search_count = i32::try_from(aggregate.search_count).unwrap_or(i32::MAX);

    let is_new: bool = sqlx::query_scalar(
        "INSERT INTO price_factor_reports (postcode, document, search_count) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (postcode) DO UPDATE SET \
             document     = EXCLUDED.document, \
             search_count = EXCLUDED.search_count, \
             updated_at   = NOW() \
         RETURNING (xmax = 0) AS is_new",
    )
    .bind(&aggregate.postcode)
    .bind(document)
    .bind(search_count)
    .fetch_one(pool)
    .await?;

    Ok(if is_new {
        UpsertOutcome::Inserted
    } else {
        UpsertOutcome::Updated
    })
}

/// Fetch the stored report for a postcode, or `None` if it was never run.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_report(pool: &PgPool, postcode: &str) -> Result<Option<ReportRow>, DbError> {
    let row = sqlx::query_as::<_, ReportRow>(
        "SELECT postcode, document, search_count, created_at, updated_at \
         FROM price_factor_reports \
         WHERE postcode = $1",
    )
    .bind(postcode)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// List stored reports, most recently updated first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_reports(pool: &PgPool, limit: i64) -> Result<Vec<ReportSummaryRow>, DbError> {
    let rows = sqlx::query_as::<_, ReportSummaryRow>(
        "SELECT postcode, search_count, updated_at \
         FROM price_factor_reports \
         ORDER BY updated_at DESC, postcode \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
