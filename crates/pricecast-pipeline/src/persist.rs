use std::path::{Path, PathBuf};

use pricecast_core::AggregateResult;
use pricecast_db::{run_migrations, upsert_report, DbError, UpsertOutcome};
use sqlx::PgPool;

use crate::artifact::write_artifact;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;

/// Where a run's aggregate ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    pub artifact_path: PathBuf,
    pub upsert: UpsertOutcome,
}

/// Write the JSON artifact, then upsert the document keyed by postcode.
///
/// The store is first touched after the file is on disk, so an unreachable
/// database still leaves the artifact behind. Pending migrations are applied
/// before the upsert.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] or [`PipelineError::Json`] if the file
/// cannot be written, or [`PipelineError::Db`] if migrating or the upsert
/// fails.
pub async fn persist(
    pool: &PgPool,
    output_dir: &Path,
    aggregate: &AggregateResult,
) -> Result<PersistOutcome, PipelineError> {
    let artifact_path = write_artifact(output_dir, aggregate).await?;
    tracing::info!(path = %artifact_path.display(), "artifact saved");

    run_migrations(pool).await.map_err(DbError::from)?;
    let upsert = upsert_report(pool, aggregate).await?;
    match upsert {
        UpsertOutcome::Inserted => {
            tracing::info!(postcode = %aggregate.postcode, "inserted new postcode document");
        }
        UpsertOutcome::Updated => {
            tracing::info!(postcode = %aggregate.postcode, "updated existing postcode document");
        }
    }

    Ok(PersistOutcome {
        artifact_path,
        upsert,
    })
}

/// Run the pipeline for one postcode and persist the result.
///
/// Any error aborts the run before or during persistence and is logged here.
/// The working directory is reported whether the run succeeded or not.
///
/// # Errors
///
/// Returns the first [`PipelineError`] raised by the run or by persistence.
pub async fn run_postcode(
    pipeline: &Pipeline,
    pool: &PgPool,
    output_dir: &Path,
    postcode: &str,
) -> Result<PersistOutcome, PipelineError> {
    let result = async {
        let aggregate = pipeline.run(postcode).await?;
        persist(pool, output_dir, &aggregate).await
    }
    .await;

    if let Err(e) = &result {
        tracing::error!(postcode, error = %e, "run aborted");
    }
    log_working_directory();

    result
}

/// Report the process working directory at `info`.
pub fn log_working_directory() {
    match std::env::current_dir() {
        Ok(cwd) => tracing::info!(cwd = %cwd.display(), "current working directory"),
        Err(e) => tracing::warn!(error = %e, "current working directory unavailable"),
    }
}
