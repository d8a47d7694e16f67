//! The `run` command: one postcode through the full pipeline.

use std::process::ExitCode;

use pricecast_core::AppConfig;
use pricecast_db::PoolConfig;
use pricecast_pipeline::{log_working_directory, run_postcode, Pipeline};

/// Run the pipeline for `postcode` and persist the aggregate.
///
/// The pool is built lazily, so the database is first contacted when the
/// aggregate is stored. Every failure, including setup, is logged together
/// with the working directory and maps to a failing exit code.
pub(crate) async fn run_pipeline(config: &AppConfig, postcode: &str) -> ExitCode {
    let (pipeline, pool) = match build(config) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!(postcode, error = %e, "run aborted");
            log_working_directory();
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        postcode,
        env = %config.env,
        test_mode = config.test_mode,
        output_dir = %config.output_dir.display(),
        "starting price factor run"
    );

    match run_postcode(&pipeline, &pool, &config.output_dir, postcode).await {
        Ok(outcome) => {
            println!("{}", outcome.artifact_path.display());
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

fn build(config: &AppConfig) -> anyhow::Result<(Pipeline, sqlx::PgPool)> {
    let pipeline = Pipeline::from_app_config(config)?;
    let pool =
        pricecast_db::connect_pool_lazy(&config.database_url, PoolConfig::from_app_config(config))?;
    Ok((pipeline, pool))
}
