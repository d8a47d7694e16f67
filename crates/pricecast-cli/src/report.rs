//! Read-only queries over stored postcode reports.

use chrono::{DateTime, Utc};
use clap::Subcommand;

/// Sub-commands available under `report`.
#[derive(Debug, Subcommand)]
pub enum ReportCommands {
    /// Print the stored document for one postcode
    Show {
        /// Postcode exactly as it was run (e.g., "SW3 4AA")
        postcode: String,
    },
    /// List the most recently updated postcodes
    List {
        /// Maximum number of postcodes to show
        #[arg(long, default_value = "20")]
        limit: i64,
    },
}

fn fmt_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Dispatch a `report` sub-command.
///
/// # Errors
///
/// Returns an error if the database query fails, the postcode has no stored
/// report, or the stored document no longer matches the aggregate shape.
pub(crate) async fn run_report_command(
    pool: &sqlx::PgPool,
    command: ReportCommands,
) -> anyhow::Result<()> {
    match command {
        ReportCommands::Show { postcode } => run_report_show(pool, &postcode).await,
        ReportCommands::List { limit } => run_report_list(pool, limit).await,
    }
}

async fn run_report_show(pool: &sqlx::PgPool, postcode: &str) -> anyhow::Result<()> {
    let Some(row) = pricecast_db::get_report(pool, postcode).await? else {
        anyhow::bail!("no report stored for postcode '{postcode}'; run `pricecast run` first");
    };

    let aggregate = row.aggregate()?;
    let rendered = pricecast_pipeline::render_artifact(&aggregate)?;
    println!("{}", String::from_utf8_lossy(&rendered));
    Ok(())
}

async fn run_report_list(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let rows = pricecast_db::list_reports(pool, limit).await?;

    if rows.is_empty() {
        println!("no reports stored; run `pricecast run` first");
        return Ok(());
    }

    println!("{:<12}{:<10}UPDATED", "POSTCODE", "CALLS");
    for row in &rows {
        println!(
            "{:<12}{:<10}{}",
            row.postcode,
            row.search_count,
            fmt_timestamp(row.updated_at)
        );
    }

    Ok(())
}
