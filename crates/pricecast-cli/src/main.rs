mod report;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricecast_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::report::ReportCommands;

/// Postcode used when `run` is given none.
const DEFAULT_POSTCODE: &str = "SW3";

#[derive(Debug, Parser)]
#[command(name = "pricecast")]
#[command(about = "Future property price factors for UK postcodes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full price-factor pipeline for one postcode
    Run {
        /// UK postcode or outcode to analyse
        #[arg(default_value = DEFAULT_POSTCODE)]
        postcode: String,

        /// Request one search result per factor and only two factors per category
        #[arg(long)]
        test_mode: bool,

        /// Directory for the JSON artifact (overrides `PRICECAST_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Database operations
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Read stored reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Verify the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("pricecast: nothing to do (try `pricecast run --help`)");
        return Ok(ExitCode::SUCCESS);
    };

    let mut config = pricecast_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match command {
        Commands::Run {
            postcode,
            test_mode,
            output_dir,
        } => {
            config.test_mode |= test_mode;
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            Ok(run::run_pipeline(&config, &postcode).await)
        }
        Commands::Db { command } => {
            let pool = connect(&config).await?;
            match command {
                DbCommands::Ping => {
                    pricecast_db::ping(&pool).await?;
                    println!("database ok");
                }
                DbCommands::Migrate => {
                    pricecast_db::run_migrations(&pool).await?;
                    println!("migrations up to date");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Report { command } => {
            let pool = connect(&config).await?;
            report::run_report_command(&pool, command).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn connect(config: &AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = pricecast_db::PoolConfig::from_app_config(config);
    Ok(pricecast_db::connect_pool(&config.database_url, pool_config).await?)
}
