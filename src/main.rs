//! CLI entry point for the WienMobil history tool.
//!
//! `fetch` appends one snapshot of every station to the history log and is
//! meant to be run by an external scheduler. `visualize` turns the whole log
//! into a chart of total available bikes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use wienmobil_history::{
    analyzers::{types::ChartOutcome, visualize::visualize},
    config::Settings,
    fetch::BasicClient,
    logging,
    pipeline::run_fetch,
    record::timestamp,
};

#[derive(Parser)]
#[command(name = "wienmobil_history")]
#[command(about = "Collect and chart WienMobil bike-share availability", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch station status and information and append one record per station
    Fetch {
        /// History log to append to (defaults to HISTORY_PATH or data/history.jsonl)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Render total available bikes over time from the history log
    Visualize {
        /// History log to read (defaults to HISTORY_PATH or data/history.jsonl)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// PNG to write (defaults to CHART_PATH or site/chart.png)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| logging::DEFAULT_LOG_FILE.to_string());
    let _log_guard = logging::init(&log_file_path)?;

    let cli = Cli::parse();

    // Every failure below is reported and swallowed; the process exits normally.
    if let Err(e) = run(cli.command).await {
        let network = e
            .downcast_ref::<wienmobil_history::Error>()
            .is_some_and(wienmobil_history::Error::is_network);
        error!(error = %e, network, "Run failed");
        if network {
            println!("Network/API error: {e}");
        } else {
            println!("Unexpected error: {e}");
        }
    }

    Ok(())
}

async fn run(command: Commands) -> Result<()> {
    let mut settings = Settings::from_env()?;

    match command {
        Commands::Fetch { output } => {
            if let Some(path) = output {
                settings.history_path = path;
            }

            let client = BasicClient::with_timeout(settings.http_timeout)
                .map_err(wienmobil_history::Error::Client)?;
            let outcome = run_fetch(&client, &settings).await?;

            if outcome.is_empty() {
                info!("No stations returned by either feed");
                println!("No stations found; nothing to append.");
            } else {
                println!(
                    "Appended {} station records at {} to {}",
                    outcome.appended,
                    timestamp::format(&outcome.timestamp),
                    outcome.path.display()
                );
            }
        }
        Commands::Visualize { input, output } => {
            let history = input.unwrap_or(settings.history_path);
            let chart = output.unwrap_or(settings.chart_path);

            match visualize(&history, &chart)? {
                ChartOutcome::Rendered { path, .. } => {
                    println!("Chart saved to {}", path.display());
                }
                ChartOutcome::NoData => {
                    println!("No data file found. Run fetch first.");
                }
                ChartOutcome::NothingToVisualize => {
                    println!("No data to visualize.");
                }
            }
        }
    }

    Ok(())
}
