//! Status command - one-shot queue statistics fetch.

use anyhow::{Context, Result};
use clap::Args;
use langlens_fetch::StatsClient;
use langlens_store::Config;
use tracing::info;

use crate::output::{JsonFormatter, StatsOutput, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the status command.
#[derive(Args, Default)]
pub struct StatusArgs {
    /// Override the queue-stats endpoint URL.
    #[arg(long)]
    pub url: Option<String>,
}

/// Runs the status command.
pub async fn run(args: &StatusArgs, cli: &Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let url = args.url.clone().unwrap_or(config.stats.url);

    info!(url = %url, "Fetching queue stats");

    let client = StatsClient::new()?;
    let snapshot = client.fetch(&url).await.context("Failed to fetch stats")?;

    match cli.format {
        OutputFormat::Json => {
            let output = StatsOutput::from_snapshot(&snapshot);
            println!("{}", JsonFormatter::render(&output, cli.pretty)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            print!("{}", formatter.format_stats(&snapshot));
        }
    }

    Ok(())
}
