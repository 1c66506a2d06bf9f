//! Watch command - poll queue statistics on a fixed interval.

use anyhow::Result;
use clap::Args;
use langlens_fetch::{PollUpdate, StatsClient, StatsPoller};
use langlens_store::Config;
use std::io::{stdout, Write};
use tokio::time::Duration;
use tracing::info;

use crate::output::{JsonFormatter, StatsOutput, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds.
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Override the queue-stats endpoint URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Exit after this many successful updates (runs until Ctrl-C by default).
    #[arg(long, short)]
    pub count: Option<u64>,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let url = args.url.clone().unwrap_or(config.stats.url);
    let interval = args.interval.unwrap_or(config.stats.refresh_interval).max(1);

    info!(url = %url, interval = interval, "Starting watch mode");

    let poller = StatsPoller::new(StatsClient::new()?, url, Duration::from_secs(interval));
    let mut handle = poller.spawn();

    let formatter = TextFormatter::new(!cli.no_color);
    let mut updates: u64 = 0;

    loop {
        let update = tokio::select! {
            update = handle.next() => update,
            _ = tokio::signal::ctrl_c() => {
                // Stop scheduling; an in-flight fetch is left to resolve
                // and its update is discarded.
                handle.stop();
                break;
            }
        };

        let Some(update) = update else { break };
        if counts_toward_limit(&update) {
            updates += 1;
        }

        match &update.result {
            Ok(snapshot) => match cli.format {
                OutputFormat::Json => {
                    let output = StatsOutput::from_snapshot(snapshot);
                    println!("{}", JsonFormatter::render(&output, cli.pretty)?);
                }
                OutputFormat::Text => {
                    // Clear screen between redraws
                    print!("\x1b[2J\x1b[H");
                    print!("{}", formatter.format_stats(snapshot));
                    println!("\nRefreshing every {interval}s (Ctrl-C to stop)");
                    stdout().flush()?;
                }
            },
            Err(e) => {
                // Existing displayed state stays; only the error is shown
                eprintln!("Error: {e}");
            }
        }

        if args.count.is_some_and(|max| updates >= max) {
            handle.stop();
            break;
        }
    }

    Ok(())
}

/// Whether an update counts toward --count. Failed fetches leave the
/// display untouched and do not count; only displayed snapshots do.
fn counts_toward_limit(update: &PollUpdate) -> bool {
    update.result.is_ok()
}

// ============================================================================
// Tests
// ============================================================================
