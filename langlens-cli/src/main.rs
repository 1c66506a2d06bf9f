// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Langlens CLI - AI-powered language detection and queue monitoring.
//!
//! # Examples
//!
//! ```bash
//! # Detect languages in a piece of text
//! langlens detect "Bonjour tout le monde, ceci est un test." --api-key sk-...
//!
//! # Read the text from a file, key from the environment
//! export OPENAI_API_KEY=sk-...
//! langlens detect --file essay.txt
//!
//! # One-shot queue status
//! langlens status
//!
//! # Poll the queue every 5 seconds
//! langlens watch --interval 5
//!
//! # JSON output
//! langlens status --format json --pretty
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{detect, status, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// Langlens CLI - language detection and queue monitoring.
#[derive(Parser)]
#[command(name = "langlens")]
#[command(about = "AI-powered language detection and queue monitoring")]
#[command(long_about = r#"
Langlens detects the languages in a piece of text via the OpenAI API and
monitors a remote job queue.

The API key is supplied per invocation (--api-key or OPENAI_API_KEY) and is
held only for the duration of the run; it is never written to disk.

Examples:
  langlens detect "Hello world, this is English text."
  langlens detect --file essay.txt --model gpt-4.1-nano
  langlens status                # Queue snapshot
  langlens watch --interval 5    # Poll the queue
  langlens status --format json  # JSON output
"#)]
#[command(version)]
#[command(author = "Langlens Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'status' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect the languages in a piece of text.
    #[command(visible_alias = "d")]
    Detect(detect::DetectArgs),

    /// Fetch the current queue statistics (default if no command specified).
    #[command(visible_alias = "s")]
    Status(status::StatusArgs),

    /// Poll queue statistics on a fixed interval.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Request rejected before any network call.
    ValidationError = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

/// Filter directives for --verbose: debug from every workspace crate,
/// info from everything else.
const VERBOSE_LOG_DIRECTIVES: &str =
    "langlens_core=debug,langlens_fetch=debug,langlens_store=debug,langlens_cli=debug,info";

/// Default filter directives: warnings from the workspace crates only.
const DEFAULT_LOG_DIRECTIVES: &str =
    "langlens_core=warn,langlens_fetch=warn,langlens_store=warn,langlens_cli=warn";

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_DIRECTIVES)
    } else {
        EnvFilter::new(DEFAULT_LOG_DIRECTIVES)
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Detect(args)) => detect::run(args, &cli).await,
        Some(Commands::Status(args)) => status::run(args, &cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        None => {
            // Default to the status command
            status::run(&status::StatusArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        let code = if e.downcast_ref::<langlens_core::ValidationError>().is_some() {
            ExitCode::ValidationError
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives_parse() {
        assert!(EnvFilter::try_new(VERBOSE_LOG_DIRECTIVES).is_ok());
        assert!(EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES).is_ok());
    }

    #[test]
    fn test_log_directives_name_every_workspace_crate() {
        // Directives match per module-path segment, so the targets must use
        // the crates' underscored names; a bare "langlens" prefix would
        // match nothing in this workspace.
        for crate_name in [
            "langlens_core",
            "langlens_fetch",
            "langlens_store",
            "langlens_cli",
        ] {
            assert!(VERBOSE_LOG_DIRECTIVES.contains(&format!("{crate_name}=debug")));
            assert!(DEFAULT_LOG_DIRECTIVES.contains(&format!("{crate_name}=warn")));
        }
    }
}
