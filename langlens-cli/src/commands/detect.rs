//! Detect command - run the language-detection flow.

use anyhow::{Context, Result};
use clap::Args;
use langlens_core::{count_tokens, estimate_cost, validate_request, TokenUsage};
use langlens_fetch::DetectionClient;
use langlens_store::{Config, SessionStore};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::output::{DetectOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Text to analyze. Reads stdin when neither TEXT nor --file is given.
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// OpenAI API key. Falls back to the configured environment variable.
    #[arg(long, short = 'k')]
    pub api_key: Option<String>,

    /// Model key for cost display.
    #[arg(long, short)]
    pub model: Option<String>,
}

/// Runs the detect command.
pub async fn run(args: &DetectArgs, cli: &Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let model = args.model.clone().unwrap_or(config.detection.model);

    let text = read_text(args)?;

    // The key lives in the session store only for the duration of this run.
    // Validation still sees the raw candidate when the store refused an
    // ill-formed key, so the precise failure is reported.
    let candidate = resolve_credential(
        args.api_key.clone(),
        std::env::var(&config.detection.api_key_env).ok(),
    );
    let session = SessionStore::new();
    let _ = session.set_api_key(&candidate);
    let credential = session.api_key().unwrap_or(candidate);

    let validated = validate_request(&text, &credential)?;

    let estimated_input = count_tokens(validated.text, &model);
    info!(
        text_len = validated.text.len(),
        estimated_input_tokens = estimated_input,
        "Running language detection"
    );

    let client = DetectionClient::new()?;
    let detection = client.detect(validated.text, validated.credential).await?;

    // Prefer the provider's reported usage; estimate locally otherwise.
    let usage = detection.usage.clone().unwrap_or_else(|| {
        debug!("No usage block in response, using local token estimate");
        TokenUsage::new(estimated_input, 0)
    });
    let cost = estimate_cost(&usage, &model);

    match cli.format {
        OutputFormat::Json => {
            let output = DetectOutput::success(&detection.result, &usage, &cost);
            println!("{}", JsonFormatter::render(&output, cli.pretty)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            print!(
                "{}",
                formatter.format_detection(&detection.result, &usage, &cost, &model)
            );
        }
    }

    Ok(())
}

/// Resolves the text to analyze from argument, file, or stdin.
fn read_text(args: &DetectArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

/// Picks the credential candidate: the --api-key flag wins over the
/// configured environment variable. Returns an empty string when neither
/// is supplied, which validation then rejects as a missing key.
fn resolve_credential(flag: Option<String>, env_value: Option<String>) -> String {
    flag.or(env_value).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
