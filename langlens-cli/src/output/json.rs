//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use langlens_core::{CostEstimate, DetectionResult, TokenUsage};
use langlens_fetch::StatsSnapshot;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for a detection run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectOutput {
    pub success: bool,
    pub data: DetectionResult,
    pub token_usage: TokenUsage,
    pub cost_estimation: CostEstimate,
}

impl DetectOutput {
    /// Builds the success envelope for a completed detection.
    pub fn success(result: &DetectionResult, usage: &TokenUsage, cost: &CostEstimate) -> Self {
        Self {
            success: true,
            data: result.clone(),
            token_usage: usage.clone(),
            cost_estimation: cost.clone(),
        }
    }
}

/// JSON output for a stats snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    pub active: u64,
    pub waiting: u64,
    pub delayed: u64,
    pub completed: u64,
    pub failed: u64,
    pub total_jobs: u64,
    pub success_rate: f64,
    pub error_rate: f64,
    pub pending: u64,
    pub fetched_at: DateTime<Utc>,
}

impl StatsOutput {
    /// Builds the output for a fetched snapshot, with derived values.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let stats = snapshot.stats;
        Self {
            active: stats.active,
            waiting: stats.waiting,
            delayed: stats.delayed,
            completed: stats.completed,
            failed: stats.failed,
            total_jobs: stats.total(),
            success_rate: stats.success_rate(),
            error_rate: stats.error_rate(),
            pending: stats.pending(),
            fetched_at: snapshot.fetched_at,
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Renders a value as JSON, optionally pretty-printed.
    pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
