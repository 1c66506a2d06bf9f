//! Text output formatting with confidence bars and colors.

use chrono::Local;
use langlens_core::models::format_token_count;
use langlens_core::{CostEstimate, DetectionResult, TokenUsage};
use langlens_fetch::StatsSnapshot;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

// Confidence bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar_width: 10,
        }
    }

    // ------------------------------------------------------------------
    // Detection
    // ------------------------------------------------------------------

    /// Formats a detection result with its token usage and cost.
    pub fn format_detection(
        &self,
        result: &DetectionResult,
        usage: &TokenUsage,
        cost: &CostEstimate,
        model: &str,
    ) -> String {
        let mut lines = Vec::new();

        let multilingual = if result.is_multilingual {
            " (multilingual)"
        } else {
            ""
        };
        lines.push(format!(
            "Primary language: {}{}",
            self.bold(&result.primary_language),
            multilingual
        ));
        lines.push(String::new());

        for finding in &result.languages {
            let bar = self.confidence_bar(finding.confidence);
            lines.push(format!(
                "  {:<12} {} {:>5.1}%  {}",
                format!("{} ({})", finding.language, finding.language_code),
                bar,
                finding.confidence_percent(),
                self.dim(&truncate(&finding.sample_text, 40))
            ));
        }

        lines.push(String::new());
        lines.push(self.bold("Token Usage & Cost"));
        lines.push(format!(
            "  Input:  {:>8}  {}",
            format_token_count(usage.input_tokens),
            CostEstimate::format_amount(cost.input_cost)
        ));
        if let (Some(cache_tokens), Some(cache_cost)) =
            (usage.cache_input_tokens, cost.cache_input_cost)
        {
            lines.push(format!(
                "  Cache:  {:>8}  {}",
                format_token_count(cache_tokens),
                CostEstimate::format_amount(cache_cost)
            ));
        }
        lines.push(format!(
            "  Output: {:>8}  {}",
            format_token_count(usage.output_tokens),
            CostEstimate::format_amount(cost.output_cost)
        ));
        lines.push(format!(
            "  Total:  {:>8}  {} {} {}",
            format_token_count(usage.total_tokens),
            self.bold(&CostEstimate::format_amount(cost.total_cost)),
            cost.currency,
            self.dim(&format!("({model})"))
        ));

        lines.join("\n") + "\n"
    }

    // ------------------------------------------------------------------
    // Stats
    // ------------------------------------------------------------------

    /// Formats a queue-stats snapshot.
    pub fn format_stats(&self, snapshot: &StatsSnapshot) -> String {
        let stats = snapshot.stats;
        let mut lines = Vec::new();

        lines.push(self.bold("Queue Status"));
        lines.push(format!(
            "  {:<10} {}",
            "Active:",
            self.color(BLUE, &stats.active.to_string())
        ));
        lines.push(format!(
            "  {:<10} {}",
            "Waiting:",
            self.color(YELLOW, &stats.waiting.to_string())
        ));
        lines.push(format!("  {:<10} {}", "Delayed:", stats.delayed));
        lines.push(format!(
            "  {:<10} {}",
            "Completed:",
            self.color(GREEN, &stats.completed.to_string())
        ));
        lines.push(format!(
            "  {:<10} {}",
            "Failed:",
            self.color(RED, &stats.failed.to_string())
        ));
        lines.push(String::new());

        lines.push(format!(
            "  Total: {}   Success: {:.1}%   Errors: {:.1}%   Pending: {}",
            stats.total(),
            stats.success_rate(),
            stats.error_rate(),
            stats.pending()
        ));
        lines.push(self.dim(&format!(
            "  Last updated: {}",
            snapshot
                .fetched_at
                .with_timezone(&Local)
                .format("%H:%M:%S")
        )));

        lines.join("\n") + "\n"
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    pub(crate) fn confidence_bar(&self, confidence: f64) -> String {
        let clamped = confidence.clamp(0.0, 1.0);
        let filled = (clamped * self.bar_width as f64).round() as usize;
        let bar: String = std::iter::repeat(BAR_FULL)
            .take(filled)
            .chain(std::iter::repeat(BAR_EMPTY).take(self.bar_width - filled))
            .collect();

        let color = if clamped >= 0.8 {
            GREEN
        } else if clamped >= 0.5 {
            CYAN
        } else {
            YELLOW
        };
        self.color(color, &bar)
    }

    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.color(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.color(DIM, text)
    }
}

/// Truncates a string for display, appending an ellipsis when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}
