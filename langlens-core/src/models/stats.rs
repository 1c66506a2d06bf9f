//! Queue statistics types.

use serde::{Deserialize, Serialize};

/// Snapshot of remote job-queue counters.
///
/// An external, authoritative snapshot fetched verbatim from the stats
/// endpoint. The only local derivations are the sums and rates below,
/// computed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Jobs currently processing.
    pub active: u64,
    /// Jobs waiting in the queue.
    pub waiting: u64,
    /// Jobs scheduled for later.
    pub delayed: u64,
    /// Jobs that finished successfully.
    pub completed: u64,
    /// Jobs that encountered errors.
    pub failed: u64,
}

impl QueueStats {
    /// Total jobs across all five counters.
    pub fn total(&self) -> u64 {
        self.active + self.waiting + self.delayed + self.completed + self.failed
    }

    /// Completed jobs as a percentage of the total. 0 when the total is 0.
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.completed as f64 / total as f64) * 100.0
    }

    /// Failed jobs as a percentage of the total. 0 when the total is 0.
    pub fn error_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.failed as f64 / total as f64) * 100.0
    }

    /// Jobs not yet started (waiting + delayed).
    pub fn pending(&self) -> u64 {
        self.waiting + self.delayed
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_stats_derived_values() {
        let stats = QueueStats {
            active: 2,
            waiting: 5,
            delayed: 0,
            completed: 100,
            failed: 3,
        };

        assert_eq!(stats.total(), 110);
        assert_eq!(stats.pending(), 5);
        assert_eq!(format!("{:.1}", stats.success_rate()), "90.9");
        assert_eq!(format!("{:.1}", stats.error_rate()), "2.7");
    }

    #[test]
    fn test_queue_stats_empty() {
        let stats = QueueStats {
            active: 0,
            waiting: 0,
            delayed: 0,
            completed: 0,
            failed: 0,
        };

        assert_eq!(stats.total(), 0);
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.error_rate(), 0.0);
    }
}
