//! Fixed-interval stats polling with a stale-response guard.
//!
//! Fetches are issued on a fixed interval without cancelling in-flight
//! requests, so a slow response can resolve after a newer one. Each fetch
//! carries a monotonically increasing sequence number and the consumer
//! discards any update older than the newest one already applied, so a
//! late-resolving stale response can never overwrite fresher data.
//!
//! Stopping the poller stops scheduling further fetches; an in-flight
//! fetch runs to completion and its update is dropped by the guard or the
//! closed channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::stats::{StatsClient, StatsSnapshot};

/// Default polling interval, matching the dashboard's 5-second refresh.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// One polled result, tagged with its fetch sequence number.
#[derive(Debug)]
pub struct PollUpdate {
    /// Sequence number of the fetch that produced this update.
    pub seq: u64,
    /// The fetch outcome.
    pub result: Result<StatsSnapshot, FetchError>,
}

/// Admission control for out-of-order poll updates.
///
/// Tracks the newest applied sequence number; anything at or below it is
/// stale and rejected.
#[derive(Debug, Default)]
struct SequenceGuard {
    newest_applied: u64,
}

impl SequenceGuard {
    /// Returns true when `seq` is newer than anything applied so far,
    /// recording it as applied.
    fn admit(&mut self, seq: u64) -> bool {
        if seq <= self.newest_applied {
            return false;
        }
        self.newest_applied = seq;
        true
    }
}

/// Spawns stats fetches on a fixed interval.
#[derive(Debug)]
pub struct StatsPoller {
    client: StatsClient,
    url: String,
    interval: Duration,
}

impl StatsPoller {
    /// Creates a poller for the given endpoint.
    pub fn new(client: StatsClient, url: impl Into<String>, interval: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            interval,
        }
    }

    /// Starts polling on the current runtime.
    ///
    /// The first fetch fires immediately; subsequent fetches follow the
    /// configured interval. Each tick spawns an independent fetch task, so
    /// a slow response does not delay the next tick.
    pub fn spawn(self) -> PollHandle {
        let stopped = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel::<PollUpdate>(16);

        let stop_flag = Arc::clone(&stopped);
        tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut seq: u64 = 0;

            info!(url = %self.url, interval_secs = self.interval.as_secs(), "Polling started");

            loop {
                ticker.tick().await;
                if stop_flag.load(Ordering::Relaxed) {
                    debug!("Polling stopped, no further fetches scheduled");
                    break;
                }

                seq += 1;
                let client = self.client.clone();
                let url = self.url.clone();
                let tx = tx.clone();

                tokio::spawn(async move {
                    let result = client.fetch(&url).await;
                    // Receiver may be gone after stop; the update is dropped.
                    let _ = tx.send(PollUpdate { seq, result }).await;
                });
            }
        });

        PollHandle {
            rx,
            stopped,
            guard: SequenceGuard::default(),
        }
    }
}

/// Consumer side of a running poller.
pub struct PollHandle {
    rx: mpsc::Receiver<PollUpdate>,
    stopped: Arc<AtomicBool>,
    guard: SequenceGuard,
}

impl PollHandle {
    /// Waits for the next non-stale update.
    ///
    /// Updates that resolved after a newer one was already applied are
    /// discarded silently. Returns `None` once the poller has stopped and
    /// all pending updates have drained.
    pub async fn next(&mut self) -> Option<PollUpdate> {
        while let Some(update) = self.rx.recv().await {
            if self.guard.admit(update.seq) {
                return Some(update);
            }
            debug!(seq = update.seq, "Discarding stale poll update");
        }
        None
    }

    /// Stops scheduling further fetches.
    ///
    /// Does not cancel an in-flight fetch; its eventual update is simply
    /// not delivered.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}

// ============================================================================
// Tests
// ============================================================================
