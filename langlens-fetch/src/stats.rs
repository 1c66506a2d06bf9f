//! Queue-stats fetching.

use chrono::{DateTime, Utc};
use langlens_core::QueueStats;
use tracing::{debug, instrument};

use crate::client::HttpClient;
use crate::error::FetchError;

/// Fixed queue-stats endpoint.
pub const DEFAULT_STATS_URL: &str = "https://rshld.eu/api/v1/queue/job/stats/info";

/// A fetched stats snapshot with its fetch time.
#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    /// The counters as returned by the endpoint.
    pub stats: QueueStats,
    /// When this snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Client for the remote queue-stats endpoint.
///
/// The endpoint is an opaque JSON source; the five counters are passed
/// through verbatim. Any non-2xx status or transport failure surfaces as a
/// single generic error category.
#[derive(Debug, Clone, Default)]
pub struct StatsClient {
    http: HttpClient,
}

impl StatsClient {
    /// Creates a new client.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new()?,
        })
    }

    /// Fetches the current queue statistics.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidResponse`] for non-2xx statuses and
    /// propagates transport and JSON errors.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<StatsSnapshot, FetchError> {
        let response = self.http.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let stats: QueueStats = response.json().await?;
        debug!(total = stats.total(), "Fetched queue stats");

        Ok(StatsSnapshot {
            stats,
            fetched_at: Utc::now(),
        })
    }
}
