//! HTTP client abstractions.

use crate::error::FetchError;
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds.
///
/// No shorter local timeout is enforced on individual calls; both flows
/// rely on this transport-level limit.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper around [`reqwest::Client`] with Langlens defaults.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("langlens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a GET request.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url = %url, "Making GET request");
        Ok(self.inner.get(url).send().await?)
    }

    /// Performs a POST request with a JSON body and a bearer token.
    pub async fn post_json_with_auth<B: Serialize + ?Sized>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<Response, FetchError> {
        debug!(url = %url, "Making POST request");
        Ok(self
            .inner
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }
}

impl Default for HttpClient {
    /// Creates a default HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should only happen
    /// if the system's TLS configuration is broken, which indicates a
    /// fundamentally broken environment where the application cannot function.
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            panic!(
                "Failed to create default HTTP client: {e}. \
                This usually indicates a broken TLS/SSL configuration."
            )
        })
    }
}
