// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Langlens Fetch
//!
//! I/O boundary for Langlens: the OpenAI detection call, response
//! normalization, and the queue-stats fetcher/poller.
//!
//! ## Key Types
//!
//! - [`DetectionClient`] - Sends validated text to the OpenAI Responses API
//! - [`Detection`] - Normalized result plus reported token usage
//! - [`StatsClient`] - One-shot queue-stats fetch
//! - [`StatsPoller`] - Fixed-interval polling with a stale-response guard
//! - [`FetchError`] - Error taxonomy shared by both flows

pub mod client;
pub mod detect;
pub mod error;
pub mod normalize;
pub mod poll;
pub mod stats;

pub use client::HttpClient;
pub use detect::{Detection, DetectionClient};
pub use error::FetchError;
pub use normalize::normalize_response;
pub use poll::{PollHandle, PollUpdate, StatsPoller};
pub use stats::{StatsClient, StatsSnapshot, DEFAULT_STATS_URL};
