// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Langlens Store
//!
//! Session-scoped credential storage and configuration for Langlens.
//!
//! The credential store is deliberately ephemeral: a key lives in memory
//! for the duration of one session and is destroyed on explicit clear or
//! when the session ends. Nothing here writes a credential to disk.

pub mod config;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::StoreError;
pub use session::{SessionStore, SESSION_STORAGE_KEY};
