//! Ephemeral, session-scoped credential storage.
//!
//! The credential is held under a fixed storage key for the lifetime of
//! one session and never transmitted to any server Langlens controls. It
//! is destroyed on explicit clear or when the store is dropped.

use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;

/// Fixed storage key for the OpenAI credential.
pub const SESSION_STORAGE_KEY: &str = "lang_detect_openai_key";

/// Required credential prefix.
const CREDENTIAL_PREFIX: &str = "sk-";

/// Minimum credential length, exclusive.
const MIN_CREDENTIAL_LEN: usize = 20;

/// Returns true when a credential is well-formed.
///
/// Well-formedness (provider prefix plus minimum length) is necessary but
/// not sufficient for validity; the provider may still reject the key.
pub fn is_well_formed(key: &str) -> bool {
    key.starts_with(CREDENTIAL_PREFIX) && key.len() > MIN_CREDENTIAL_LEN
}

/// In-memory key-value store scoped to a single session.
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: Mutex<HashMap<&'static str, String>>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the credential for this session.
    ///
    /// The key is trimmed first. An ill-formed key is not stored; any
    /// previously stored credential is removed in that case, mirroring a
    /// failed re-entry clearing the old key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IllFormedCredential` when the trimmed key does
    /// not satisfy [`is_well_formed`].
    pub fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        let trimmed = key.trim();
        let mut slots = self.slots.lock().expect("session store lock poisoned");

        if !is_well_formed(trimmed) {
            slots.remove(SESSION_STORAGE_KEY);
            return Err(StoreError::IllFormedCredential);
        }

        slots.insert(SESSION_STORAGE_KEY, trimmed.to_string());
        debug!("API key stored for this session");
        Ok(())
    }

    /// Returns the stored credential, if any.
    pub fn api_key(&self) -> Option<String> {
        self.slots
            .lock()
            .expect("session store lock poisoned")
            .get(SESSION_STORAGE_KEY)
            .cloned()
    }

    /// Returns true when a credential is stored.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Removes the stored credential.
    pub fn clear_api_key(&self) {
        self.slots
            .lock()
            .expect("session store lock poisoned")
            .remove(SESSION_STORAGE_KEY);
        debug!("API key cleared");
    }
}

// ============================================================================
// Tests
// ============================================================================
