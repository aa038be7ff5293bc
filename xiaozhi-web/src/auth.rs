//! Presence check for the doctor's locally cached session.
//!
//! Nothing here talks to a server. A doctor counts as signed in when the
//! credential record under the configured key parses and carries a truthy
//! `token`.

use crate::config::FrontendConfig;
use crate::models::{CredentialError, CredentialRecord};
use crate::storage::KeyValueStore;
use log::warn;

/// Credential record access over an injected store.
#[derive(Debug, Clone)]
pub struct Credentials<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Credentials<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn from_config(store: S, config: &FrontendConfig) -> Self {
        Self::new(store, config.credential_key())
    }

    /// Reads and parses the stored record. An empty stored value is treated
    /// the same as a missing one.
    pub fn load(&self) -> Result<Option<CredentialRecord>, CredentialError> {
        match self.store.get(&self.key) {
            Some(raw) if !raw.is_empty() => CredentialRecord::parse(&raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Re-reads storage on every call. A record that fails to parse is
    /// deleted and reads as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.load() {
            Ok(record) => record.is_some_and(|record| record.has_token()),
            Err(err) => {
                warn!("discarding credential record `{}`: {err}", self.key);
                self.store.remove(&self.key);
                false
            }
        }
    }

    pub fn sign_out(&self) {
        self.store.remove(&self.key);
    }
}
