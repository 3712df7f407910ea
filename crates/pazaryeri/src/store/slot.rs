use super::backend::StorageBackend;
use crate::error::{Result, StorefrontError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 0;

/// On-storage wrapper around a persisted state value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

impl<T> Envelope<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }
}

/// Outcome of the most recent write attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersistStatus {
    /// Nothing has failed (including: nothing written yet).
    #[default]
    Saved,
    /// The last write failed; in-memory state is ahead of storage.
    Failed(String),
}

impl PersistStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PersistStatus::Failed(_))
    }
}

/// Serialize a state value into its envelope.
pub fn encode<T: Serialize>(state: &T) -> Result<String> {
    serde_json::to_string(&Envelope::new(state)).map_err(StorefrontError::Serialization)
}

/// Parse an envelope, rejecting snapshots from a newer format version.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_str(raw).map_err(StorefrontError::Serialization)?;
    if envelope.version > SNAPSHOT_VERSION {
        return Err(StorefrontError::Store(format!(
            "Snapshot version {} is newer than supported version {}",
            envelope.version, SNAPSHOT_VERSION
        )));
    }
    Ok(envelope.state)
}

/// A named slot in the storage medium owned by one store.
///
/// Storage failures never escape a slot: reads fall back to `None` and
/// writes record a [`PersistStatus::Failed`], both logged at warn level.
pub struct PersistSlot<B: StorageBackend> {
    backend: B,
    key: String,
    status: PersistStatus,
}

impl<B: StorageBackend> PersistSlot<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            status: PersistStatus::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn status(&self) -> &PersistStatus {
        &self.status
    }

    /// Read and decode the stored snapshot, if any.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored snapshot");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored snapshot");
                return None;
            }
        };
        match decode(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable snapshot");
                None
            }
        }
    }

    /// Encode and write `state`. Returns whether the write succeeded.
    pub fn save<T: Serialize>(&mut self, state: &T) -> bool {
        let outcome = encode(state).and_then(|raw| self.backend.write(&self.key, &raw));
        match outcome {
            Ok(()) => {
                self.status = PersistStatus::Saved;
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to persist snapshot");
                self.status = PersistStatus::Failed(e.to_string());
                false
            }
        }
    }
}
