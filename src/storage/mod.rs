//! Persistence adapter: the whole store state as one JSON blob under one key.

pub mod deferred;
pub mod json_backend;
pub mod memory;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::store::{AppState, PartialState};

pub use deferred::DeferredPersistence;
pub use json_backend::JsonFileStore;
pub use memory::MemoryBlobStore;

/// Well-known key the state blob is written under.
pub const STATE_KEY: &str = "expenseTrackerState";

/// Key-value surface holding opaque string blobs.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, blob: &str) -> Result<()>;
}

/// What the store needs from persistence. Neither operation reports failure: a missing
/// or unreadable blob loads as `None`, and failed saves are dropped.
pub trait StatePersistence {
    fn load(&self) -> Option<PartialState>;
    fn save(&self, state: &AppState);
}

impl<P: StatePersistence + ?Sized> StatePersistence for Box<P> {
    fn load(&self) -> Option<PartialState> {
        (**self).load()
    }

    fn save(&self, state: &AppState) {
        (**self).save(state)
    }
}

/// Serializes the full state into a [`BlobStore`].
#[derive(Debug, Clone)]
pub struct BlobPersistence<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> BlobPersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STATE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn try_save(&self, state: &AppState) -> Result<()> {
        let blob = serde_json::to_string(state)?;
        self.store.put(&self.key, &blob)
    }
}

impl<S: BlobStore> StatePersistence for BlobPersistence<S> {
    fn load(&self) -> Option<PartialState> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.key, "no persisted state");
                return None;
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read persisted state");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(partial) => Some(partial),
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring unparseable persisted state");
                None
            }
        }
    }

    fn save(&self, state: &AppState) {
        if let Err(err) = self.try_save(state) {
            warn!(key = %self.key, error = %err, "failed to persist state");
        }
    }
}

/// Persistence that remembers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPersistence;

impl StatePersistence for NoPersistence {
    fn load(&self) -> Option<PartialState> {
        None
    }

    fn save(&self, _state: &AppState) {}
}
