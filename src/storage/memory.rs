use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::errors::{Result, StoreError};

use super::BlobStore;

/// In-process blob store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| StoreError::Storage("memory store lock poisoned".into()))?;
        Ok(blobs.get(key).cloned())
    }

    fn put(&self, key: &str, blob: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| StoreError::Storage("memory store lock poisoned".into()))?;
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
