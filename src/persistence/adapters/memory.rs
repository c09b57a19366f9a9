//! In-memory snapshot store for tests and hosts that bridge to their own
//! storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::persistence::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
///
/// Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with `documents`.
    #[must_use]
    pub fn with_documents<K, V>(documents: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = documents
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            documents: Arc::new(RwLock::new(map)),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let documents = self.documents.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> SnapshotStoreResult<()> {
        let mut documents = self.documents.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        documents.insert(key.to_owned(), document.to_owned());
        Ok(())
    }
}
