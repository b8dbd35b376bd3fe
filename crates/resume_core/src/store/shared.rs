//! Thread-safe handle around one document store.
//!
//! # Invariants
//! - All access goes through one `RwLock`: writers are serialized and a
//!   reader never sees a write in progress.
//! - Each closure runs under a single lock acquisition, so a compound edit
//!   inside one `write` call is observed atomically.

use super::snapshot::Snapshot;
use super::DocumentStore;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable single-writer handle for multi-threaded hosts.
#[derive(Debug, Clone, Default)]
pub struct SharedDocumentStore {
    inner: Arc<RwLock<DocumentStore>>,
}

impl SharedDocumentStore {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` with shared read access.
    pub fn read<T>(&self, f: impl FnOnce(&DocumentStore) -> T) -> T {
        // Store operations never leave partial state, so a poisoned lock
        // still guards a consistent document.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` with exclusive write access.
    pub fn write<T>(&self, f: impl FnOnce(&mut DocumentStore) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Exports a snapshot under a read lock.
    pub fn export_snapshot(&self) -> Snapshot {
        self.read(DocumentStore::export_snapshot)
    }
}
