//! Keyed snapshot persistence service.
//!
//! # Responsibility
//! - Save the current document under a storage key.
//! - Restore a stored document into an existing store.
//!
//! # Invariants
//! - Stored payloads are full exports, so a restore replaces every collection.
//! - A malformed stored payload is an error; it never resets the store.

use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use crate::store::snapshot::{Snapshot, SnapshotError, SNAPSHOT_FORMAT_VERSION};
use crate::store::DocumentStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence host error.
#[derive(Debug)]
pub enum PersistenceError {
    Repo(RepoError),
    Snapshot(SnapshotError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for PersistenceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SnapshotError> for PersistenceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

/// Saves and restores one document under a fixed storage key.
pub struct PersistenceService<R: SnapshotRepository> {
    repo: R,
    storage_key: String,
}

impl<R: SnapshotRepository> PersistenceService<R> {
    pub fn new(repo: R, storage_key: impl Into<String>) -> Self {
        Self {
            repo,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        self.storage_key.as_str()
    }

    /// Writes a full export of `store` under the storage key.
    pub fn save(&self, store: &DocumentStore) -> PersistenceResult<()> {
        let payload = store.to_json_pretty()?;
        self.repo
            .save(&self.storage_key, &payload, SNAPSHOT_FORMAT_VERSION)?;
        info!(
            "event=snapshot_save module=persistence status=ok bytes={} sections={}",
            payload.len(),
            store.sections().len()
        );
        Ok(())
    }

    /// Loads the stored document into `store`.
    ///
    /// Returns `false` (store untouched) when nothing is stored yet.
    pub fn restore(&self, store: &mut DocumentStore) -> PersistenceResult<bool> {
        let Some(stored) = self.repo.load(&self.storage_key)? else {
            info!("event=snapshot_restore module=persistence status=empty");
            return Ok(false);
        };

        let snapshot = Snapshot::from_json_str(&stored.payload).map_err(|err| {
            error!(
                "event=snapshot_restore module=persistence status=error error_code=snapshot_decode_failed error={err}"
            );
            err
        })?;
        store.load_snapshot(snapshot)?;
        info!(
            "event=snapshot_restore module=persistence status=ok format_version={} updated_at={}",
            stored.format_version, stored.updated_at
        );
        Ok(true)
    }

    /// Returns whether a document is stored under the key.
    pub fn has_saved(&self) -> PersistenceResult<bool> {
        Ok(self.repo.load(&self.storage_key)?.is_some())
    }

    /// Deletes the stored document. Returns `false` when nothing was stored.
    pub fn clear(&self) -> PersistenceResult<bool> {
        match self.repo.delete(&self.storage_key) {
            Ok(()) => {
                info!("event=snapshot_clear module=persistence status=ok");
                Ok(true)
            }
            Err(RepoError::NotFound(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
