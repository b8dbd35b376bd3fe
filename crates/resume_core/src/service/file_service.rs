//! JSON file import/export.
//!
//! # Invariants
//! - Exports are two-space indented JSON with every snapshot key.
//! - A failed import (unreadable file, malformed JSON, newer format) leaves
//!   the store unchanged.

use super::persistence_service::{PersistenceError, PersistenceResult};
use crate::store::snapshot::DEFAULT_EXPORT_FILE_NAME;
use crate::store::DocumentStore;
use log::{error, info};
use std::path::{Path, PathBuf};

/// Default export location inside `dir`.
pub fn default_export_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(DEFAULT_EXPORT_FILE_NAME)
}

/// Writes the store's snapshot to `path`, replacing any existing file.
pub fn export_to_file(store: &DocumentStore, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    let payload = store.to_json_pretty()?;
    std::fs::write(path, payload.as_bytes()).map_err(|source| {
        error!("event=json_export module=file status=error error={source}");
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(
        "event=json_export module=file status=ok bytes={}",
        payload.len()
    );
    Ok(())
}

/// Reads a snapshot from `path` and loads it into `store`.
pub fn import_from_file(store: &mut DocumentStore, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(err) = store.load_json(&text) {
        error!("event=json_import module=file status=error error_code=snapshot_invalid error={err}");
        return Err(err.into());
    }
    info!(
        "event=json_import module=file status=ok bytes={}",
        text.len()
    );
    Ok(())
}
