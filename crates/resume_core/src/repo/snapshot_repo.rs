//! Snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Store serialized document snapshots under a storage key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - One row per storage key; saves replace the payload in place.
//! - Keys are trimmed before use and must not be blank.
//! - Payloads are opaque text here; decoding happens in the service layer.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Storage key is blank after trim.
    InvalidKey(String),
    /// No snapshot stored under the key.
    NotFound(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted row cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
            Self::NotFound(key) => write!(f, "no snapshot stored under `{key}`"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Stored snapshot read model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub storage_key: String,
    /// Serialized snapshot JSON.
    pub payload: String,
    /// Snapshot format version recorded at save time.
    pub format_version: u32,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}

/// Repository interface for keyed snapshot storage.
pub trait SnapshotRepository {
    /// Inserts or replaces the snapshot stored under `key`.
    fn save(&self, key: &str, payload: &str, format_version: u32) -> RepoResult<()>;
    /// Loads the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> RepoResult<Option<StoredSnapshot>>;
    /// Deletes the snapshot stored under `key`.
    fn delete(&self, key: &str) -> RepoResult<()>;
    /// Lists stored keys in ascending order.
    fn list_keys(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save(&self, key: &str, payload: &str, format_version: u32) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO snapshots (storage_key, payload, format_version)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(storage_key) DO UPDATE SET
                payload = excluded.payload,
                format_version = excluded.format_version,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, payload, format_version],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> RepoResult<Option<StoredSnapshot>> {
        let key = normalize_key(key)?;
        let mut stmt = self.conn.prepare(
            "SELECT storage_key, payload, format_version, created_at, updated_at
             FROM snapshots
             WHERE storage_key = ?1;",
        )?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_snapshot_row(row)?));
        }
        Ok(None)
    }

    fn delete(&self, key: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        let changed = self
            .conn
            .execute("DELETE FROM snapshots WHERE storage_key = ?1;", [key])?;
        if changed == 0 {
            return Err(RepoError::NotFound(key.to_string()));
        }
        Ok(())
    }

    fn list_keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT storage_key FROM snapshots ORDER BY storage_key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}

fn parse_snapshot_row(row: &Row<'_>) -> RepoResult<StoredSnapshot> {
    let storage_key: String = row.get("storage_key")?;
    let raw_version: i64 = row.get("format_version")?;
    let format_version = u32::try_from(raw_version)
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid format_version `{raw_version}` for key `{storage_key}`"
            ))
        })?;

    Ok(StoredSnapshot {
        storage_key,
        payload: row.get("payload")?,
        format_version,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
