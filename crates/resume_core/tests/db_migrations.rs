use resume_core::db::migrations::{current_version, latest_version};
use resume_core::db::{open_db, open_db_in_memory, DbError, DbTarget};
use resume_core::{RepoError, SqliteSnapshotRepository};
use rusqlite::Connection;

#[test]
fn in_memory_database_is_fully_migrated() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "snapshots");
    let busy_timeout_ms: i64 = conn
        .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(busy_timeout_ms, 5000);
}

#[test]
fn reopening_a_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO snapshots (storage_key, payload, format_version) VALUES ('k', '{}', 1);",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(current_version(&second).unwrap(), latest_version());
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM snapshots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("resume").join("resume.sqlite3");

    let conn = open_db(&path).unwrap();
    assert_eq!(current_version(&conn).unwrap(), latest_version());
    assert!(path.exists());
}

#[test]
fn unusable_parent_directory_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    match open_db(blocker.join("resume.sqlite3")).unwrap_err() {
        DbError::CreateDirectory { path, .. } => assert_eq!(path, blocker),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn targets_describe_what_was_opened() {
    let file = DbTarget::File("/var/lib/resume.sqlite3".into());
    assert_eq!(file.mode(), "file");
    assert_eq!(file.to_string(), "`/var/lib/resume.sqlite3`");
    assert_eq!(DbTarget::Memory.mode(), "memory");
    assert!(DbTarget::Memory.path().is_none());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_requires_migrated_connection() {
    let raw = Connection::open_in_memory().unwrap();
    match SqliteSnapshotRepository::try_new(&raw) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        }) => {
            assert_eq!(expected_version, latest_version());
            assert_eq!(actual_version, 0);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("unmigrated connection must be rejected"),
    }
}

#[test]
fn blank_storage_key_violates_table_check() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO snapshots (storage_key, payload, format_version) VALUES ('  ', '{}', 1);",
        [],
    );
    assert!(result.is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
