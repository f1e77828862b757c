use crate::types::errors::StoreError;
use crate::types::SessionBatch;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub const KEY_LAST_UPDATED: &str = "last_updated";
pub const KEY_BATCH: &str = "data";

/// Open (or create) the state database at `path`.
pub fn open_state_db(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    ensure_tables(&conn)?;
    log::debug!("State store opened at {}", path.display());
    Ok(conn)
}

/// In-memory state database, used by tests and dry runs.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    ensure_tables(&conn)?;
    Ok(conn)
}

/// Create the key-value table if it does not exist (idempotent).
fn ensure_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
    )?;
    Ok(())
}

// ── KV State ────────────────────────────────────────────────

/// Get a single value by key.
pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
    let value = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Upsert a single value (INSERT OR REPLACE).
pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> Result<(), StoreError> {
    conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
    Ok(())
}

// ── Typed helpers ───────────────────────────────────────────

/// Epoch seconds of the newest record already posted, 0 when nothing was.
pub fn last_updated(conn: &Connection) -> Result<i64, StoreError> {
    match get_value(conn, KEY_LAST_UPDATED)? {
        Some(raw) => raw.parse().map_err(|e| {
            StoreError::Serialization(format!("{KEY_LAST_UPDATED} '{raw}': {e}"))
        }),
        None => Ok(0),
    }
}

pub fn set_last_updated(conn: &Connection, epoch_seconds: i64) -> Result<(), StoreError> {
    set_value(conn, KEY_LAST_UPDATED, &epoch_seconds.to_string())
}

/// The batch from the last accepted refresh.
pub fn load_batch(conn: &Connection) -> Result<Option<SessionBatch>, StoreError> {
    get_value(conn, KEY_BATCH)?
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(StoreError::from)
}

pub fn save_batch(conn: &Connection, batch: &SessionBatch) -> Result<(), StoreError> {
    let json = serde_json::to_string(batch)?;
    set_value(conn, KEY_BATCH, &json)
}

/// Cursor and batch in one transaction, so a reader never sees one without the other.
pub fn commit_refresh(
    conn: &mut Connection,
    epoch_seconds: i64,
    batch: &SessionBatch,
) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    set_last_updated(&tx, epoch_seconds)?;
    save_batch(&tx, batch)?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/state_repo_tests.rs"]
mod tests;
