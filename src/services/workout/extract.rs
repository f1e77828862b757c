use crate::types::errors::ExtractionError;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row};
use std::io::Write;
use std::path::Path;

/// Entries of the most recently started workout, joined to their exercise.
const LATEST_SESSION_QUERY: &str = "
    SELECT entry.time, entry.data, exercise.xlabel, exercise.unit
    FROM entry
    INNER JOIN exercise ON entry.exercise = exercise._id
    WHERE entry.time >= (SELECT time_start FROM workout ORDER BY time_start DESC LIMIT 1)
      AND entry.time <= (SELECT time_end FROM workout ORDER BY time_start DESC LIMIT 1)";

/// One undecoded log entry as stored by the app.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Epoch seconds.
    pub timestamp: i64,
    pub packed_fields: String,
    pub exercise_name: String,
    pub unit_code: Option<String>,
}

/// `exercise.unit` is untyped; some backups store the code as an integer.
fn unit_code_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Integer(n) => Some(n.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(b) => String::from_utf8(b).ok(),
    }
}

fn row_to_raw(row: &Row) -> rusqlite::Result<RawRow> {
    let packed_fields: Option<String> = row.get(1)?;
    Ok(RawRow {
        timestamp: row.get(0)?,
        packed_fields: packed_fields.unwrap_or_default(),
        exercise_name: row.get(2)?,
        unit_code: unit_code_text(row.get(3)?),
    })
}

/// Load `database_bytes` into a private scratch file and read the latest
/// session's entries.
///
/// Rows come back in whatever order SQLite yields them. A database whose
/// `workout` table is empty yields no rows rather than an error.
pub fn extract_rows(database_bytes: &[u8]) -> Result<Vec<RawRow>, ExtractionError> {
    extract_rows_in(&std::env::temp_dir(), database_bytes)
}

/// [`extract_rows`] with the scratch file placed in `dir`.
pub(crate) fn extract_rows_in(
    dir: &Path,
    database_bytes: &[u8],
) -> Result<Vec<RawRow>, ExtractionError> {
    // Declared before the connection so the connection closes first; the file
    // is unlinked when `scratch` drops, on every return path.
    let mut scratch = tempfile::Builder::new()
        .prefix("gymcard-")
        .suffix(".db")
        .tempfile_in(dir)?;
    scratch.write_all(database_bytes)?;
    scratch.flush()?;

    let conn = Connection::open_with_flags(
        scratch.path(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    let mut stmt = conn.prepare(LATEST_SESSION_QUERY)?;
    let rows = stmt
        .query_map([], row_to_raw)?
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Latest session query returned {} rows", rows.len());
    Ok(rows)
}
