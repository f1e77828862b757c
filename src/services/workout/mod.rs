//! Backup → session batch pipeline.
//!
//! archive (decrypt `gymapp.db`) → extract (latest session rows) →
//! decode (packed fields) → group (by exercise, by set).
//! Every stage is synchronous and keeps its scratch state local to the call,
//! so overlapping runs never share anything.

pub mod archive;
pub mod decode;
pub mod extract;
pub mod group;

pub use archive::extract_database;
pub use decode::{decode_row, parse_packed_fields};
pub use extract::{extract_rows, RawRow};
pub use group::group_records;

use crate::types::errors::PipelineResult;
use crate::types::SessionBatch;

/// Run the full pipeline over a backup archive.
pub fn process_archive(archive_bytes: &[u8]) -> PipelineResult<SessionBatch> {
    let database = extract_database(archive_bytes)?;
    process_database(&database)
}

/// Run the pipeline over a bare database, skipping the archive step.
pub fn process_database(database_bytes: &[u8]) -> PipelineResult<SessionBatch> {
    let rows = extract_rows(database_bytes)?;
    let records = rows
        .iter()
        .map(decode::decode_raw_row)
        .collect::<Result<Vec<_>, _>>()?;

    let batch = SessionBatch::new(group_records(records));
    log::info!(
        "Decoded {} exercises from the latest session",
        batch.groups.len()
    );
    Ok(batch)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
