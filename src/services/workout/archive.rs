use crate::types::errors::ArchiveError;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// Password GymRun uses for every backup archive.
pub const BACKUP_PASSWORD: &str = "13-ImPeRiOn,90#";

/// The SQLite file inside the backup.
pub const DATABASE_ENTRY: &str = "gymapp.db";

/// Decrypt and decompress the embedded database from a backup archive.
///
/// The archive is read straight from memory, so there is no scratch file to
/// clean up on any exit path.
pub fn extract_database(archive_bytes: &[u8]) -> Result<Vec<u8>, ArchiveError> {
    extract_entry(archive_bytes, DATABASE_ENTRY, BACKUP_PASSWORD)
}

pub(crate) fn extract_entry(
    archive_bytes: &[u8],
    entry_name: &str,
    password: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;
    log::debug!("Backup archive opened: {} entries", archive.len());

    let mut entry = match archive.by_name_decrypt(entry_name, password.as_bytes()) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ArchiveError::MissingEntry(entry_name.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut buf = Vec::new();
    // A wrong password that slips past the 2-byte verifier surfaces here as an
    // authentication failure.
    entry
        .read_to_end(&mut buf)
        .map_err(|e| ArchiveError::Read(format!("{entry_name}: {e}")))?;

    log::info!("Extracted {entry_name} ({} bytes)", buf.len());
    Ok(buf)
}
