use serde::Serialize;
use thiserror::Error;
use zip::result::ZipError;

/// Failure while opening the backup archive or pulling the database out of it.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Invalid or corrupt archive: {0}")]
    Corrupt(String),
    #[error("Archive password rejected")]
    PasswordRejected,
    #[error("Archive has no entry named {0}")]
    MissingEntry(String),
    #[error("Failed to read archive entry: {0}")]
    Read(String),
}

impl From<ZipError> for ArchiveError {
    fn from(error: ZipError) -> Self {
        match error {
            ZipError::InvalidPassword => ArchiveError::PasswordRejected,
            ZipError::Io(e) => ArchiveError::Read(e.to_string()),
            other => ArchiveError::Corrupt(other.to_string()),
        }
    }
}

/// Failure while loading the embedded database or running the session query.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Scratch storage error: {0}")]
    Scratch(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for ExtractionError {
    fn from(error: rusqlite::Error) -> Self {
        ExtractionError::Database(error.to_string())
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(error: std::io::Error) -> Self {
        ExtractionError::Scratch(error.to_string())
    }
}

/// A packed field string that does not follow the `code-value,code-value` shape.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Packed fields are empty")]
    Empty,
    #[error("Malformed field pair '{pair}': {reason}")]
    MalformedPair { pair: String, reason: String },
    #[error("Field {code} value {value} does not fit a whole-number count")]
    OutOfRange { code: u32, value: f64 },
}

/// Any terminal failure of a single pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        StoreError::Database(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::Io(error.to_string())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown display unit '{0}' (expected native, lbs or kg)")]
    InvalidUnit(String),
}

/// Failure while filling in the card template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Card template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(error: minijinja::Error) -> Self {
        RenderError::Template(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Worker error: {0}")]
    Worker(String),
}

impl Serialize for RefreshError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
