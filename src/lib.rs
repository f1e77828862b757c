//! Recent-workout cards from GymRun backups.
//!
//! The backup archive is decrypted, the latest session is read from the
//! embedded SQLite database, and the sets are decoded and grouped per
//! exercise. [`services::refresh`] decides whether the result is new enough
//! to post and [`services::render`] turns it into an SVG card.

pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::workout::{process_archive, process_database};
pub use types::{ExerciseGroup, ExerciseRecord, SessionBatch, WeightUnit};
