pub mod errors;
pub mod workout;

pub use workout::{ExerciseGroup, ExerciseRecord, SessionBatch, WeightUnit};
