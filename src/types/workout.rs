//! Workout data produced by the extraction pipeline.
//!
//! A [`SessionBatch`] is recomputed from scratch on every run and owned by
//! whoever requested it; nothing here is updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit the app recorded an exercise in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[serde(rename = "lbs")]
    Pounds,
    #[serde(rename = "kg")]
    Kilograms,
    /// Bodyweight or timed exercises carry no unit code.
    Unspecified,
}

impl WeightUnit {
    /// Map the exercise table's unit code. `"2"` is pounds, any other code is kilograms.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            None => WeightUnit::Unspecified,
            Some("2") => WeightUnit::Pounds,
            Some(_) => WeightUnit::Kilograms,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Unspecified => "",
        }
    }
}

/// One logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub timestamp: DateTime<Utc>,
    pub exercise_name: String,
    pub unit: WeightUnit,
    pub weight: u32,
    pub rep_count: u32,
    pub set_number: u32,
}

/// All sets of one exercise, ordered by set number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub exercise_name: String,
    pub records: Vec<ExerciseRecord>,
}

impl ExerciseGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Groups of the most recent session, ordered by exercise name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionBatch {
    pub groups: Vec<ExerciseGroup>,
}

impl SessionBatch {
    pub fn new(groups: Vec<ExerciseGroup>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every record, group by group.
    pub fn records(&self) -> impl Iterator<Item = &ExerciseRecord> {
        self.groups.iter().flat_map(|g| g.records.iter())
    }

    /// Newest record timestamp, `None` when the session had no entries.
    pub fn latest_timestamp(&self) -> Option<DateTime<Utc>> {
        self.records().map(|r| r.timestamp).max()
    }
}
