use crate::services::workout::decode::{kg_to_lbs, lbs_to_kg, round_weight};
use crate::types::errors::ConfigError;
use crate::types::{ExerciseGroup, ExerciseRecord, WeightUnit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit the card shows weights in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// Whatever each exercise was logged in.
    #[default]
    Native,
    Lbs,
    Kg,
}

impl FromStr for DisplayUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(DisplayUnit::Native),
            "lbs" => Ok(DisplayUnit::Lbs),
            "kg" => Ok(DisplayUnit::Kg),
            _ => Err(ConfigError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayUnit::Native => "native",
            DisplayUnit::Lbs => "lbs",
            DisplayUnit::Kg => "kg",
        };
        f.write_str(name)
    }
}

fn format_record(record: &ExerciseRecord, unit: DisplayUnit) -> String {
    let (weight, label) = match (record.unit, unit) {
        (WeightUnit::Unspecified, _) => return format!("×{}", record.rep_count),
        (WeightUnit::Kilograms, DisplayUnit::Lbs) => {
            (round_weight(kg_to_lbs(record.weight as f64)), "lbs")
        }
        (WeightUnit::Pounds, DisplayUnit::Kg) => {
            (round_weight(lbs_to_kg(record.weight as f64)), "kg")
        }
        (logged, _) => (record.weight, logged.label()),
    };
    format!("{weight}{label}×{}", record.rep_count)
}

/// One line of sets, e.g. `110lbs×10, 110lbs×8`.
pub fn format_sets(group: &ExerciseGroup, unit: DisplayUnit) -> String {
    group
        .records
        .iter()
        .map(|r| format_record(r, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Relative label such as `3 hours ago`. Each magnitude is rounded to the
/// nearest whole unit before it is compared against the next threshold.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let ms = (now - then).num_milliseconds().max(0) as f64;
    let in_units = |unit_ms: f64| (ms / unit_ms).round() as i64;

    const SECOND: f64 = 1000.0;
    const MINUTE: f64 = 60.0 * SECOND;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;

    let seconds = in_units(SECOND);
    let minutes = in_units(MINUTE);
    let hours = in_units(HOUR);
    let days = in_units(DAY);
    let weeks = in_units(7.0 * DAY);
    let months = in_units(30.0 * DAY);

    if seconds < 10 {
        "just now".to_string()
    } else if seconds < 60 {
        plural(seconds, "second")
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else if weeks < 4 {
        plural(weeks, "week")
    } else if months < 12 {
        plural(months, "month")
    } else {
        plural(in_units(365.0 * DAY), "year")
    }
}

/// Font width percentage that keeps long exercise names inside one column.
pub fn name_stretch(name: &str) -> u32 {
    let len = name.chars().count() as f64;
    (len * -2.1 + 194.0).clamp(0.0, 100.0).floor() as u32
}
