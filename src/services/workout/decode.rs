//! Decoding of the `entry.data` column.
//!
//! The app packs each set as `code-value` pairs joined by commas, for example
//! `3-1,4-45.5,5-10`. Known codes:
//!
//! | code | meaning                                       |
//! |------|-----------------------------------------------|
//! | 3    | set number                                    |
//! | 4    | weight, always stored in kilograms            |
//! | 5    | reps                                          |
//! | 52   | reps logged by older app versions; added to 5 |

use super::extract::RawRow;
use crate::types::errors::DecodeError;
use crate::types::{ExerciseRecord, WeightUnit};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const FIELD_SET: u32 = 3;
pub const FIELD_WEIGHT: u32 = 4;
pub const FIELD_REPS: u32 = 5;
pub const FIELD_REPS_LEGACY: u32 = 52;

const KG_TO_LBS: f64 = 2.20462262;
const LBS_TO_KG: f64 = 0.45359237;

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * KG_TO_LBS
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * LBS_TO_KG
}

/// Round to the nearest whole unit, halves away from zero (`f64::round`).
///
/// `110.5` becomes `111`, not the banker's `110`.
pub fn round_weight(value: f64) -> u32 {
    value.round() as u32
}

/// Drop the fractional part (`45.9` becomes `45`).
pub fn truncate_weight(value: f64) -> u32 {
    value.trunc() as u32
}

/// Narrow an already whole value to `u32`, rejecting anything `as` would clamp.
fn whole_count(code: u32, value: f64) -> Result<u32, DecodeError> {
    if (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(DecodeError::OutOfRange { code, value })
    }
}

/// Split a packed field string into a code → value map.
///
/// Any pair that is not two finite numbers separated by a single `-` fails the
/// whole string. A repeated code keeps its last value.
pub fn parse_packed_fields(packed: &str) -> Result<HashMap<u32, f64>, DecodeError> {
    if packed.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut fields = HashMap::new();
    for pair in packed.split(',') {
        let malformed = |reason: &str| DecodeError::MalformedPair {
            pair: pair.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = pair.split('-');
        let (code, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(code), Some(value), None) => (code.trim(), value.trim()),
            _ => return Err(malformed("expected exactly one '-'")),
        };

        let code: f64 = code
            .parse()
            .map_err(|_| malformed("field code is not a number"))?;
        if !code.is_finite() || code.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&code) {
            return Err(malformed("field code is not a non-negative integer"));
        }

        let value: f64 = value
            .parse()
            .map_err(|_| malformed("value is not a number"))?;
        if !value.is_finite() {
            return Err(malformed("value is not finite"));
        }

        fields.insert(code as u32, value);
    }
    Ok(fields)
}

/// Decode one extracted row into an [`ExerciseRecord`].
///
/// Pounds exercises have their kilogram weight converted and rounded;
/// kilogram and unit-less exercises keep the stored value, truncated.
pub fn decode_row(
    timestamp: i64,
    packed_fields: &str,
    exercise_name: &str,
    unit_code: Option<&str>,
) -> Result<ExerciseRecord, DecodeError> {
    let fields = parse_packed_fields(packed_fields)?;
    let field = |code: u32| fields.get(&code).copied().unwrap_or(0.0);

    let unit = WeightUnit::from_code(unit_code);
    let raw_weight = field(FIELD_WEIGHT);
    let weight = match unit {
        WeightUnit::Pounds => kg_to_lbs(raw_weight).round(),
        WeightUnit::Kilograms | WeightUnit::Unspecified => raw_weight.trunc(),
    };
    let reps = (field(FIELD_REPS) + field(FIELD_REPS_LEGACY)).trunc();

    Ok(ExerciseRecord {
        timestamp: to_datetime(timestamp),
        exercise_name: exercise_name.to_string(),
        unit,
        weight: whole_count(FIELD_WEIGHT, weight)?,
        rep_count: whole_count(FIELD_REPS, reps)?,
        set_number: whole_count(FIELD_SET, field(FIELD_SET).trunc())?,
    })
}

pub fn decode_raw_row(row: &RawRow) -> Result<ExerciseRecord, DecodeError> {
    decode_row(
        row.timestamp,
        &row.packed_fields,
        &row.exercise_name,
        row.unit_code.as_deref(),
    )
}

fn to_datetime(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
#[path = "tests/decode_tests.rs"]
mod tests;
