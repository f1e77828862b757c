use crate::types::{ExerciseGroup, ExerciseRecord};

/// Group records by exercise name, each group ordered by set number.
///
/// Sorts by set first and then by name; both sorts are stable, so the set
/// order survives inside each name run. Groups come out in name order.
pub fn group_records(mut records: Vec<ExerciseRecord>) -> Vec<ExerciseGroup> {
    records.sort_by_key(|r| r.set_number);
    records.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));

    records
        .chunk_by(|a, b| a.exercise_name == b.exercise_name)
        .map(|run| ExerciseGroup {
            exercise_name: run[0].exercise_name.clone(),
            records: run.to_vec(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/group_tests.rs"]
mod tests;
