use rusqlite::{params, Connection};
use std::io::{Cursor, Write};
use std::sync::Once;
use zip::write::SimpleFileOptions;
use zip::{AesMode, CompressionMethod, ZipWriter};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// `(id, xlabel, unit)` row of the `exercise` table.
pub type ExerciseDef<'a> = (i64, &'a str, Option<&'a str>);
/// `(time_start, time_end)` row of the `workout` table.
pub type WorkoutDef = (i64, i64);
/// `(exercise id, time, data)` row of the `entry` table.
pub type EntryDef<'a> = (i64, i64, &'a str);

/// Build a GymRun-shaped SQLite database and return its file bytes.
pub fn build_gym_db(
    exercises: &[ExerciseDef<'_>],
    workouts: &[WorkoutDef],
    entries: &[EntryDef<'_>],
) -> Vec<u8> {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("gymapp.db");
    {
        let conn = Connection::open(&path).expect("fixture db should open");
        conn.execute_batch(
            "CREATE TABLE exercise (_id INTEGER PRIMARY KEY, xlabel TEXT NOT NULL, unit TEXT);
             CREATE TABLE workout (_id INTEGER PRIMARY KEY, time_start INTEGER, time_end INTEGER);
             CREATE TABLE entry (_id INTEGER PRIMARY KEY, exercise INTEGER, time INTEGER, data TEXT);",
        )
        .unwrap();

        for (id, label, unit) in exercises {
            conn.execute(
                "INSERT INTO exercise (_id, xlabel, unit) VALUES (?1, ?2, ?3)",
                params![id, label, unit],
            )
            .unwrap();
        }
        for (start, end) in workouts {
            conn.execute(
                "INSERT INTO workout (time_start, time_end) VALUES (?1, ?2)",
                params![start, end],
            )
            .unwrap();
        }
        for (exercise, time, data) in entries {
            conn.execute(
                "INSERT INTO entry (exercise, time, data) VALUES (?1, ?2, ?3)",
                params![exercise, time, data],
            )
            .unwrap();
        }
    }
    std::fs::read(&path).expect("fixture db should be readable")
}

/// Wrap `contents` in an AES-256 encrypted zip under `entry_name`.
pub fn build_backup_zip(entry_name: &str, contents: &[u8], password: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .with_aes_encryption(AesMode::Aes256, password);
    writer.start_file(entry_name, options).unwrap();
    writer.write_all(contents).unwrap();
    writer.finish().unwrap().into_inner()
}

/// The three-row session used across pipeline tests: two pound sets of
/// Bench Press and one kilogram set of Squat.
pub fn sample_session_db() -> Vec<u8> {
    build_gym_db(
        &[(1, "Bench Press", Some("2")), (2, "Squat", Some("7"))],
        &[(1_699_990_000, 1_699_990_500), (1_700_000_000, 1_700_000_100)],
        &[
            (1, 1_699_990_100, "3-1,4-40,5-5"),
            (1, 1_700_000_001, "3-2,4-50,5-8"),
            (1, 1_700_000_000, "3-1,4-50,5-10"),
            (2, 1_700_000_002, "3-1,4-20,5-12"),
        ],
    )
}
