use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Once;
use zip::write::SimpleFileOptions;
use zip::{AesMode, CompressionMethod, ZipWriter};

static INIT: Once = Once::new();

pub const PASSWORD: &str = "13-ImPeRiOn,90#";

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Write a GymRun-shaped database for the given session rows into `dir` and
/// return its bytes. Rows are `(time, data, xlabel, unit)`.
pub fn gym_db(dir: &Path, start: i64, end: i64, rows: &[(i64, &str, &str, Option<&str>)]) -> Vec<u8> {
    let path = dir.join("gymapp.db");
    let _ = std::fs::remove_file(&path);
    {
        let conn = Connection::open(&path).expect("fixture db should open");
        conn.execute_batch(
            "CREATE TABLE exercise (_id INTEGER PRIMARY KEY, xlabel TEXT NOT NULL, unit TEXT);
             CREATE TABLE workout (_id INTEGER PRIMARY KEY, time_start INTEGER, time_end INTEGER);
             CREATE TABLE entry (_id INTEGER PRIMARY KEY, exercise INTEGER, time INTEGER, data TEXT);",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO workout (time_start, time_end) VALUES (?1, ?2)",
            params![start, end],
        )
        .unwrap();

        let mut ids: HashMap<&str, i64> = HashMap::new();
        for (time, data, label, unit) in rows {
            let next_id = ids.len() as i64 + 1;
            let id = *ids.entry(*label).or_insert_with(|| {
                conn.execute(
                    "INSERT INTO exercise (_id, xlabel, unit) VALUES (?1, ?2, ?3)",
                    params![next_id, label, unit],
                )
                .unwrap();
                next_id
            });
            conn.execute(
                "INSERT INTO entry (exercise, time, data) VALUES (?1, ?2, ?3)",
                params![id, time, data],
            )
            .unwrap();
        }
    }
    std::fs::read(&path).expect("fixture db should be readable")
}

pub fn encrypted_backup(db: &[u8]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .with_aes_encryption(AesMode::Aes256, PASSWORD);
    writer.start_file("gymapp.db", options).unwrap();
    writer.write_all(db).unwrap();
    writer.finish().unwrap().into_inner()
}
