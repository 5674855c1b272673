//! Shared fixtures for host tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta};
use cnmn_chain::{DailyPuzzle, SessionSummary};
use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use cnmn::ResultRepository;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Feed JSON for puzzle #779 (2026-02-17); answers are listed first on each link.
pub const FEED: &str = r#"{
  "date": "2026-02-17",
  "theme": "Water",
  "links": [
    {"category": "Ocean animals", "compressed": "shrk", "options": ["shrk", "cml", "frg", "lbrtr"], "correctOption": "shrk", "decodedWord": "shark", "bridgeHint": "Sharks cut the water with a fin"},
    {"compressed": "fn", "options": ["fn", "tl", "clw", "hrn"], "correctOption": "fn", "decodedWord": "fin", "bridgeHint": "Fins move through water"},
    {"compressed": "wtr", "options": ["wtr", "snd", "rck", "c"], "correctOption": "wtr", "decodedWord": "water", "bridgeHint": "Water falls as rain"},
    {"compressed": "rn", "options": ["rn", "snw", "hl", "fg"], "correctOption": "rn", "decodedWord": "rain", "bridgeHint": "Rain and sun make a bow"},
    {"compressed": "bw", "options": ["bw", "rrw", "knt", "rbn"], "correctOption": "bw", "decodedWord": "bow", "bridgeHint": "A bow is a kind of knot"},
    {"compressed": "knt", "options": ["knt", "lp", "brd", "chn"], "correctOption": "knt", "decodedWord": "knot", "emoji": "🪢"}
  ]
}"#;

pub fn puzzle() -> DailyPuzzle {
    DailyPuzzle::from_json(FEED).expect("fixture feed is valid")
}

/// Same chain published under another date and number.
pub fn puzzle_on(date: &str) -> DailyPuzzle {
    DailyPuzzle::from_json(&FEED.replace("2026-02-17", date)).expect("fixture feed is valid")
}

pub fn summary(seconds: i64, link_misses: Vec<u32>) -> SessionSummary {
    let start = DateTime::from_timestamp(1_771_315_200, 0).expect("valid timestamp");
    SessionSummary::new(start, start + TimeDelta::seconds(seconds), link_misses)
}

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
pub fn setup_test_db() -> (NamedTempFile, ResultRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let repo = ResultRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}
