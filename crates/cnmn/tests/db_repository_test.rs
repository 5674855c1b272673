//! Tests for results history repository operations.

mod common;

use chrono::NaiveDate;
use cnmn::{NewChainResult, ResultRepository};
use cnmn_chain::GlyphSet;

fn row(number: i32, misses: i32, seconds: i64, completed: &str) -> NewChainResult {
    NewChainResult::new(
        number,
        NaiveDate::from_ymd_opt(2026, 2, 17).expect("valid date"),
        misses,
        seconds,
        "oxoooo".to_string(),
        chrono::NaiveDateTime::parse_from_str(completed, "%Y-%m-%d %H:%M:%S")
            .expect("valid timestamp"),
    )
}

#[test]
fn test_record_result() {
    let (_db, repo) = common::setup_test_db();
    let stored = repo
        .record_result(row(779, 1, 67, "2026-02-17 08:01:07"))
        .expect("Record failed");
    assert!(*stored.id() > 0);
    assert_eq!(*stored.puzzle_number(), 779);
    assert_eq!(stored.glyph_row(), "oxoooo");
}

#[test]
fn test_duplicate_puzzle_number_fails() {
    let (_db, repo) = common::setup_test_db();
    repo.record_result(row(779, 0, 40, "2026-02-17 08:00:40"))
        .expect("First record failed");
    let result = repo.record_result(row(779, 2, 90, "2026-02-17 09:00:00"));
    assert!(result.is_err(), "Duplicate puzzle number should fail");
}

#[test]
fn test_get_by_number() {
    let (_db, repo) = common::setup_test_db();
    repo.record_result(row(12, 3, 200, "2024-01-12 20:00:00"))
        .expect("Record failed");

    let found = repo.get_by_number(12).expect("Query failed");
    assert_eq!(found.map(|r| *r.total_misses()), Some(3));
    assert!(repo.get_by_number(13).expect("Query failed").is_none());
}

#[test]
fn test_list_recent_orders_newest_first() {
    let (_db, repo) = common::setup_test_db();
    repo.record_result(row(1, 0, 30, "2024-01-01 08:00:00")).expect("Record failed");
    repo.record_result(row(3, 0, 30, "2024-01-03 08:00:00")).expect("Record failed");
    repo.record_result(row(2, 0, 30, "2024-01-02 08:00:00")).expect("Record failed");

    let numbers: Vec<i32> = repo
        .list_recent(10)
        .expect("Query failed")
        .iter()
        .map(|r| *r.puzzle_number())
        .collect();
    assert_eq!(numbers, vec![3, 2, 1]);

    assert_eq!(repo.list_recent(2).expect("Query failed").len(), 2);
    assert!(repo.list_recent(0).expect("Query failed").is_empty());
}

#[test]
fn test_aggregated_stats() {
    let (_db, repo) = common::setup_test_db();
    repo.record_result(row(1, 0, 95, "2024-01-01 08:00:00")).expect("Record failed");
    repo.record_result(row(2, 4, 61, "2024-01-02 08:00:00")).expect("Record failed");
    repo.record_result(row(3, 2, 180, "2024-01-03 08:00:00")).expect("Record failed");

    let stats = repo.aggregated_stats().expect("Stats failed");
    assert_eq!(*stats.played(), 3);
    assert_eq!(*stats.perfect(), 1);
    assert_eq!(*stats.total_misses(), 6);
    assert_eq!(*stats.best_seconds(), Some(61));
    assert!((stats.average_misses() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_history_stats() {
    let (_db, repo) = common::setup_test_db();
    let stats = repo.aggregated_stats().expect("Stats failed");
    assert_eq!(*stats.played(), 0);
    assert_eq!(*stats.best_seconds(), None);
    assert_eq!(stats.average_misses(), 0.0);
    assert_eq!(stats.perfect_rate(), 0.0);
}

#[test]
fn test_row_from_summary() {
    let puzzle = common::puzzle();
    let summary = common::summary(67, vec![0, 1, 0, 0, 0, 0]);
    let row = NewChainResult::from_summary(&puzzle, &summary, &GlyphSet::new("o", "x"))
        .expect("Row built");
    assert_eq!(*row.puzzle_number(), 779);
    assert_eq!(*row.elapsed_seconds(), 67);
    assert_eq!(row.glyph_row(), "oxoooo");
    assert_eq!(*row.total_misses(), 1);
}

#[test]
fn test_migrations_on_fresh_file() {
    let db_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let repo = ResultRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    repo.run_migrations().expect("Second run is a no-op");
    assert!(repo.list_recent(5).expect("Query failed").is_empty());
}

#[test]
fn test_empty_path_rejected() {
    assert!(ResultRepository::new("  ".to_string()).is_err());
}
