//! Tests for the terminal play loop.

mod common;

use cnmn::{PlayOutcome, PlaySession, SnapshotStore};
use cnmn_chain::{ChainEngine, Phase};
use std::io::Cursor;

fn play(input: &str, store: &SnapshotStore, engine: &mut ChainEngine) -> (PlayOutcome, String) {
    let puzzle = common::puzzle();
    let mut output = Vec::new();
    let outcome = PlaySession::new(&puzzle, store, Cursor::new(input.as_bytes()), &mut output)
        .run(engine)
        .expect("Session failed");
    (outcome, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_full_chain_by_number() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path());
    let mut engine = ChainEngine::new(common::puzzle().chain().clone());

    let (outcome, output) = play("2\n1\n1\n1\n1\n1\n1\n", &store, &mut engine);

    match outcome {
        PlayOutcome::Completed(summary) => assert_eq!(*summary.total_misses(), 1),
        PlayOutcome::Quit => panic!("chain should complete"),
    }
    assert!(output.starts_with("cnmn #779 · 2026-02-17\nTheme: Water\n"));
    assert!(output.contains("✗ cml (3 left)"));
    assert!(output.contains("✓ shark\n  Sharks cut the water with a fin"));
    assert!(output.contains("✓ knot 🪢"));
}

#[test]
fn test_quit_keeps_progress_on_disk() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path());
    let puzzle = common::puzzle();
    let mut engine = ChainEngine::new(puzzle.chain().clone());

    let (outcome, output) = play("shrk\nq\n", &store, &mut engine);
    assert_eq!(outcome, PlayOutcome::Quit);
    assert!(output.ends_with("Progress saved.\n"));

    let snapshot = store.load(puzzle.date()).expect("Load failed").expect("snapshot saved");
    assert_eq!(snapshot.phase(), Phase::AwaitingGuess(1));
}

#[test]
fn test_unknown_input_is_reprompted() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path());
    let mut engine = ChainEngine::new(common::puzzle().chain().clone());

    let (outcome, output) = play("whale\n9\n", &store, &mut engine);
    assert_eq!(outcome, PlayOutcome::Quit);
    assert_eq!(output.matches("Pick 1-4 or type an option.").count(), 2);
    assert_eq!(engine.state().total_misses(), 0);
    assert!(store.load(common::puzzle().date()).expect("Load failed").is_none());
}

#[test]
fn test_resumed_session_continues() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path());
    let puzzle = common::puzzle();
    let mut engine = ChainEngine::new(puzzle.chain().clone());
    play("1\n1\n1\n", &store, &mut engine);

    let snapshot = store.load(puzzle.date()).expect("Load failed").expect("snapshot saved");
    let mut resumed =
        ChainEngine::restore(puzzle.chain().clone(), snapshot).expect("Restore failed");
    let (outcome, output) = play("1\n1\n1\n", &store, &mut resumed);

    assert!(matches!(outcome, PlayOutcome::Completed(_)));
    assert!(output.contains("[4/6] water"));
}
