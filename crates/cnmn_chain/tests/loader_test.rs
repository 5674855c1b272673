//! Tests for chain loading and the daily feed.

mod common;

use chrono::NaiveDate;
use cnmn_chain::{DailyPuzzle, IntegrityRule, PuzzleChain};

fn rule_for(records: Vec<cnmn_chain::LinkRecord>) -> (Option<usize>, IntegrityRule) {
    let err = PuzzleChain::load(records).unwrap_err();
    (err.link(), err.rule().cloned().expect("integrity error"))
}

#[test]
fn test_fixture_loads() {
    let chain = common::chain();
    assert_eq!(chain.links().len(), 6);
    assert_eq!(chain.links()[0].category(), Some("Ocean animals"));
    assert!(chain.links()[5].bridge_hint().is_none());
}

#[test]
fn test_five_links_rejected() {
    let mut records = common::records();
    records.pop();
    let (link, rule) = rule_for(records);
    assert_eq!(link, None);
    assert_eq!(rule, IntegrityRule::ChainLength { expected: 6, found: 5 });
}

#[test]
fn test_correct_option_must_be_offered() {
    let mut records = common::records();
    records[3].correct_option = "sn".to_string();
    let (link, rule) = rule_for(records);
    assert_eq!(link, Some(3));
    assert!(matches!(rule, IntegrityRule::CorrectOptionMissing(_)));
}

#[test]
fn test_duplicate_options_rejected() {
    let mut records = common::records();
    records[2].options[0] = "wtr".to_string();
    let (link, rule) = rule_for(records);
    assert_eq!(link, Some(2));
    assert_eq!(rule, IntegrityRule::DuplicateOption("wtr".to_string()));
}

#[test]
fn test_category_only_on_first_link() {
    let mut records = common::records();
    records[4].category = Some("Knots".to_string());
    assert_eq!(rule_for(records).1, IntegrityRule::CategoryPlacement);

    let mut records = common::records();
    records[0].category = None;
    assert_eq!(rule_for(records), (Some(0), IntegrityRule::CategoryPlacement));
}

#[test]
fn test_bridge_placement() {
    let mut records = common::records();
    records[5].bridge_hint = Some("Nowhere left to go".to_string());
    assert_eq!(rule_for(records), (Some(5), IntegrityRule::BridgePlacement));

    let mut records = common::records();
    records[1].bridge_hint = None;
    assert_eq!(rule_for(records), (Some(1), IntegrityRule::BridgePlacement));
}

#[test]
fn test_decoded_word_equal_to_option_rejected() {
    let mut records = common::records();
    records[1].decoded_word = "FN".to_string();
    let (link, rule) = rule_for(records);
    assert_eq!(link, Some(1));
    assert!(matches!(rule, IntegrityRule::DecodedMatchesCorrect(_)));
}

#[test]
fn test_feed_with_short_field_names() {
    let puzzle = DailyPuzzle::from_json(&common::feed_json()).expect("valid feed");
    assert_eq!(puzzle.number(), 779);
    assert_eq!(puzzle.date(), NaiveDate::from_ymd_opt(2026, 2, 17).expect("valid date"));
    assert_eq!(puzzle.theme(), Some("Water"));
    assert_eq!(puzzle.chain().links()[0].correct_option(), "shrk");
    assert_eq!(puzzle.chain().links()[0].emoji(), Some("🦈"));
    assert_eq!(puzzle.chain().links()[3].decoded_word(), "rain");
}

#[test]
fn test_feed_explicit_number_wins() {
    let json = common::feed_json().replacen("\"date\"", "\"number\": 4, \"date\"", 1);
    let puzzle = DailyPuzzle::from_json(&json).expect("valid feed");
    assert_eq!(puzzle.number(), 4);
}

#[test]
fn test_feed_with_bad_link_reports_integrity() {
    let json = common::feed_json().replace("\"answer\": \"bw\"", "\"answer\": \"bo\"");
    let err = DailyPuzzle::from_json(&json).unwrap_err();
    assert_eq!(err.link(), Some(4));
}

#[test]
fn test_chain_serializes_back_to_records() {
    let chain = common::chain();
    let json = serde_json::to_string(&chain).expect("serializes");
    let parsed: PuzzleChain = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(parsed, chain);
}
