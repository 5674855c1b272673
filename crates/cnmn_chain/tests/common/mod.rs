//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::DateTime;
use cnmn_chain::{ChainEngine, LinkRecord, ManualClock, PuzzleChain};

/// Six linked records: shark → fin → water → rain → bow → knot.
pub fn records() -> Vec<LinkRecord> {
    #[rustfmt::skip]
    let rows: [(Option<&str>, &str, [&str; 4], &str, &str, Option<&str>); 6] = [
        (Some("Ocean animals"), "shrk", ["shrk", "cml", "frg", "lbrtr"], "shrk", "shark", Some("Sharks cut the water with a fin")),
        (None, "fn", ["tl", "fn", "clw", "hrn"], "fn", "fin", Some("Fins move through water")),
        (None, "wtr", ["snd", "wtr", "rck", "c"], "wtr", "water", Some("Water falls as rain")),
        (None, "rn", ["snw", "hl", "rn", "fg"], "rn", "rain", Some("Rain and sun make a bow")),
        (None, "bw", ["rrw", "knt", "bw", "rbn"], "bw", "bow", Some("A bow is a kind of knot")),
        (None, "knt", ["lp", "brd", "chn", "knt"], "knt", "knot", None),
    ];
    rows.into_iter()
        .map(|(category, compressed, options, correct, decoded, bridge)| LinkRecord {
            category: category.map(String::from),
            compressed: compressed.to_string(),
            options: options.map(String::from).to_vec(),
            correct_option: correct.to_string(),
            decoded_word: decoded.to_string(),
            bridge_hint: bridge.map(String::from),
            emoji: None,
        })
        .collect()
}

pub fn chain() -> PuzzleChain {
    PuzzleChain::load(records()).expect("fixture chain is valid")
}

pub fn clock() -> ManualClock {
    ManualClock::new(DateTime::from_timestamp(1_771_315_200, 0).expect("valid timestamp"))
}

pub fn engine() -> (ChainEngine, ManualClock) {
    let clock = clock();
    (ChainEngine::with_clock(chain(), clock.clone()), clock)
}

/// Correct option for the link awaiting a guess.
pub fn answer(engine: &ChainEngine) -> String {
    let index = engine.phase().link_index().expect("chain not complete");
    engine
        .chain()
        .link(index)
        .expect("link in range")
        .correct_option()
        .to_string()
}

/// Some wrong option still on offer for the link awaiting a guess.
pub fn wrong_option(engine: &ChainEngine) -> String {
    let correct = answer(engine);
    engine
        .current_prompt()
        .expect("prompt available")
        .options
        .into_iter()
        .find(|o| *o != correct)
        .expect("a wrong option remains")
}

/// The feed JSON for the fixture chain using the short field names.
pub fn feed_json() -> String {
    r#"{
  "date": "2026-02-17",
  "theme": "Water",
  "links": [
    {"category": "Ocean animals", "compressed": "shrk", "options": ["shrk", "cml", "frg", "lbrtr"], "answer": "shrk", "decoded": "shark", "emoji": "🦈", "bridge": "Sharks cut the water with a fin"},
    {"category": null, "compressed": "fn", "options": ["tl", "fn", "clw", "hrn"], "answer": "fn", "decoded": "fin", "bridge": "Fins move through water"},
    {"compressed": "wtr", "options": ["snd", "wtr", "rck", "c"], "answer": "wtr", "decoded": "water", "bridge": "Water falls as rain"},
    {"compressed": "rn", "options": ["snw", "hl", "rn", "fg"], "answer": "rn", "decoded": "rain", "bridge": "Rain and sun make a bow"},
    {"compressed": "bw", "options": ["rrw", "knt", "bw", "rbn"], "answer": "bw", "decoded": "bow", "bridge": "A bow is a kind of knot"},
    {"compressed": "knt", "options": ["lp", "brd", "chn", "knt"], "answer": "knt", "decoded": "knot", "bridge": null}
  ]
}"#
    .to_string()
}
