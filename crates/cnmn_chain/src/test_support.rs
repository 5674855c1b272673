//! Shared fixtures for unit tests.

use crate::{ChainEngine, LinkRecord, ManualClock, PuzzleChain};
use chrono::DateTime;

pub(crate) fn fixture_records() -> Vec<LinkRecord> {
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

pub(crate) fn fixture_chain() -> PuzzleChain {
    PuzzleChain::load(fixture_records()).expect("fixture chain is valid")
}

pub(crate) fn fixed_clock() -> ManualClock {
    ManualClock::new(DateTime::from_timestamp(1_771_315_200, 0).expect("valid timestamp"))
}

pub(crate) fn solve_all(engine: &mut ChainEngine) {
    while let Some(index) = engine.phase().link_index() {
        let answer = engine
            .chain()
            .link(index)
            .expect("link in range")
            .correct_option()
            .to_string();
        engine.submit_guess(&answer).expect("correct guess accepted");
    }
}
