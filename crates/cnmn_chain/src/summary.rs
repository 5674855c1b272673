//! End-of-chain statistics.

use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Per-link result symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultGlyph {
    /// Solved with no misses.
    Clean,
    /// Solved after at least one miss.
    Missed,
}

impl ResultGlyph {
    /// Classifies a link by its miss count.
    pub fn from_misses(misses: u32) -> Self {
        if misses == 0 {
            ResultGlyph::Clean
        } else {
            ResultGlyph::Missed
        }
    }
}

/// Summary of a completed session, read by share formatting and result stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// When the session started.
    started_at: DateTime<Utc>,
    /// When the final link was solved.
    finished_at: DateTime<Utc>,
    /// Misses per link, in chain order.
    link_misses: Vec<u32>,
    /// One glyph per link, in chain order.
    result_glyphs: Vec<ResultGlyph>,
    /// Sum of `link_misses`.
    total_misses: u32,
}

impl SessionSummary {
    /// Builds a summary from timestamps and per-link miss counts.
    #[instrument(skip(link_misses))]
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        link_misses: Vec<u32>,
    ) -> Self {
        let result_glyphs = link_misses.iter().copied().map(ResultGlyph::from_misses).collect();
        let total_misses = link_misses.iter().sum();
        Self {
            started_at,
            finished_at,
            link_misses,
            result_glyphs,
            total_misses,
        }
    }

    /// Time from start to the final solve.
    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }

    /// True when every link was solved without a miss.
    pub fn is_perfect(&self) -> bool {
        self.total_misses == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_follow_misses() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let end = start + TimeDelta::seconds(75);
        let summary = SessionSummary::new(start, end, vec![0, 2, 0, 0, 1, 0]);
        assert_eq!(summary.result_glyphs()[1], ResultGlyph::Missed);
        assert_eq!(summary.result_glyphs()[0], ResultGlyph::Clean);
        assert_eq!(*summary.total_misses(), 3);
        assert_eq!(summary.elapsed(), TimeDelta::seconds(75));
        assert!(!summary.is_perfect());
    }

    #[test]
    fn test_glyph_display_is_lowercase() {
        assert_eq!(ResultGlyph::Missed.to_string(), "missed");
    }
}
