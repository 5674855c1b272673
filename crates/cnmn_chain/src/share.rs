//! Share text for a finished chain.

use super::summary::{ResultGlyph, SessionSummary};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Characters used for each result glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    clean: String,
    missed: String,
}

impl GlyphSet {
    /// Creates a glyph set from explicit symbols.
    pub fn new(clean: impl Into<String>, missed: impl Into<String>) -> Self {
        Self {
            clean: clean.into(),
            missed: missed.into(),
        }
    }

    /// Symbol for one glyph.
    pub fn symbol(&self, glyph: ResultGlyph) -> &str {
        match glyph {
            ResultGlyph::Clean => &self.clean,
            ResultGlyph::Missed => &self.missed,
        }
    }

    /// Renders a glyph row.
    pub fn row(&self, glyphs: &[ResultGlyph]) -> String {
        glyphs.iter().map(|g| self.symbol(*g)).collect()
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new("🟩", "🟨")
    }
}

/// Formats a duration as `M:SS`. Minutes are not wrapped into hours.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Renders the share card for a completed chain.
///
/// ```
/// # use cnmn_chain::{share_text, GlyphSet, SessionSummary};
/// # use chrono::{DateTime, TimeDelta};
/// let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
/// let end = start + TimeDelta::seconds(67);
/// let summary = SessionSummary::new(start, end, vec![0, 1, 0, 0, 0, 0]);
/// let text = share_text(779, &summary, &GlyphSet::new("o", "x"));
/// assert_eq!(text, "cnmn #779\noxoooo\n⏱ 1:07 · 1 miss");
/// ```
#[instrument(skip(summary, glyphs))]
pub fn share_text(puzzle_number: u32, summary: &SessionSummary, glyphs: &GlyphSet) -> String {
    let misses = *summary.total_misses();
    let noun = if misses == 1 { "miss" } else { "misses" };
    format!(
        "cnmn #{}\n{}\n⏱ {} · {} {}",
        puzzle_number,
        glyphs.row(summary.result_glyphs()),
        format_elapsed(summary.elapsed()),
        misses,
        noun
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use strum::IntoEnumIterator;

    #[test]
    fn test_elapsed_formatting() {
        assert_eq!(format_elapsed(TimeDelta::seconds(0)), "0:00");
        assert_eq!(format_elapsed(TimeDelta::seconds(67)), "1:07");
        assert_eq!(format_elapsed(TimeDelta::seconds(3_725)), "62:05");
        assert_eq!(format_elapsed(TimeDelta::seconds(-5)), "0:00");
    }

    #[test]
    fn test_default_glyphs_are_distinct() {
        let set = GlyphSet::default();
        let symbols: Vec<&str> = ResultGlyph::iter().map(|g| set.symbol(g)).collect();
        assert_eq!(symbols.len(), 2);
        assert_ne!(symbols[0], symbols[1]);
    }

    #[test]
    fn test_perfect_share_text() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let summary = SessionSummary::new(start, start + TimeDelta::seconds(42), vec![0; 6]);
        assert_eq!(
            share_text(12, &summary, &GlyphSet::default()),
            "cnmn #12\n🟩🟩🟩🟩🟩🟩\n⏱ 0:42 · 0 misses"
        );
    }
}
