//! Daily puzzle feed: one dated, numbered chain.

use super::error::{ChainError, IntegrityRule};
use super::link::{LinkRecord, PuzzleChain};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Days from the common era to 2024-01-01, the date of puzzle #1.
const PUZZLE_EPOCH_DAYS_FROM_CE: i32 = 738_886;

/// Returns the puzzle number for `date`, counting 2024-01-01 as #1.
///
/// Dates before the first puzzle have no number.
#[instrument]
pub fn puzzle_number(date: NaiveDate) -> Option<u32> {
    let days = date.num_days_from_ce() - PUZZLE_EPOCH_DAYS_FROM_CE;
    u32::try_from(days + 1).ok().filter(|n| *n > 0)
}

/// A day's feed entry as it arrives over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPuzzleRecord {
    /// Explicit puzzle number; derived from `date` when absent.
    #[serde(default)]
    pub number: Option<u32>,
    /// Publication date.
    #[serde(alias = "publicationDate")]
    pub date: NaiveDate,
    /// Theme line shown alongside the puzzle.
    #[serde(default)]
    pub theme: Option<String>,
    /// Authored links, validated on load.
    pub links: Vec<LinkRecord>,
}

/// A validated daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    number: u32,
    date: NaiveDate,
    theme: Option<String>,
    chain: PuzzleChain,
}

impl DailyPuzzle {
    /// Validates a feed record.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DataIntegrity`] if the chain is malformed or the
    /// date precedes puzzle #1 with no explicit number.
    #[instrument(skip(record), fields(date = %record.date))]
    pub fn from_record(record: DailyPuzzleRecord) -> Result<Self, ChainError> {
        let number = match record.number {
            Some(number) => number,
            None => puzzle_number(record.date).ok_or_else(|| {
                warn!("Feed date precedes the first puzzle");
                ChainError::integrity(IntegrityRule::Malformed(format!(
                    "date {} precedes puzzle #1",
                    record.date
                )))
            })?,
        };
        let chain = PuzzleChain::load(record.links)?;
        info!(number, "Daily puzzle loaded");
        Ok(Self {
            number,
            date: record.date,
            theme: record.theme,
            chain,
        })
    }

    /// Parses and validates a JSON feed entry.
    ///
    /// # Errors
    ///
    /// Syntax and shape errors are reported as [`IntegrityRule::Malformed`].
    #[instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        debug!("Parsing daily puzzle JSON");
        let record: DailyPuzzleRecord = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Feed JSON rejected");
            ChainError::integrity(IntegrityRule::Malformed(e.to_string()))
        })?;
        Self::from_record(record)
    }

    /// Puzzle identifier used in share text.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Publication date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Theme line, if authored.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// The day's chain.
    pub fn chain(&self) -> &PuzzleChain {
        &self.chain
    }

    /// Consumes the puzzle, returning its chain.
    pub fn into_chain(self) -> PuzzleChain {
        self.chain
    }
}
