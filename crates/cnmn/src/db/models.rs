//! Database models for recorded chains.

use chrono::{NaiveDate, NaiveDateTime};
use cnmn_chain::{DailyPuzzle, GlyphSet, SessionSummary};
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use crate::db::{DbError, schema};

/// A completed chain as stored.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::chain_results)]
pub struct ChainResult {
    id: i32,
    puzzle_number: i32,
    puzzle_date: NaiveDate,
    total_misses: i32,
    elapsed_seconds: i64,
    glyph_row: String,
    completed_at: NaiveDateTime,
}

impl ChainResult {
    /// True when the chain was solved without a miss.
    pub fn is_perfect(&self) -> bool {
        self.total_misses == 0
    }
}

/// Insertable result for a newly completed chain.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::chain_results)]
pub struct NewChainResult {
    puzzle_number: i32,
    puzzle_date: NaiveDate,
    total_misses: i32,
    elapsed_seconds: i64,
    glyph_row: String,
    completed_at: NaiveDateTime,
}

impl NewChainResult {
    /// Builds a row from a puzzle and the summary of its completed session.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a counter does not fit its column.
    #[instrument(skip_all, fields(number = puzzle.number()))]
    pub fn from_summary(
        puzzle: &DailyPuzzle,
        summary: &SessionSummary,
        glyphs: &GlyphSet,
    ) -> Result<Self, DbError> {
        let puzzle_number = i32::try_from(puzzle.number())
            .map_err(|_| DbError::new(format!("Puzzle number {} out of range", puzzle.number())))?;
        let total_misses = i32::try_from(*summary.total_misses())
            .map_err(|_| DbError::new("Miss count out of range"))?;

        Ok(Self::new(
            puzzle_number,
            puzzle.date(),
            total_misses,
            summary.elapsed().num_seconds().max(0),
            glyphs.row(summary.result_glyphs()),
            summary.finished_at().naive_utc(),
        ))
    }
}

/// Aggregated statistics across all recorded chains.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ResultStats {
    played: i32,
    perfect: i32,
    total_misses: i32,
    best_seconds: Option<i64>,
}

impl ResultStats {
    /// Creates new aggregated statistics.
    #[instrument]
    pub fn new(played: i32, perfect: i32, total_misses: i32, best_seconds: Option<i64>) -> Self {
        Self {
            played,
            perfect,
            total_misses,
            best_seconds,
        }
    }

    /// Mean misses per chain; zero when nothing has been played.
    #[instrument(skip(self))]
    pub fn average_misses(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.total_misses as f64 / self.played as f64
        }
    }

    /// Share of chains solved without a miss, as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn perfect_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            (self.perfect as f64 / self.played as f64) * 100.0
        }
    }
}
