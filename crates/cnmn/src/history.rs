//! Results history business logic layer.

use cnmn_chain::{DailyPuzzle, GlyphSet, SessionSummary};
use tracing::{debug, info, instrument};

use crate::db::{ChainResult, DbError, NewChainResult, ResultRepository, ResultStats};

/// Outcome of recording a finished chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// The result was stored now.
    New(ChainResult),
    /// The puzzle had been recorded on an earlier run; the first result stands.
    AlreadyPlayed(ChainResult),
}

/// Service layer over [`ResultRepository`].
///
/// Keeps the first completion of each puzzle, so replaying a restored
/// session does not overwrite or duplicate history.
#[derive(Debug, Clone)]
pub struct ResultHistory {
    repository: ResultRepository,
}

impl ResultHistory {
    /// Creates a history backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: ResultRepository) -> Self {
        info!("Creating ResultHistory");
        Self { repository }
    }

    /// Opens the database at `db_path`, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument]
    pub fn open(db_path: &str) -> Result<Self, DbError> {
        let repository = ResultRepository::new(db_path.to_string())?;
        repository.run_migrations()?;
        Ok(Self::new(repository))
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &ResultRepository {
        &self.repository
    }

    /// Records a completed chain unless that puzzle was already recorded.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip_all, fields(number = puzzle.number()))]
    pub fn record(
        &self,
        puzzle: &DailyPuzzle,
        summary: &SessionSummary,
        glyphs: &GlyphSet,
    ) -> Result<Recorded, DbError> {
        let row = NewChainResult::from_summary(puzzle, summary, glyphs)?;

        if let Some(existing) = self.repository.get_by_number(*row.puzzle_number())? {
            debug!(id = existing.id(), "Puzzle already recorded");
            return Ok(Recorded::AlreadyPlayed(existing));
        }

        let stored = self.repository.record_result(row)?;
        Ok(Recorded::New(stored))
    }

    /// Returns aggregated stats over every recorded chain.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn stats(&self) -> Result<ResultStats, DbError> {
        self.repository.aggregated_stats()
    }

    /// Returns the most recent results, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent(&self, limit: u32) -> Result<Vec<ChainResult>, DbError> {
        self.repository.list_recent(limit)
    }
}
