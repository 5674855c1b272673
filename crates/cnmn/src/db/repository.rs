//! Database repository for completed chains.

use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use tracing::{debug, info, instrument};

use crate::db::{ChainResult, DbError, MIGRATIONS, NewChainResult, ResultStats, schema};

/// Database repository for the results history.
#[derive(Debug, Clone)]
pub struct ResultRepository {
    db_path: String,
}

impl ResultRepository {
    /// Creates a repository for the database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is empty.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        if db_path.trim().is_empty() {
            return Err(DbError::new("Database path is empty"));
        }
        info!(path = %db_path, "Creating ResultRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Records a completed chain.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the puzzle number is already recorded or a
    /// database error occurs.
    #[instrument(
        skip(self, result),
        fields(number = result.puzzle_number(), misses = result.total_misses())
    )]
    pub fn record_result(&self, result: NewChainResult) -> Result<ChainResult, DbError> {
        debug!("Recording chain result");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::chain_results::table)
            .values(&result)
            .returning(ChainResult::as_returning())
            .get_result(&mut conn)?;

        info!(id = stored.id(), number = stored.puzzle_number(), "Chain result recorded");
        Ok(stored)
    }

    /// Gets the result for a puzzle number. Returns `None` if not played.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_by_number(&self, puzzle_number: i32) -> Result<Option<ChainResult>, DbError> {
        debug!("Looking up result by puzzle number");
        let mut conn = self.connection()?;

        let result = schema::chain_results::table
            .filter(schema::chain_results::puzzle_number.eq(puzzle_number))
            .select(ChainResult::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(found = result.is_some(), "Lookup finished");
        Ok(result)
    }

    /// Lists up to `limit` results, most recently completed first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_recent(&self, limit: u32) -> Result<Vec<ChainResult>, DbError> {
        debug!("Listing recent results");
        let mut conn = self.connection()?;

        let results = schema::chain_results::table
            .order((
                schema::chain_results::completed_at.desc(),
                schema::chain_results::id.desc(),
            ))
            .limit(i64::from(limit))
            .select(ChainResult::as_select())
            .load(&mut conn)?;

        info!(count = results.len(), "Results loaded");
        Ok(results)
    }

    /// Aggregates the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn aggregated_stats(&self) -> Result<ResultStats, DbError> {
        debug!("Computing aggregated stats");
        let mut conn = self.connection()?;

        let results = schema::chain_results::table
            .select(ChainResult::as_select())
            .load(&mut conn)?;

        let played = results.len() as i32;
        let perfect = results.iter().filter(|r| r.is_perfect()).count() as i32;
        let total_misses = results.iter().map(|r| *r.total_misses()).sum();
        let best_seconds = results.iter().map(|r| *r.elapsed_seconds()).min();
        let stats = ResultStats::new(played, perfect, total_misses, best_seconds);

        info!(
            played,
            perfect,
            total_misses,
            average = %format!("{:.2}", stats.average_misses()),
            "Aggregated stats computed"
        );
        Ok(stats)
    }
}
