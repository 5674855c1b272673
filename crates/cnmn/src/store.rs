//! On-disk snapshots of in-progress sessions, one file per puzzle date.

use chrono::NaiveDate;
use cnmn_chain::SessionState;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Snapshot store error.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reads and writes [`SessionState`] snapshots as pretty JSON.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File holding the snapshot for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    /// Writes the snapshot for `date`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory or file cannot be written.
    #[instrument(skip(self, state), fields(index = state.current_link_index()))]
    pub fn save(&self, date: NaiveDate, state: &SessionState) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            StoreError::new(format!("Failed to create '{}': {}", self.dir.display(), e))
        })?;
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::new(format!("Failed to serialize snapshot: {}", e)))?;
        let path = self.path_for(date);
        std::fs::write(&path, json)
            .map_err(|e| StoreError::new(format!("Failed to write '{}': {}", path.display(), e)))?;
        debug!(path = %path.display(), "Snapshot saved");
        Ok(())
    }

    /// Reads the snapshot for `date`. Returns `None` if none was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(self))]
    pub fn load(&self, date: NaiveDate) -> Result<Option<SessionState>, StoreError> {
        let path = self.path_for(date);
        if !path.exists() {
            debug!(path = %path.display(), "No snapshot");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| StoreError::new(format!("Failed to read '{}': {}", path.display(), e)))?;
        let state = serde_json::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse '{}': {}", path.display(), e)))?;
        info!(path = %path.display(), "Snapshot loaded");
        Ok(Some(state))
    }

    /// Deletes the snapshot for `date` if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be removed.
    #[instrument(skip(self))]
    pub fn remove(&self, date: NaiveDate) -> Result<(), StoreError> {
        let path = self.path_for(date);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                StoreError::new(format!("Failed to remove '{}': {}", path.display(), e))
            })?;
            info!(path = %path.display(), "Snapshot removed");
        }
        Ok(())
    }
}
