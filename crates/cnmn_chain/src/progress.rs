//! Mutable per-link progress and the session snapshot.

use super::link::CHAIN_LENGTH;
use super::phases::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attempt state for one link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProgress {
    eliminated_options: BTreeSet<String>,
    solved: bool,
    miss_count: u32,
}

impl LinkProgress {
    /// Options tried and found wrong.
    pub fn eliminated_options(&self) -> &BTreeSet<String> {
        &self.eliminated_options
    }

    /// Returns true if `option` was already eliminated.
    pub fn is_eliminated(&self, option: &str) -> bool {
        self.eliminated_options.contains(option)
    }

    /// Whether the link has been solved.
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Wrong guesses before solving.
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    /// True for a link nobody has guessed on yet.
    pub fn is_untouched(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn record_miss(&mut self, option: String) {
        self.eliminated_options.insert(option);
        self.miss_count += 1;
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }
}

/// Complete session state, doubling as the persistence snapshot.
///
/// A host may serialize this value at any time and hand it back to
/// [`ChainEngine::restore`](crate::ChainEngine::restore) later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    current_link_index: usize,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    progress: Vec<LinkProgress>,
}

impl SessionState {
    /// A fresh, unstarted session.
    pub fn new() -> Self {
        Self {
            current_link_index: 0,
            start_time: None,
            end_time: None,
            progress: vec![LinkProgress::default(); CHAIN_LENGTH],
        }
    }

    /// Index of the link awaiting a guess; [`CHAIN_LENGTH`] once complete.
    pub fn current_link_index(&self) -> usize {
        self.current_link_index
    }

    /// Phase encoded by the current index.
    pub fn phase(&self) -> Phase {
        Phase::from_index(self.current_link_index)
    }

    /// When the session left the unstarted condition.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// When the final link was solved.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Per-link progress in chain order.
    pub fn progress(&self) -> &[LinkProgress] {
        &self.progress
    }

    /// Sum of misses across all links.
    pub fn total_misses(&self) -> u32 {
        self.progress.iter().map(LinkProgress::miss_count).sum()
    }

    pub(crate) fn progress_mut(&mut self, index: usize) -> Option<&mut LinkProgress> {
        self.progress.get_mut(index)
    }

    pub(crate) fn set_start_time(&mut self, instant: DateTime<Utc>) {
        self.start_time = Some(instant);
    }

    pub(crate) fn advance(&mut self, now: DateTime<Utc>) {
        self.current_link_index += 1;
        if self.current_link_index >= CHAIN_LENGTH {
            self.end_time = Some(now);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
