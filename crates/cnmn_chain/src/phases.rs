//! Phases of the chain state machine.

use super::link::CHAIN_LENGTH;
use serde::{Deserialize, Serialize};

/// Where a session stands in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a guess on the link at this zero-based index.
    AwaitingGuess(usize),
    /// Every link has been solved.
    Complete,
}

impl Phase {
    /// Maps a current-link index onto a phase. `CHAIN_LENGTH` and beyond are terminal.
    pub fn from_index(index: usize) -> Self {
        if index >= CHAIN_LENGTH {
            Phase::Complete
        } else {
            Phase::AwaitingGuess(index)
        }
    }

    /// Returns the index of the link awaiting a guess, if any.
    pub fn link_index(&self) -> Option<usize> {
        match self {
            Phase::AwaitingGuess(index) => Some(*index),
            Phase::Complete => None,
        }
    }

    /// Returns true once the chain is finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, Phase::Complete)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingGuess(index) => write!(f, "awaiting a guess on link {}", index),
            Phase::Complete => write!(f, "complete"),
        }
    }
}
