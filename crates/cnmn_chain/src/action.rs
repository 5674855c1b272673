//! First-class guess actions and the values the engine hands back to a host.
//!
//! A guess is a domain event, not a side effect: it can be validated by
//! contracts before it touches session state.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's choice on the link currently awaiting a guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The chosen option, verbatim.
    pub option: String,
}

impl Guess {
    /// Creates a new guess.
    #[instrument(skip(option))]
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
        }
    }

    /// The chosen option.
    pub fn option(&self) -> &str {
        &self.option
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guess {:?}", self.option)
    }
}

/// What the host renders for the link awaiting a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Zero-based link index.
    pub link_index: usize,
    /// Category on the first link, the previous decoded word afterwards.
    pub prompt_text: String,
    /// Disguised spelling to decode.
    pub compressed: String,
    /// Options still on offer, in display order.
    pub options: Vec<String>,
}

/// Outcome of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum GuessResult {
    /// The link is solved; the engine has already advanced.
    #[serde(rename_all = "camelCase")]
    Correct {
        /// Index of the solved link.
        link_index: usize,
        /// The word behind the disguise.
        decoded_word: String,
        /// Bridge to the next link; `None` on the final link.
        bridge_hint: Option<String>,
        /// Decoration to reveal with the word.
        emoji: Option<String>,
        /// True when this guess finished the chain.
        chain_complete: bool,
    },
    /// Wrong option; it has been eliminated and the link stays current.
    #[serde(rename_all = "camelCase")]
    Incorrect {
        /// Index of the link still awaiting a guess.
        link_index: usize,
        /// The eliminated option.
        option: String,
        /// Misses on this link so far.
        miss_count: u32,
        /// Options still on offer.
        remaining: usize,
    },
}

impl GuessResult {
    /// Returns true for a correct guess.
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }

    /// Index of the link the guess was made on.
    pub fn link_index(&self) -> usize {
        match self {
            GuessResult::Correct { link_index, .. } | GuessResult::Incorrect { link_index, .. } => {
                *link_index
            }
        }
    }
}
