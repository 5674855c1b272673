//! Error taxonomy for loading chains and driving a session.
//!
//! Wrong guesses are not errors. Everything here is terminal for the
//! session: the host either reloads a valid chain or discards the session.

use super::phases::Phase;
use std::fmt;
use tracing::instrument;

/// Structural rule broken by a chain, a link, or a session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IntegrityRule {
    /// The chain does not contain exactly the expected number of links.
    #[display("chain must have {} links, found {}", expected, found)]
    ChainLength {
        /// Required number of links.
        expected: usize,
        /// Number of links supplied.
        found: usize,
    },

    /// A link does not offer exactly the expected number of options.
    #[display("link must offer {} options, found {}", expected, found)]
    OptionCount {
        /// Required number of options.
        expected: usize,
        /// Number of options supplied.
        found: usize,
    },

    /// Two options of the same link are identical.
    #[display("option {:?} appears more than once", _0)]
    DuplicateOption(String),

    /// The correct option is not one of the link's options.
    #[display("correct option {:?} is not among the options", _0)]
    CorrectOptionMissing(String),

    /// A category is present on a later link or missing on the first.
    #[display("category must be present on the first link and only there")]
    CategoryPlacement,

    /// A bridge hint is missing before the last link or present on it.
    #[display("bridge hint must be present on every link except the last")]
    BridgePlacement,

    /// A required text field is empty or whitespace.
    #[display("field `{}` must not be blank", _0)]
    BlankField(&'static str),

    /// The decoded word is the correct option itself.
    #[display("decoded word {:?} must differ from the correct option", _0)]
    DecodedMatchesCorrect(String),

    /// Eliminating the guessed option would leave nothing to choose from.
    #[display("eliminating {:?} would leave no options on offer", _0)]
    NoOptionsRemaining(String),

    /// A snapshot carries the wrong number of progress entries.
    #[display("snapshot has {} progress entries, expected {}", found, expected)]
    ProgressLength {
        /// Required number of entries.
        expected: usize,
        /// Number of entries in the snapshot.
        found: usize,
    },

    /// A snapshot points past the terminal link index.
    #[display("snapshot link index {} is out of range", _0)]
    LinkIndexOutOfRange(usize),

    /// One or more session invariants failed.
    #[display("session invariant violated: {}", _0)]
    Invariant(String),

    /// The feed text could not be parsed into a puzzle.
    #[display("malformed feed: {}", _0)]
    Malformed(String),
}

/// Location and rule of a data integrity failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    /// Zero-based index of the offending link, when one applies.
    pub link: Option<usize>,
    /// The rule that was broken.
    pub rule: IntegrityRule,
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            Some(index) => write!(f, "link {}: {}", index, self.rule),
            None => write!(f, "{}", self.rule),
        }
    }
}

/// Error returned by chain loading and engine operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ChainError {
    /// Operation called in a phase that forbids it.
    #[display("cannot {} while {}", operation, phase)]
    InvalidState {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the engine was in.
        phase: Phase,
    },

    /// Guess names an option that is not currently on offer.
    #[display("option {:?} is not on offer while {}", option, phase)]
    InvalidOption {
        /// The rejected option.
        option: String,
        /// Phase the engine was in.
        phase: Phase,
    },

    /// The chain, a link, or a snapshot breaks a structural invariant.
    #[display("data integrity violation at {}", _0)]
    DataIntegrity(IntegrityViolation),
}

impl std::error::Error for ChainError {}

impl ChainError {
    /// Creates an invalid-state error.
    #[instrument]
    pub fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        Self::InvalidState { operation, phase }
    }

    /// Creates an invalid-option error.
    #[instrument(skip(option))]
    pub fn invalid_option(option: impl Into<String>, phase: Phase) -> Self {
        Self::InvalidOption {
            option: option.into(),
            phase,
        }
    }

    /// Creates an integrity error tied to a specific link.
    #[instrument]
    pub fn at_link(link: usize, rule: IntegrityRule) -> Self {
        Self::DataIntegrity(IntegrityViolation {
            link: Some(link),
            rule,
        })
    }

    /// Creates an integrity error that concerns the chain or snapshot as a whole.
    #[instrument]
    pub fn integrity(rule: IntegrityRule) -> Self {
        Self::DataIntegrity(IntegrityViolation { link: None, rule })
    }

    /// Returns the broken rule if this is an integrity error.
    pub fn rule(&self) -> Option<&IntegrityRule> {
        match self {
            Self::DataIntegrity(violation) => Some(&violation.rule),
            _ => None,
        }
    }

    /// Returns the offending link index if this is a link-level integrity error.
    pub fn link(&self) -> Option<usize> {
        match self {
            Self::DataIntegrity(violation) => violation.link,
            _ => None,
        }
    }
}
