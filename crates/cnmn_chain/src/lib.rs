//! Chain progression logic for cnmn, a daily word-chain puzzle.
//!
//! A player decodes a disguised word and picks its meaning from four
//! options, across six linked puzzles. This crate owns the state machine
//! that walks the chain; rendering, audio and storage belong to the host.
//!
//! # Architecture
//!
//! - **Data**: [`LinkRecord`] feed entries validated into a [`PuzzleChain`]
//! - **Engine**: [`ChainEngine`] with typed [`GuessResult`] outcomes
//! - **Contracts**: preconditions and postconditions around every guess
//! - **Invariants**: session properties re-checked on guesses and restores
//! - **Summary**: [`SessionSummary`] and [`share_text`]
//!
//! # Example
//!
//! ```no_run
//! use cnmn_chain::{ChainEngine, DailyPuzzle, GuessResult};
//!
//! # fn example(json: &str) -> Result<(), cnmn_chain::ChainError> {
//! let puzzle = DailyPuzzle::from_json(json)?;
//! let mut engine = ChainEngine::new(puzzle.into_chain());
//! let prompt = engine.current_prompt()?;
//! match engine.submit_guess(&prompt.options[0])? {
//!     GuessResult::Correct { decoded_word, .. } => println!("{decoded_word}"),
//!     GuessResult::Incorrect { remaining, .. } => println!("{remaining} left"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod engine;
mod error;
mod link;
mod loader;
mod phases;
mod progress;
mod puzzle;
mod share;
mod summary;

pub mod contracts;
pub mod invariants;

#[cfg(test)]
mod test_support;

pub use action::{Guess, GuessResult, Prompt};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::ChainEngine;
pub use error::{ChainError, IntegrityRule, IntegrityViolation};
pub use link::{CHAIN_LENGTH, Link, LinkRecord, OPTION_COUNT, PuzzleChain};
pub use loader::LinkRules;
pub use phases::Phase;
pub use progress::{LinkProgress, SessionState};
pub use puzzle::{DailyPuzzle, DailyPuzzleRecord, puzzle_number};
pub use share::{GlyphSet, format_elapsed, share_text};
pub use summary::{ResultGlyph, SessionSummary};
