//! Load-time validation of authored chains.
//!
//! Every rule fails fast with [`ChainError::DataIntegrity`] naming the link
//! and the rule, so the engine never re-checks chain structure.

use super::error::{ChainError, IntegrityRule};
use super::link::{CHAIN_LENGTH, Link, LinkRecord, OPTION_COUNT, PuzzleChain};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Link rules
// ─────────────────────────────────────────────────────────────

/// Rule: text fields carry content.
pub struct FieldsPresent;

impl FieldsPresent {
    /// Checks that no text field is blank.
    #[instrument(skip(record))]
    pub fn check(index: usize, record: &LinkRecord) -> Result<(), ChainError> {
        if record.compressed.trim().is_empty() {
            return Err(ChainError::at_link(index, IntegrityRule::BlankField("compressed")));
        }
        if record.decoded_word.trim().is_empty() {
            return Err(ChainError::at_link(index, IntegrityRule::BlankField("decodedWord")));
        }
        if record.options.iter().any(|o| o.trim().is_empty()) {
            return Err(ChainError::at_link(index, IntegrityRule::BlankField("options")));
        }
        Ok(())
    }
}

/// Rule: exactly [`OPTION_COUNT`] distinct options, one of them correct.
pub struct OptionsWellFormed;

impl OptionsWellFormed {
    /// Checks option count, uniqueness and the presence of the answer.
    #[instrument(skip(record))]
    pub fn check(index: usize, record: &LinkRecord) -> Result<(), ChainError> {
        if record.options.len() != OPTION_COUNT {
            return Err(ChainError::at_link(
                index,
                IntegrityRule::OptionCount {
                    expected: OPTION_COUNT,
                    found: record.options.len(),
                },
            ));
        }

        let mut seen = HashSet::new();
        for option in &record.options {
            if !seen.insert(option.as_str()) {
                return Err(ChainError::at_link(
                    index,
                    IntegrityRule::DuplicateOption(option.clone()),
                ));
            }
        }

        if !seen.contains(record.correct_option.as_str()) {
            return Err(ChainError::at_link(
                index,
                IntegrityRule::CorrectOptionMissing(record.correct_option.clone()),
            ));
        }
        Ok(())
    }
}

/// Rule: category on the first link only, bridge on every link but the last.
pub struct PlacementRules;

impl PlacementRules {
    /// Checks category and bridge placement for position `index`.
    #[instrument(skip(record))]
    pub fn check(index: usize, record: &LinkRecord) -> Result<(), ChainError> {
        let has_category = record
            .category
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());
        if has_category != (index == 0) {
            return Err(ChainError::at_link(index, IntegrityRule::CategoryPlacement));
        }

        let has_bridge = record
            .bridge_hint
            .as_deref()
            .is_some_and(|b| !b.trim().is_empty());
        if has_bridge != (index + 1 < CHAIN_LENGTH) {
            return Err(ChainError::at_link(index, IntegrityRule::BridgePlacement));
        }
        Ok(())
    }
}

/// Rule: the decoded word is never the correct option itself.
pub struct DecodedDistinct;

impl DecodedDistinct {
    /// Checks the decoded word against the correct option, ignoring case.
    #[instrument(skip(record))]
    pub fn check(index: usize, record: &LinkRecord) -> Result<(), ChainError> {
        if record
            .decoded_word
            .trim()
            .eq_ignore_ascii_case(record.correct_option.trim())
        {
            return Err(ChainError::at_link(
                index,
                IntegrityRule::DecodedMatchesCorrect(record.decoded_word.clone()),
            ));
        }
        Ok(())
    }
}

/// Composite: all link rules, in the order they are reported.
pub struct LinkRules;

impl LinkRules {
    /// Validates one record at its position in the chain.
    #[instrument(skip(record))]
    pub fn check(index: usize, record: &LinkRecord) -> Result<(), ChainError> {
        FieldsPresent::check(index, record)?;
        OptionsWellFormed::check(index, record)?;
        PlacementRules::check(index, record)?;
        DecodedDistinct::check(index, record)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Chain loading
// ─────────────────────────────────────────────────────────────

impl PuzzleChain {
    /// Validates authored records and builds an immutable chain.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DataIntegrity`] for the first rule any link breaks.
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn load(records: Vec<LinkRecord>) -> Result<Self, ChainError> {
        if records.len() != CHAIN_LENGTH {
            warn!(found = records.len(), "Chain has wrong length");
            return Err(ChainError::integrity(IntegrityRule::ChainLength {
                expected: CHAIN_LENGTH,
                found: records.len(),
            }));
        }

        let mut links = Vec::with_capacity(CHAIN_LENGTH);
        for (index, record) in records.into_iter().enumerate() {
            LinkRules::check(index, &record).inspect_err(|e| {
                warn!(index, error = %e, "Link rejected");
            })?;
            links.push(Link {
                category: record.category.filter(|_| index == 0),
                compressed: record.compressed,
                options: record.options,
                correct_option: record.correct_option,
                decoded_word: record.decoded_word,
                bridge_hint: record.bridge_hint.filter(|_| index + 1 < CHAIN_LENGTH),
                emoji: record.emoji,
            });
        }

        debug!("Chain loaded");
        Ok(Self { links })
    }
}
