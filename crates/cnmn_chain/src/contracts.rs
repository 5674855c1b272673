//! Contract-based validation for guesses.
//!
//! Contracts formalize Hoare-style reasoning: {P} guess {Q}. Preconditions
//! run on every guess; postconditions run in debug builds.

use super::action::Guess;
use super::engine::ChainEngine;
use super::error::{ChainError, IntegrityRule};
use super::invariants;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ChainError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ChainError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the option is one of the current link's four.
///
/// Once the chain is complete there is no current link; an option no link
/// offers is still an invalid option rather than a state error.
pub struct OptionKnown;

impl OptionKnown {
    /// Rejects an option the current link does not offer.
    #[instrument(skip(engine))]
    pub fn check(guess: &Guess, engine: &ChainEngine) -> Result<(), ChainError> {
        let phase = engine.phase();
        let known = match phase.link_index().and_then(|i| engine.chain().link(i)) {
            Some(link) => link.offers(guess.option()),
            None => engine.chain().mentions(guess.option()),
        };
        if known {
            Ok(())
        } else {
            Err(ChainError::invalid_option(guess.option(), phase))
        }
    }
}

/// Precondition: the session still awaits a guess.
pub struct AwaitingGuess;

impl AwaitingGuess {
    /// Rejects any guess once the chain is complete.
    #[instrument(skip(engine))]
    pub fn check(engine: &ChainEngine) -> Result<(), ChainError> {
        let phase = engine.phase();
        if phase.is_complete() {
            Err(ChainError::invalid_state("submit a guess", phase))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the option has not been eliminated already.
pub struct NotEliminated;

impl NotEliminated {
    /// Rejects an option already eliminated on the current link.
    #[instrument(skip(engine))]
    pub fn check(guess: &Guess, engine: &ChainEngine) -> Result<(), ChainError> {
        let phase = engine.phase();
        let eliminated = phase
            .link_index()
            .and_then(|i| engine.state().progress().get(i))
            .is_some_and(|p| p.is_eliminated(guess.option()));
        if eliminated {
            Err(ChainError::invalid_option(guess.option(), phase))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a guess is legal if its option is currently offered.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates all preconditions for a guess.
    #[instrument(skip(engine))]
    pub fn check(guess: &Guess, engine: &ChainEngine) -> Result<(), ChainError> {
        OptionKnown::check(guess, engine)?;
        AwaitingGuess::check(engine)?;
        NotEliminated::check(guess, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Option belongs to the current link
/// - Session is not complete
/// - Option not already eliminated
///
/// Postconditions:
/// - Session invariants hold
/// - Progress of links retired before the guess is unchanged
/// - Eliminations only grow
pub struct GuessContract;

impl Contract<ChainEngine, Guess> for GuessContract {
    fn pre(engine: &ChainEngine, guess: &Guess) -> Result<(), ChainError> {
        LegalGuess::check(guess, engine)
    }

    fn post(before: &ChainEngine, after: &ChainEngine) -> Result<(), ChainError> {
        invariants::check_engine(after).map_err(|violations| {
            let descriptions = invariants::describe(&violations);
            warn!(%descriptions, "Postcondition failed");
            ChainError::integrity(IntegrityRule::Invariant(descriptions))
        })?;

        let retired = before.state().current_link_index();
        let frozen = before.state().progress()[..retired.min(before.state().progress().len())]
            .iter()
            .zip(after.state().progress())
            .all(|(b, a)| b == a);
        if !frozen {
            warn!(retired, "Retired link progress changed");
            return Err(ChainError::integrity(IntegrityRule::Invariant(
                "Progress of retired links is frozen".to_string(),
            )));
        }

        let grew = before
            .state()
            .progress()
            .iter()
            .zip(after.state().progress())
            .all(|(b, a)| b.eliminated_options().is_subset(a.eliminated_options()));
        if !grew {
            warn!("Eliminations shrank");
            return Err(ChainError::integrity(IntegrityRule::Invariant(
                "Eliminated options grow monotonically".to_string(),
            )));
        }
        Ok(())
    }
}
