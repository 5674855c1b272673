//! The chain progression state machine.

use super::action::{Guess, GuessResult, Prompt};
use super::clock::{Clock, SystemClock};
use super::contracts::{Contract, GuessContract};
use super::error::{ChainError, IntegrityRule};
use super::invariants;
use super::link::{CHAIN_LENGTH, Link, PuzzleChain};
use super::phases::Phase;
use super::progress::{LinkProgress, SessionState};
use super::summary::SessionSummary;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Walks a [`PuzzleChain`], validating guesses and tracking progress.
///
/// One engine owns one session. Calls must be serialized by the host;
/// nothing here blocks or suspends.
#[derive(Debug, Clone)]
pub struct ChainEngine {
    chain: Rc<PuzzleChain>,
    pub(crate) state: SessionState,
    clock: Rc<dyn Clock>,
}

impl ChainEngine {
    /// Creates an unstarted session timed by the wall clock.
    #[instrument(skip(chain))]
    pub fn new(chain: PuzzleChain) -> Self {
        Self::with_clock(chain, SystemClock)
    }

    /// Creates an unstarted session timed by `clock`.
    #[instrument(skip(chain, clock))]
    pub fn with_clock(chain: PuzzleChain, clock: impl Clock + 'static) -> Self {
        info!("Creating chain session");
        Self {
            chain: Rc::new(chain),
            state: SessionState::new(),
            clock: Rc::new(clock),
        }
    }

    /// Rebuilds a session from a snapshot, timed by the wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DataIntegrity`] if the snapshot does not fit the
    /// chain or breaks a session invariant.
    #[instrument(skip(chain, snapshot))]
    pub fn restore(chain: PuzzleChain, snapshot: SessionState) -> Result<Self, ChainError> {
        Self::restore_with_clock(chain, snapshot, SystemClock)
    }

    /// Rebuilds a session from a snapshot, timed by `clock`.
    ///
    /// # Errors
    ///
    /// See [`ChainEngine::restore`].
    #[instrument(skip(chain, snapshot, clock), fields(index = snapshot.current_link_index()))]
    pub fn restore_with_clock(
        chain: PuzzleChain,
        snapshot: SessionState,
        clock: impl Clock + 'static,
    ) -> Result<Self, ChainError> {
        if snapshot.progress().len() != CHAIN_LENGTH {
            warn!(found = snapshot.progress().len(), "Snapshot progress has wrong length");
            return Err(ChainError::integrity(IntegrityRule::ProgressLength {
                expected: CHAIN_LENGTH,
                found: snapshot.progress().len(),
            }));
        }
        if snapshot.current_link_index() > CHAIN_LENGTH {
            warn!("Snapshot index out of range");
            return Err(ChainError::integrity(IntegrityRule::LinkIndexOutOfRange(
                snapshot.current_link_index(),
            )));
        }

        let engine = Self {
            chain: Rc::new(chain),
            state: snapshot,
            clock: Rc::new(clock),
        };
        invariants::check_engine(&engine).map_err(|violations| {
            let descriptions = invariants::describe(&violations);
            warn!(%descriptions, "Snapshot rejected");
            ChainError::integrity(IntegrityRule::Invariant(descriptions))
        })?;

        info!(phase = %engine.phase(), "Session restored");
        Ok(engine)
    }

    /// The chain being played.
    pub fn chain(&self) -> &PuzzleChain {
        &self.chain
    }

    /// Full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Per-link progress, for end-of-chain review.
    pub fn progress(&self) -> &[LinkProgress] {
        self.state.progress()
    }

    /// Returns true once the start time has been stamped.
    pub fn is_started(&self) -> bool {
        self.state.start_time().is_some()
    }

    /// Stamps the start time if the session has not started yet.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if !self.is_started() {
            let now = self.clock.now();
            debug!(%now, "Session started");
            self.state.set_start_time(now);
        }
    }

    /// Returns the prompt and the options still on offer.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidState`] once the chain is complete.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn current_prompt(&self) -> Result<Prompt, ChainError> {
        let (index, link) = self.current_link("read the current prompt")?;

        let prompt_text = if index == 0 {
            link.category().unwrap_or_default().to_string()
        } else {
            self.chain
                .link(index - 1)
                .map(|previous| previous.decoded_word().to_string())
                .unwrap_or_default()
        };

        Ok(Prompt {
            link_index: index,
            prompt_text,
            compressed: link.compressed().to_string(),
            options: self.offered_options(index, link),
        })
    }

    /// Applies a guess to the current link.
    ///
    /// # Errors
    ///
    /// - [`ChainError::InvalidOption`] if the option is not currently offered
    /// - [`ChainError::InvalidState`] if the chain is already complete
    /// - [`ChainError::DataIntegrity`] if eliminating the option would leave
    ///   nothing on offer, or if the guess would break a session invariant
    ///   (the guess is undone first)
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn submit_guess(&mut self, option: &str) -> Result<GuessResult, ChainError> {
        let guess = Guess::new(option);
        GuessContract::pre(self, &guess).inspect_err(|e| {
            warn!(error = %e, "Guess rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let chain = Rc::clone(&self.chain);
        let (index, link) = current_link_of(&chain, self.phase(), "submit a guess")?;

        let result = if link.correct_option() == guess.option() {
            self.accept(index, link)
        } else {
            self.eliminate(index, link, guess.option)?
        };

        #[cfg(debug_assertions)]
        {
            if let Err(e) = GuessContract::post(&before, self) {
                warn!(error = %e, "Guess rolled back");
                *self = before;
                return Err(e);
            }
        }

        Ok(result)
    }

    /// Builds the end-of-chain summary.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidState`] unless the chain is complete.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn summary(&self) -> Result<SessionSummary, ChainError> {
        let phase = self.phase();
        if !phase.is_complete() {
            return Err(ChainError::invalid_state("build a summary", phase));
        }

        let (Some(started_at), Some(finished_at)) = (self.state.start_time(), self.state.end_time())
        else {
            return Err(ChainError::integrity(IntegrityRule::Invariant(
                "complete session is missing a timestamp".to_string(),
            )));
        };

        let link_misses = self.progress().iter().map(LinkProgress::miss_count).collect();
        Ok(SessionSummary::new(started_at, finished_at, link_misses))
    }

    /// Returns a serializable copy of the session state.
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Discards all progress; the chain and clock are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Session reset");
        self.state = SessionState::new();
    }

    fn current_link(&self, operation: &'static str) -> Result<(usize, &Link), ChainError> {
        current_link_of(&self.chain, self.phase(), operation)
    }

    fn offered_options(&self, index: usize, link: &Link) -> Vec<String> {
        let progress = self.state.progress().get(index);
        link.options()
            .iter()
            .filter(|o| !progress.is_some_and(|p| p.is_eliminated(o)))
            .cloned()
            .collect()
    }

    fn accept(&mut self, index: usize, link: &Link) -> GuessResult {
        self.start();
        if let Some(progress) = self.state.progress_mut(index) {
            progress.mark_solved();
        }
        // The wall clock may step backwards; the end never precedes the start.
        let now = self.clock.now();
        let now = self.state.start_time().map_or(now, |start| now.max(start));
        self.state.advance(now);
        let chain_complete = self.phase().is_complete();

        info!(index, chain_complete, "Link solved");
        GuessResult::Correct {
            link_index: index,
            decoded_word: link.decoded_word().to_string(),
            bridge_hint: link.bridge_hint().map(String::from),
            emoji: link.emoji().map(String::from),
            chain_complete,
        }
    }

    fn eliminate(
        &mut self,
        index: usize,
        link: &Link,
        option: String,
    ) -> Result<GuessResult, ChainError> {
        let remaining = self.offered_options(index, link).len().saturating_sub(1);
        if remaining == 0 {
            warn!(index, %option, "Elimination would empty the option set");
            return Err(ChainError::at_link(index, IntegrityRule::NoOptionsRemaining(option)));
        }

        self.start();
        let miss_count = match self.state.progress_mut(index) {
            Some(progress) => {
                progress.record_miss(option.clone());
                progress.miss_count()
            }
            None => {
                return Err(ChainError::integrity(IntegrityRule::ProgressLength {
                    expected: CHAIN_LENGTH,
                    found: self.state.progress().len(),
                }));
            }
        };

        debug!(index, %option, miss_count, remaining, "Option eliminated");
        Ok(GuessResult::Incorrect {
            link_index: index,
            option,
            miss_count,
            remaining,
        })
    }
}

fn current_link_of<'c>(
    chain: &'c PuzzleChain,
    phase: Phase,
    operation: &'static str,
) -> Result<(usize, &'c Link), ChainError> {
    phase
        .link_index()
        .and_then(|index| chain.link(index).map(|link| (index, link)))
        .ok_or_else(|| ChainError::invalid_state(operation, phase))
}
