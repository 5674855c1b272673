//! Line-oriented terminal play loop.

use cnmn_chain::{ChainEngine, ChainError, DailyPuzzle, GuessResult, Prompt, SessionSummary};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

use crate::store::{SnapshotStore, StoreError};

/// Input that abandons the session, keeping the saved snapshot.
pub const QUIT: &str = "q";

/// How a play session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every link was solved.
    Completed(SessionSummary),
    /// The player quit or input ran out.
    Quit,
}

/// Error raised while running a play session.
#[derive(Debug, Display, From, Error)]
pub enum PlayError {
    /// Terminal read or write failed.
    #[display("terminal I/O failed: {}", _0)]
    Io(std::io::Error),
    /// The engine reported a non-recoverable error.
    #[display("{}", _0)]
    Chain(ChainError),
    /// Saving progress failed.
    #[display("{}", _0)]
    Store(StoreError),
}

/// Drives one session over a reader and writer, saving after every guess.
#[derive(Debug)]
pub struct PlaySession<'a, R, W> {
    puzzle: &'a DailyPuzzle,
    store: &'a SnapshotStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> PlaySession<'a, R, W> {
    /// Creates a session over the given terminal streams.
    pub fn new(puzzle: &'a DailyPuzzle, store: &'a SnapshotStore, input: R, output: W) -> Self {
        Self {
            puzzle,
            store,
            input,
            output,
        }
    }

    /// Plays until the chain completes or the player quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] on I/O failure, a failed save, or an engine
    /// error other than an unrecognised option.
    #[instrument(skip_all, fields(number = self.puzzle.number()))]
    pub fn run(&mut self, engine: &mut ChainEngine) -> Result<PlayOutcome, PlayError> {
        self.write_header()?;
        engine.start();

        while !engine.phase().is_complete() {
            let prompt = engine.current_prompt()?;
            self.write_prompt(&prompt)?;

            let Some(line) = self.read_line()? else {
                info!("Input closed");
                return Ok(PlayOutcome::Quit);
            };
            if line.eq_ignore_ascii_case(QUIT) {
                info!(link = prompt.link_index, "Player quit");
                writeln!(self.output, "Progress saved.")?;
                return Ok(PlayOutcome::Quit);
            }

            let option = choose_option(&prompt, &line);
            match engine.submit_guess(&option) {
                Ok(result) => self.write_result(&result)?,
                Err(ChainError::InvalidOption { .. }) => {
                    debug!(%line, "Unrecognised input");
                    writeln!(self.output, "Pick 1-{} or type an option.", prompt.options.len())?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            self.store.save(self.puzzle.date(), &engine.snapshot())?;
        }

        Ok(PlayOutcome::Completed(engine.summary()?))
    }

    fn write_header(&mut self) -> Result<(), PlayError> {
        writeln!(self.output, "cnmn #{} · {}", self.puzzle.number(), self.puzzle.date())?;
        if let Some(theme) = self.puzzle.theme() {
            writeln!(self.output, "Theme: {}", theme)?;
        }
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &Prompt) -> Result<(), PlayError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "[{}/{}] {}",
            prompt.link_index + 1,
            cnmn_chain::CHAIN_LENGTH,
            prompt.prompt_text
        )?;
        writeln!(self.output, "  {}", prompt.compressed)?;
        for (n, option) in prompt.options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", n + 1, option)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn write_result(&mut self, result: &GuessResult) -> Result<(), PlayError> {
        match result {
            GuessResult::Correct {
                decoded_word,
                bridge_hint,
                emoji,
                ..
            } => {
                match emoji {
                    Some(emoji) => writeln!(self.output, "✓ {} {}", decoded_word, emoji)?,
                    None => writeln!(self.output, "✓ {}", decoded_word)?,
                }
                if let Some(bridge) = bridge_hint {
                    writeln!(self.output, "  {}", bridge)?;
                }
            }
            GuessResult::Incorrect {
                option, remaining, ..
            } => {
                writeln!(self.output, "✗ {} ({} left)", option, remaining)?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, PlayError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Maps a typed line to an option: a 1-based number picks from the list,
/// anything else is taken verbatim.
fn choose_option(prompt: &Prompt, line: &str) -> String {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| prompt.options.get(i))
        .cloned()
        .unwrap_or_else(|| line.to_string())
}
