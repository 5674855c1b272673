//! Solved links form a prefix of the chain.

use super::Invariant;
use crate::ChainEngine;
use std::cmp::Ordering;

/// Invariant: links before the current index are solved, the current link is
/// unsolved, and links after it carry no progress at all.
pub struct ProgressFrontierInvariant;

impl Invariant<ChainEngine> for ProgressFrontierInvariant {
    fn holds(engine: &ChainEngine) -> bool {
        let current = engine.state().current_link_index();
        engine
            .state()
            .progress()
            .iter()
            .enumerate()
            .all(|(index, progress)| match index.cmp(&current) {
                Ordering::Less => progress.solved(),
                Ordering::Equal => !progress.solved(),
                Ordering::Greater => progress.is_untouched(),
            })
    }

    fn description() -> &'static str {
        "Solved links form a prefix; links past the current one are untouched"
    }
}
