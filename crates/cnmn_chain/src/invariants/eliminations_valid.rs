//! Eliminated options belong to their link and never include the answer.

use super::Invariant;
use crate::ChainEngine;

/// Invariant: every eliminated option is a wrong option of its own link.
pub struct EliminationsValidInvariant;

impl Invariant<ChainEngine> for EliminationsValidInvariant {
    fn holds(engine: &ChainEngine) -> bool {
        engine
            .chain()
            .links()
            .iter()
            .zip(engine.state().progress())
            .all(|(link, progress)| {
                progress
                    .eliminated_options()
                    .iter()
                    .all(|option| link.offers(option) && option != link.correct_option())
            })
    }

    fn description() -> &'static str {
        "Eliminated options are wrong options of their own link (never the correct one)"
    }
}
