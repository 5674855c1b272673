//! Miss counts agree with eliminations.

use super::Invariant;
use crate::ChainEngine;

/// Invariant: each link's miss count equals the number of eliminated options.
///
/// Holds because every miss eliminates a fresh option and an eliminated
/// option can never be guessed again.
pub struct MissCountInvariant;

impl Invariant<ChainEngine> for MissCountInvariant {
    fn holds(engine: &ChainEngine) -> bool {
        engine
            .state()
            .progress()
            .iter()
            .all(|p| {
                usize::try_from(p.miss_count()).is_ok_and(|n| n == p.eliminated_options().len())
            })
    }

    fn description() -> &'static str {
        "Miss count equals the number of eliminated options"
    }
}
