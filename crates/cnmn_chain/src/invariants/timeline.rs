//! Start and end stamps agree with the phase.

use super::Invariant;
use crate::ChainEngine;

/// Invariant: `end_time` is set exactly when the chain is complete, never
/// precedes `start_time`, and any progress implies a start time.
pub struct TimelineInvariant;

impl Invariant<ChainEngine> for TimelineInvariant {
    fn holds(engine: &ChainEngine) -> bool {
        let state = engine.state();
        let complete = state.phase().is_complete();
        let touched = state.progress().iter().any(|p| !p.is_untouched());

        let end_matches_phase = state.end_time().is_some() == complete;
        let started_if_touched = !touched || state.start_time().is_some();
        let ordered = match (state.start_time(), state.end_time()) {
            (Some(start), Some(end)) => end >= start,
            (None, Some(_)) => false,
            _ => true,
        };

        end_matches_phase && started_if_touched && ordered
    }

    fn description() -> &'static str {
        "End time is set iff complete, follows the start time, and progress implies a start"
    }
}
