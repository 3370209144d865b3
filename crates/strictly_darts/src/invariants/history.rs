//! History consistency invariants.

use super::Invariant;
use crate::config::MatchConfig;
use crate::types::PlayerState;

/// Invariant: the current leg's visits account for the score dropped.
///
/// Busts are not recorded, so they cannot break this.
pub struct HistorySumsToScore;

impl Invariant<PlayerState> for HistorySumsToScore {
    fn holds(state: &PlayerState, config: &MatchConfig) -> bool {
        let scored: u64 = state.history().iter().map(|&v| u64::from(v)).sum();
        u64::from(config.starting_score()) == scored + u64::from(*state.score())
    }

    fn description() -> &'static str {
        "Starting score minus leg history equals remaining score"
    }
}

/// Invariant: darts come in visits of three and cover the leg history.
///
/// After a checkout the dart count is already reset while the winning leg's
/// history is kept until the next leg starts.
pub struct DartsMatchHistory;

impl Invariant<PlayerState> for DartsMatchHistory {
    fn holds(state: &PlayerState, _config: &MatchConfig) -> bool {
        let darts = *state.darts_thrown();
        let leg_finished = *state.score() == 0;
        darts.is_multiple_of(3) && (leg_finished || darts as usize >= state.history().len() * 3)
    }

    fn description() -> &'static str {
        "Darts thrown is a multiple of three covering every recorded visit"
    }
}

/// Invariant: the stats visit history mirrors the match history.
pub struct StatsMirrorHistory;

impl Invariant<PlayerState> for StatsMirrorHistory {
    fn holds(state: &PlayerState, _config: &MatchConfig) -> bool {
        state.stats().visit_history() == state.match_history()
    }

    fn description() -> &'static str {
        "Stats visit history mirrors match history"
    }
}
