//! Score and band bounds.

use super::Invariant;
use crate::config::MatchConfig;
use crate::types::PlayerState;

/// Invariant: remaining score never exceeds the starting score.
pub struct ScoreWithinStart;

impl Invariant<PlayerState> for ScoreWithinStart {
    fn holds(state: &PlayerState, config: &MatchConfig) -> bool {
        *state.score() <= config.starting_score()
    }

    fn description() -> &'static str {
        "Remaining score is at most the starting score"
    }
}

/// Invariant: banded visits never outnumber recorded visits.
pub struct BandsWithinVisits;

impl Invariant<PlayerState> for BandsWithinVisits {
    fn holds(state: &PlayerState, _config: &MatchConfig) -> bool {
        state.stats().banded_visits() as usize <= state.match_history().len()
    }

    fn description() -> &'static str {
        "Score band counts do not exceed recorded visits"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_within_start_for_new_player() {
        let config = MatchConfig::default();
        let state = PlayerState::new("Rob", None, 501);
        assert!(ScoreWithinStart::holds(&state, &config));
    }

    #[test]
    fn test_score_above_start_detected() {
        let config = MatchConfig::default();
        let state = PlayerState::new("Rob", None, 601);
        assert!(!ScoreWithinStart::holds(&state, &config));
    }

    #[test]
    fn test_bands_after_maximums() {
        let config = MatchConfig::default();
        let state = PlayerState::new("Rob", None, 501)
            .with_scoring_visit(180, 321)
            .with_scoring_visit(180, 141);
        assert!(BandsWithinVisits::holds(&state, &config));
        assert_eq!(*state.stats().scores_180(), 2);
    }
}
