//! X01 scoring engine.
//!
//! The engine is a transition function: it never holds player state, it
//! only maps `(PlayerState, visit)` to a new `PlayerState` and a
//! [`ThrowResult`]. Callers own the states and decide who throws next.

use crate::checkout;
use crate::config::MatchConfig;
use crate::invariants::{InvariantSet, PlayerStateInvariants};
use crate::rules::{VisitClass, classify_visit, is_match_won};
use crate::types::{MAX_VISIT, PlayerState, ThrowResult};
use tracing::{debug, info, instrument, warn};

/// X01 rules engine for a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringEngine {
    config: MatchConfig,
}

impl ScoringEngine {
    /// Creates an engine for the given match configuration.
    #[instrument]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the legs a player needs to win the match.
    pub fn legs_needed(&self) -> u32 {
        self.config.legs_needed()
    }

    /// Creates a fresh player at the starting score.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn create_player_state(&self, name: impl AsRef<str>, id: Option<String>) -> PlayerState {
        PlayerState::new(name.as_ref(), id, self.config.starting_score())
    }

    /// Classifies a visit without changing any state.
    #[instrument(skip(self, state), fields(player = %state.name(), score = *state.score()))]
    pub fn process_throw(&self, state: &PlayerState, visit: i32) -> ThrowResult {
        let score = *state.score();
        match classify_visit(score, visit) {
            VisitClass::OutOfRange => {
                warn!(visit, "Rejected visit score");
                ThrowResult::rejected(
                    score,
                    format!("Invalid score {visit}: a visit scores 0-{MAX_VISIT}"),
                )
            }
            VisitClass::Bust => ThrowResult::bust(score),
            VisitClass::Checkout => {
                ThrowResult::checkout(is_match_won(&self.config, *state.legs()))
            }
            VisitClass::Scoring(remaining) => ThrowResult::scored(remaining),
        }
    }

    /// Applies a visit, returning the next state and what happened.
    ///
    /// Rejected visits return an unchanged copy. Busts consume three darts
    /// but leave the score and both histories alone. Checkouts bank the leg
    /// and leave the score at zero until [`reset_for_new_leg`](Self::reset_for_new_leg).
    #[instrument(skip(self, state), fields(player = %state.name(), score = *state.score()))]
    pub fn apply_throw(&self, state: &PlayerState, visit: i32) -> (PlayerState, ThrowResult) {
        let result = self.process_throw(state, visit);
        if !result.success {
            return (state.clone(), result);
        }

        // process_throw only succeeds for visits within 0-180
        let visit = visit.unsigned_abs();

        let next = if result.is_bust {
            debug!(visit, "Bust");
            state.with_bust()
        } else if result.is_leg_won {
            info!(
                visit,
                legs = *state.legs() + 1,
                match_won = result.is_match_won,
                "Leg won"
            );
            state.with_checkout(visit)
        } else {
            debug!(visit, remaining = result.new_score, "Visit scored");
            state.with_scoring_visit(visit, result.new_score)
        };

        if cfg!(debug_assertions)
            && let Err(violations) = PlayerStateInvariants::check_all(&next, &self.config)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Player state invariant violated");
            }
        }

        (next, result)
    }

    /// Returns the state ready for a new leg.
    ///
    /// Legs, sets, match history and statistics carry over.
    #[instrument(skip(self, state), fields(player = %state.name()))]
    pub fn reset_for_new_leg(&self, state: &PlayerState) -> PlayerState {
        state.with_new_leg(self.config.starting_score())
    }

    /// Returns the state ready for a new match, keeping only name and id.
    #[instrument(skip(self, state), fields(player = %state.name()))]
    pub fn reset_for_new_match(&self, state: &PlayerState) -> PlayerState {
        state.with_new_match(self.config.starting_score())
    }

    /// Returns the suggested finish for `remaining`, if one exists.
    #[instrument(skip(self))]
    pub fn suggested_checkout(&self, remaining: u32) -> Option<&'static str> {
        checkout::suggested_checkout(remaining)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
