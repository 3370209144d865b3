//! Core domain types for X01 scoring.

use crate::stats::MatchStats;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Highest score a single three-dart visit can make (three treble 20s).
pub const MAX_VISIT: u32 = 180;

/// One player's standing in a match.
///
/// States are values: every engine operation returns a new `PlayerState`
/// and leaves its argument untouched. Fields are read through getters and
/// only ever written by [`ScoringEngine`](crate::ScoringEngine).
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name.
    name: String,
    /// Optional caller-assigned identifier.
    id: Option<String>,
    /// Points remaining in the current leg.
    score: u32,
    /// Legs won this match.
    legs: u32,
    /// Sets won this match.
    sets: u32,
    /// Visits scored in the current leg.
    history: Vec<u32>,
    /// Visits scored across the whole match.
    match_history: Vec<u32>,
    /// Darts thrown in the current leg, busts included.
    darts_thrown: u32,
    /// Running statistics.
    stats: MatchStats,
}

impl PlayerState {
    /// Creates a fresh state at the given starting score.
    pub(crate) fn new(name: impl Into<String>, id: Option<String>, starting_score: u32) -> Self {
        Self {
            name: name.into(),
            id,
            score: starting_score,
            legs: 0,
            sets: 0,
            history: Vec::new(),
            match_history: Vec::new(),
            darts_thrown: 0,
            stats: MatchStats::default(),
        }
    }

    /// Returns a copy that has thrown one more visit without scoring.
    pub(crate) fn with_bust(&self) -> Self {
        Self {
            darts_thrown: self.darts_thrown + 3,
            ..self.clone()
        }
    }

    /// Returns a copy with `visit` recorded and the score reduced to `new_score`.
    pub(crate) fn with_scoring_visit(&self, visit: u32, new_score: u32) -> Self {
        let mut history = self.history.clone();
        history.push(visit);
        let mut match_history = self.match_history.clone();
        match_history.push(visit);
        let stats = self.stats.with_visit(visit, &match_history);

        Self {
            score: new_score,
            history,
            match_history,
            darts_thrown: self.darts_thrown + 3,
            stats,
            ..self.clone()
        }
    }

    /// Returns a copy with `visit` recorded as the leg-winning checkout.
    pub(crate) fn with_checkout(&self, visit: u32) -> Self {
        let scored = self.with_scoring_visit(visit, 0);
        let stats = scored.stats.with_leg_won(scored.darts_thrown, self.score);

        Self {
            legs: self.legs + 1,
            darts_thrown: 0,
            stats,
            ..scored
        }
    }

    /// Returns a copy ready for the next leg.
    pub(crate) fn with_new_leg(&self, starting_score: u32) -> Self {
        Self {
            score: starting_score,
            history: Vec::new(),
            darts_thrown: 0,
            ..self.clone()
        }
    }

    /// Returns a copy with everything but identity reset.
    pub(crate) fn with_new_match(&self, starting_score: u32) -> Self {
        Self::new(self.name.clone(), self.id.clone(), starting_score)
    }
}

/// What a single visit did, as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ThrowOutcome {
    /// The visit score was outside 0-180 and was ignored.
    Rejected,
    /// The visit overshot or left 1; score unchanged.
    Bust,
    /// Ordinary scoring visit.
    Scored,
    /// The visit checked out and won the leg.
    LegWon,
    /// The visit checked out and won the match.
    MatchWon,
}

/// Result of processing one visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowResult {
    /// Whether the visit score itself was admissible (0-180).
    pub success: bool,
    /// Remaining score after the visit.
    pub new_score: u32,
    /// The visit busted.
    pub is_bust: bool,
    /// The visit won the leg.
    pub is_leg_won: bool,
    /// The visit won the match.
    pub is_match_won: bool,
    /// Human-readable summary for display.
    pub message: Option<String>,
}

impl ThrowResult {
    pub(crate) fn rejected(score: u32, message: impl Into<String>) -> Self {
        Self {
            success: false,
            new_score: score,
            is_bust: false,
            is_leg_won: false,
            is_match_won: false,
            message: Some(message.into()),
        }
    }

    pub(crate) fn bust(score: u32) -> Self {
        Self {
            success: true,
            new_score: score,
            is_bust: true,
            is_leg_won: false,
            is_match_won: false,
            message: Some("Bust!".to_string()),
        }
    }

    pub(crate) fn scored(new_score: u32) -> Self {
        Self {
            success: true,
            new_score,
            is_bust: false,
            is_leg_won: false,
            is_match_won: false,
            message: None,
        }
    }

    pub(crate) fn checkout(is_match_won: bool) -> Self {
        let message = if is_match_won { "Match won!" } else { "Leg won!" };
        Self {
            success: true,
            new_score: 0,
            is_bust: false,
            is_leg_won: true,
            is_match_won,
            message: Some(message.to_string()),
        }
    }

    /// Collapses the flags into a single outcome.
    pub fn outcome(&self) -> ThrowOutcome {
        if !self.success {
            ThrowOutcome::Rejected
        } else if self.is_bust {
            ThrowOutcome::Bust
        } else if self.is_match_won {
            ThrowOutcome::MatchWon
        } else if self.is_leg_won {
            ThrowOutcome::LegWon
        } else {
            ThrowOutcome::Scored
        }
    }
}
