//! First-class invariants for player state.
//!
//! Invariants are logical properties every engine-produced player state
//! satisfies. The engine checks them after each transition in debug builds,
//! and they are testable on their own.

mod history;
mod score;

pub use history::{DartsMatchHistory, HistorySumsToScore, StatsMirrorHistory};
pub use score::{BandsWithinVisits, ScoreWithinStart};

use crate::config::MatchConfig;

/// A logical property that must hold for a state under a configuration.
pub trait Invariant<S> {
    /// Checks if the invariant holds.
    fn holds(state: &S, config: &MatchConfig) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose without allocation.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S, config: &MatchConfig) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(
    state: &S,
    config: &MatchConfig,
    violations: &mut Vec<InvariantViolation>,
) {
    if !I::holds(state, config) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3, I4, I5> InvariantSet<S> for (I1, I2, I3, I4, I5)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
    I5: Invariant<S>,
{
    fn check_all(state: &S, config: &MatchConfig) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, config, &mut violations);
        check_one::<S, I2>(state, config, &mut violations);
        check_one::<S, I3>(state, config, &mut violations);
        check_one::<S, I4>(state, config, &mut violations);
        check_one::<S, I5>(state, config, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a player state must satisfy.
pub type PlayerStateInvariants = (
    ScoreWithinStart,
    HistorySumsToScore,
    DartsMatchHistory,
    StatsMirrorHistory,
    BandsWithinVisits,
);
