//! Strictly Darts - type-safe X01 scoring and bot simulation.
//!
//! This library provides the rules of X01 darts as a pure transition
//! function, plus a computer opponent whose visits feed through the same
//! rules as a human's.
//!
//! # Architecture
//!
//! - **Config**: [`MatchConfig`] fixes starting score and leg target once per match
//! - **Engine**: [`ScoringEngine`] turns `(PlayerState, visit)` into a new state and a [`ThrowResult`]
//! - **Stats**: [`MatchStats`] is updated incrementally on every scoring visit
//! - **Bot**: [`BotEngine`] simulates skill-calibrated visits from a [`BotLevel`]
//! - **Checkouts**: static finish suggestions for 2-170
//!
//! # Example
//!
//! ```
//! use strictly_darts::{MatchConfig, ScoringEngine};
//!
//! # fn example() -> Result<(), strictly_darts::ConfigError> {
//! let engine = ScoringEngine::new(MatchConfig::new(501, Default::default(), 3)?);
//! let player = engine.create_player_state("Phil", None);
//!
//! let (player, result) = engine.apply_throw(&player, 140);
//! assert_eq!(result.new_score, 361);
//! assert_eq!(*player.score(), 361);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bot;
mod checkout;
mod config;
mod engine;
mod invariants;
mod rules;
mod stats;
mod types;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, MatchSettings, MatchType};

// Crate-level exports - Scoring engine
pub use engine::ScoringEngine;

// Crate-level exports - State and results
pub use types::{MAX_VISIT, PlayerState, ThrowOutcome, ThrowResult};

// Crate-level exports - Statistics
pub use stats::{MatchStats, ScoreBand, calculate_average, round2};

// Crate-level exports - Rules
pub use rules::{VisitClass, classify_visit, is_match_won};

// Crate-level exports - Checkout tables
pub use checkout::{UNREACHABLE_CHECKOUTS, is_valid_checkout, suggested_checkout};

// Crate-level exports - Invariants
pub use invariants::{
    BandsWithinVisits, DartsMatchHistory, HistorySumsToScore, Invariant, InvariantSet,
    InvariantViolation, PlayerStateInvariants, ScoreWithinStart, StatsMirrorHistory,
};

// Crate-level exports - Bot simulation
pub use bot::{
    BotEngine, BotLevel, BotReaction, GOOD_LEAVES, RandomSource, RngSource, ScriptedSource,
};
