//! Computer opponent.
//!
//! The bot produces whole-visit totals. Its output goes through
//! [`ScoringEngine::apply_throw`](crate::ScoringEngine::apply_throw) exactly
//! like a human's, so it can never bend the rules.

mod engine;
mod level;
mod random;
mod reaction;

pub use engine::{BotEngine, GOOD_LEAVES};
pub use level::BotLevel;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use reaction::BotReaction;
