//! Participants that supply visit scores to the match runner.

mod bot;
#[cfg(test)]
mod scripted;

pub use bot::BotThrower;
#[cfg(test)]
pub use scripted::ScriptedThrower;

use std::time::Duration;
use strictly_darts::{PlayerState, ThrowResult};

/// Something that throws visits: a bot, a script, eventually a human.
pub trait Thrower {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the next visit total for the given state.
    fn next_visit(&mut self, state: &PlayerState) -> i32;

    /// Pause before throwing, if this thrower animates its turns.
    fn thinking_delay(&mut self) -> Option<Duration> {
        None
    }

    /// Comment on a visit just applied.
    fn react(&mut self, _result: &ThrowResult, _visit: i32) -> Option<String> {
        None
    }
}
