//! Bot-backed thrower.

use super::Thrower;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_darts::{BotEngine, BotLevel, PlayerState, RngSource, ThrowResult};
use tracing::{debug, instrument};

/// Thrower driven by a [`BotEngine`].
pub struct BotThrower {
    name: String,
    engine: BotEngine<RngSource<StdRng>>,
}

impl BotThrower {
    /// Creates a bot thrower with its own seeded RNG.
    #[instrument(skip(rng))]
    pub fn new(level: BotLevel, rng: StdRng) -> Self {
        let engine = BotEngine::with_source(level, RngSource::new(rng));
        let name = format!("{} (bot {})", engine.level().name, engine.level().id);
        Self { name, engine }
    }
}

impl Thrower for BotThrower {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_visit(&mut self, state: &PlayerState) -> i32 {
        let visit = self.engine.generate_score(*state.score());
        debug!(bot = %self.name, score = *state.score(), visit, "Bot chose visit");
        // generate_score stays within 0-180
        i32::try_from(visit).unwrap_or(0)
    }

    fn thinking_delay(&mut self) -> Option<Duration> {
        Some(self.engine.thinking_delay())
    }

    fn react(&mut self, result: &ThrowResult, visit: i32) -> Option<String> {
        let visit = u32::try_from(visit).ok()?;
        self.engine
            .reaction(result, visit)
            .map(|(_, line)| line.to_string())
    }
}
