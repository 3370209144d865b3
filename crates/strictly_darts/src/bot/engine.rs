//! Bot visit simulation.
//!
//! Away from a finish the bot samples a normal distribution around its
//! average. With a finish on it either hits (at its checkout rate) or
//! throws a plausible miss that keeps it in the leg.

use super::level::BotLevel;
use super::random::{RandomSource, RngSource};
use super::reaction::BotReaction;
use crate::checkout::is_valid_checkout;
use crate::types::{MAX_VISIT, ThrowResult};
use rand::rngs::ThreadRng;
use std::f64::consts::PI;
use std::time::Duration;
use tracing::{debug, instrument};

/// Leaves worth setting up, most preferred first.
pub const GOOD_LEAVES: [u32; 7] = [32, 40, 36, 24, 16, 20, 8];

/// Average at and above which the bot always sets up double 16.
const SKILLED_AVERAGE: f64 = 80.0;

/// Single-double territory: a miss here is modelled as hitting the single.
const DOUBLE_RANGE: u32 = 40;

/// Bot opponent bound to one skill level and one random source.
///
/// Create one per match; the source is the only state it carries.
#[derive(Debug, Clone)]
pub struct BotEngine<S = RngSource<ThreadRng>> {
    level: BotLevel,
    source: S,
}

impl BotEngine {
    /// Creates a bot drawing from the thread-local RNG.
    #[instrument]
    pub fn new(level: BotLevel) -> Self {
        Self::with_source(level, RngSource::default())
    }
}

impl<S: RandomSource> BotEngine<S> {
    /// Creates a bot drawing from the given source.
    pub fn with_source(level: BotLevel, source: S) -> Self {
        Self { level, source }
    }

    /// Returns the skill level.
    pub fn level(&self) -> &BotLevel {
        &self.level
    }

    /// Produces one visit total in 0-180 from `current_score`.
    #[instrument(skip(self), fields(bot = self.level.name))]
    pub fn generate_score(&mut self, current_score: u32) -> u32 {
        let visit = if is_valid_checkout(current_score) {
            self.attempt_checkout(current_score)
        } else {
            self.scoring_visit(current_score)
        };
        debug!(visit, "Bot visit");
        visit
    }

    /// Returns the leave the bot aims for when setting up a finish.
    ///
    /// Skilled bots always go for 32; weaker ones pick at random.
    pub fn ideal_leave(&mut self) -> u32 {
        if self.level.avg >= SKILLED_AVERAGE {
            32
        } else {
            GOOD_LEAVES[self.index(GOOD_LEAVES.len())]
        }
    }

    /// Pause before the bot's visit, for callers that animate turns.
    pub fn thinking_delay(&mut self) -> Duration {
        let base = 1000 + (6 - i64::from(self.level.id)) * 50;
        let noise = self.noise(500);
        let millis = (base + noise).max(500);
        Duration::from_millis(millis.unsigned_abs())
    }

    /// Picks a reaction line for a visit the bot just threw.
    pub fn reaction(
        &mut self,
        result: &ThrowResult,
        visit: u32,
    ) -> Option<(BotReaction, &'static str)> {
        let reaction = BotReaction::for_throw(result, visit)?;
        let lines = reaction.lines();
        Some((reaction, lines[self.index(lines.len())]))
    }

    fn attempt_checkout(&mut self, current_score: u32) -> u32 {
        if self.source.next_unit() < self.level.checkout_rate {
            debug!(current_score, "Bot hit the finish");
            return current_score;
        }

        let miss = if current_score <= DOUBLE_RANGE {
            (i64::from(current_score / 2) + self.noise(5)).max(0)
        } else {
            let leave = i64::from(self.ideal_leave());
            let setup = match i64::from(current_score) - leave {
                s if s > i64::from(MAX_VISIT) => 100,
                s if s <= 0 => 0,
                s => s,
            };
            (setup + self.noise(10)).clamp(0, i64::from(MAX_VISIT))
        };

        // Noise can push a miss onto the finish or past it; keep at least 2 on.
        let miss = u32::try_from(miss).unwrap_or(0);
        miss.min(current_score.saturating_sub(2))
    }

    fn scoring_visit(&mut self, current_score: u32) -> u32 {
        let sampled = self.level.avg + self.standard_normal() * self.level.consistency;
        let visit = sampled.round().clamp(0.0, f64::from(MAX_VISIT)) as u32;

        let remaining = i64::from(current_score) - i64::from(visit);
        if (remaining == 1 || remaining < 0) && current_score > DOUBLE_RANGE {
            let adjusted = match GOOD_LEAVES.iter().find(|&&leave| current_score > leave) {
                Some(leave) => current_score - leave,
                None => current_score.saturating_sub(DOUBLE_RANGE),
            };
            debug!(visit, adjusted, "Bot avoided a bust");
            return adjusted.min(MAX_VISIT);
        }

        visit
    }

    /// One standard normal draw by the Box-Muller transform.
    fn standard_normal(&mut self) -> f64 {
        let u1 = self.source.next_unit().max(f64::MIN_POSITIVE);
        let u2 = self.source.next_unit();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Uniform integer in `0..n`.
    fn index(&mut self, n: usize) -> usize {
        let scaled = (self.source.next_unit() * n as f64) as usize;
        scaled.min(n.saturating_sub(1))
    }

    /// Uniform integer in `-half_width..=half_width`.
    fn noise(&mut self, half_width: i64) -> i64 {
        let span = usize::try_from(2 * half_width + 1).unwrap_or(1);
        self.index(span) as i64 - half_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::random::ScriptedSource;

    fn bot(id: u8, draws: Vec<f64>) -> BotEngine<ScriptedSource> {
        let level = *BotLevel::by_id(id).unwrap();
        BotEngine::with_source(level, ScriptedSource::new(draws))
    }

    #[test]
    fn test_checkout_hit_returns_exact_score() {
        let mut bot = bot(6, vec![0.1]);
        assert_eq!(bot.generate_score(40), 40);
        assert_eq!(bot.generate_score(170), 170);
    }

    #[test]
    fn test_missed_double_scores_about_half() {
        let mut bot = bot(6, vec![0.9, 0.5]);
        assert_eq!(bot.generate_score(40), 20);
    }

    #[test]
    fn test_missed_double_never_finishes_or_busts() {
        // noise +5 on half of 4 would be 7
        let mut bot = bot(6, vec![0.99, 0.99]);
        assert_eq!(bot.generate_score(4), 2);
    }

    #[test]
    fn test_missed_double_two_scores_nothing() {
        let mut bot = bot(1, vec![0.99, 0.99]);
        assert_eq!(bot.generate_score(2), 0);
    }

    #[test]
    fn test_skilled_setup_leaves_thirty_two() {
        let mut bot = bot(6, vec![0.9, 0.5]);
        assert_eq!(bot.generate_score(100), 68);
        assert_eq!(bot.source.consumed(), 2);
    }

    #[test]
    fn test_weak_setup_picks_random_leave() {
        let mut bot = bot(1, vec![0.9, 0.99, 0.5]);
        assert_eq!(bot.generate_score(100), 92);
    }

    #[test]
    fn test_setup_noise_is_clamped() {
        // 41 - 32 = 9, noise -10
        let mut bot = bot(6, vec![0.9, 0.0]);
        assert_eq!(bot.generate_score(41), 0);
    }

    #[test]
    fn test_ideal_leave_by_skill() {
        assert_eq!(bot(4, vec![0.99]).ideal_leave(), 32);
        assert_eq!(bot(3, vec![0.0]).ideal_leave(), 32);
        assert_eq!(bot(3, vec![0.2]).ideal_leave(), 40);
        assert_eq!(bot(3, vec![0.99]).ideal_leave(), 8);
    }

    #[test]
    fn test_scoring_visit_at_mean() {
        // cos(pi / 2) zeroes the deviation
        let mut bot = bot(6, vec![0.5, 0.25]);
        assert_eq!(bot.generate_score(501), 110);
    }

    #[test]
    fn test_scoring_visit_one_deviation_up() {
        let mut bot = bot(6, vec![(-0.5f64).exp(), 0.0]);
        assert_eq!(bot.generate_score(501), 122);
    }

    #[test]
    fn test_scoring_visit_avoids_bust() {
        // six deviations up clamps to 180, which would bust from 171
        let mut bot = bot(6, vec![(-18.0f64).exp(), 0.0]);
        assert_eq!(bot.generate_score(171), 139);
    }

    #[test]
    fn test_scoring_visit_avoids_leaving_one() {
        // 110 + 5 * 12 = 170 leaves 1 from 171
        let mut bot = bot(6, vec![(-12.5f64).exp(), 0.0]);
        assert_eq!(bot.generate_score(171), 139);
    }

    #[test]
    fn test_unreachable_finish_is_played_for_setup() {
        let mut bot = bot(6, vec![0.5, 0.25]);
        assert_eq!(bot.generate_score(169), 110);
    }

    #[test]
    fn test_thinking_delay_floor_and_base() {
        assert_eq!(bot(6, vec![0.0]).thinking_delay(), Duration::from_millis(500));
        assert_eq!(bot(1, vec![0.5]).thinking_delay(), Duration::from_millis(1250));
    }

    #[test]
    fn test_reaction_picks_a_line() {
        let mut bot = bot(6, vec![0.0]);
        let (reaction, line) = bot.reaction(&ThrowResult::scored(321), 180).unwrap();
        assert_eq!(reaction, BotReaction::Maximum);
        assert_eq!(line, "One hundred and eighty!");
        assert!(bot.reaction(&ThrowResult::scored(450), 51).is_none());
    }
}
