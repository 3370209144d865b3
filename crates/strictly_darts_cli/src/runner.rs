//! Match orchestration between two throwers.
//!
//! The scoring engine is a pure transition function; this is the caller it
//! expects. It owns both player states, alternates turns, resets legs and
//! stops at the match winner.

use crate::players::Thrower;
use anyhow::{Result, bail};
use strictly_darts::{PlayerState, ScoringEngine, ThrowOutcome};
use tracing::{debug, info, instrument, warn};

/// Visits per leg after which a leg is considered stuck.
const MAX_VISITS_PER_LEG: usize = 2000;

/// One side of the match.
struct Seat {
    thrower: Box<dyn Thrower>,
    state: PlayerState,
}

/// Final result of a match.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    /// Name of the match winner.
    pub winner: String,
    /// Legs played in total.
    pub legs_played: u32,
    /// Final state of each player, home first.
    pub players: Vec<PlayerState>,
}

/// Runs a match between two throwers.
pub struct MatchRunner {
    engine: ScoringEngine,
    seats: [Seat; 2],
    pace: bool,
}

impl MatchRunner {
    /// Creates a runner; `home` throws first in the opening leg.
    pub fn new(engine: ScoringEngine, home: Box<dyn Thrower>, away: Box<dyn Thrower>) -> Self {
        let seat = |thrower: Box<dyn Thrower>| Seat {
            state: engine.create_player_state(thrower.name(), None),
            thrower,
        };
        let seats = [seat(home), seat(away)];
        Self {
            engine,
            seats,
            pace: false,
        }
    }

    /// Sleeps for each thrower's thinking delay when set.
    pub fn with_pace(mut self, pace: bool) -> Self {
        self.pace = pace;
        self
    }

    /// Plays legs until one side wins the match.
    ///
    /// The side throwing first alternates from leg to leg.
    ///
    /// # Errors
    ///
    /// Fails if a leg runs past the visit cap without a checkout.
    #[instrument(skip(self), fields(legs_needed = self.engine.legs_needed()))]
    pub fn run(mut self) -> Result<MatchSummary> {
        info!(
            home = %self.seats[0].thrower.name(),
            away = %self.seats[1].thrower.name(),
            "Starting match"
        );

        let mut starter = 0;
        let mut legs_played = 0;
        loop {
            legs_played += 1;
            let (winner, match_won) = self.play_leg(starter)?;
            info!(
                leg = legs_played,
                winner = %self.seats[winner].thrower.name(),
                home_legs = *self.seats[0].state.legs(),
                away_legs = *self.seats[1].state.legs(),
                "Leg complete"
            );

            if match_won {
                let winner = self.seats[winner].thrower.name().to_string();
                info!(winner = %winner, legs_played, "Match complete");
                return Ok(MatchSummary {
                    winner,
                    legs_played,
                    players: self.seats.into_iter().map(|seat| seat.state).collect(),
                });
            }

            for seat in &mut self.seats {
                seat.state = self.engine.reset_for_new_leg(&seat.state);
            }
            starter = 1 - starter;
        }
    }

    /// Plays one leg, returning the winning seat and whether the match is over.
    fn play_leg(&mut self, starter: usize) -> Result<(usize, bool)> {
        let mut turn = starter;

        for _ in 0..MAX_VISITS_PER_LEG {
            let seat = &mut self.seats[turn];

            if self.pace
                && let Some(delay) = seat.thrower.thinking_delay()
            {
                std::thread::sleep(delay);
            }

            let visit = seat.thrower.next_visit(&seat.state);
            let (next, result) = self.engine.apply_throw(&seat.state, visit);

            match result.outcome() {
                ThrowOutcome::Rejected => {
                    warn!(player = %seat.thrower.name(), visit, "Visit rejected, throwing again");
                    continue;
                }
                outcome => {
                    debug!(
                        player = %seat.thrower.name(),
                        visit,
                        remaining = result.new_score,
                        %outcome,
                        checkout = ?self.engine.suggested_checkout(result.new_score),
                        "Visit applied"
                    );
                }
            }

            seat.state = next;
            if let Some(line) = seat.thrower.react(&result, visit) {
                info!(player = %seat.thrower.name(), "{}", line);
            }

            if result.is_leg_won {
                return Ok((turn, result.is_match_won));
            }
            turn = 1 - turn;
        }

        bail!("Leg did not finish within {} visits", MAX_VISITS_PER_LEG)
    }
}
