//! Running match statistics.
//!
//! Statistics are rebuilt as values on each scoring visit. Busted visits
//! never reach this module, so they count toward neither the average nor
//! the score bands.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Score bands tracked per match, highest first.
///
/// Each band is a half-open range up to the next band's floor, so a visit
/// falls into at most one of them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ScoreBand {
    /// Exactly 180.
    #[strum(to_string = "180")]
    Maximum,
    /// 170-179.
    #[strum(to_string = "170+")]
    OneSeventyPlus,
    /// 140-169.
    #[strum(to_string = "140+")]
    OneFortyPlus,
    /// 100-139.
    #[strum(to_string = "100+")]
    TonPlus,
    /// 90-99.
    #[strum(to_string = "90+")]
    NinetyPlus,
    /// 65-89.
    #[strum(to_string = "65+")]
    SixtyFivePlus,
}

impl ScoreBand {
    /// Lowest visit that lands in this band.
    pub fn floor(self) -> u32 {
        match self {
            Self::Maximum => 180,
            Self::OneSeventyPlus => 170,
            Self::OneFortyPlus => 140,
            Self::TonPlus => 100,
            Self::NinetyPlus => 90,
            Self::SixtyFivePlus => 65,
        }
    }

    /// Returns the band for a visit, if it reaches one.
    ///
    /// Bands are scanned highest first and the first floor the visit meets
    /// wins, so 180 is a maximum and never also a 170+.
    #[instrument]
    pub fn classify(visit: u32) -> Option<Self> {
        Self::iter().find(|band| visit >= band.floor())
    }
}

/// Aggregate statistics for one player across a match.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
pub struct MatchStats {
    /// Visits of 65-89.
    scores_65_plus: u32,
    /// Visits of 90-99.
    scores_90_plus: u32,
    /// Visits of 100-139.
    scores_100_plus: u32,
    /// Visits of 140-169.
    scores_140_plus: u32,
    /// Visits of 170-179.
    scores_170_plus: u32,
    /// Visits of exactly 180.
    scores_180: u32,
    /// Fewest darts used to win a leg, once one has been won.
    best_leg: Option<u32>,
    /// Three-dart average over all scoring visits, to two decimals.
    average: f64,
    /// Largest score checked out, 0 before the first checkout.
    highest_checkout: u32,
    /// Mirror of the player's match history.
    visit_history: Vec<u32>,
}

impl MatchStats {
    /// Returns the count for a single band.
    pub fn band_count(&self, band: ScoreBand) -> u32 {
        match band {
            ScoreBand::Maximum => self.scores_180,
            ScoreBand::OneSeventyPlus => self.scores_170_plus,
            ScoreBand::OneFortyPlus => self.scores_140_plus,
            ScoreBand::TonPlus => self.scores_100_plus,
            ScoreBand::NinetyPlus => self.scores_90_plus,
            ScoreBand::SixtyFivePlus => self.scores_65_plus,
        }
    }

    /// Total visits counted across all bands.
    pub fn banded_visits(&self) -> u32 {
        ScoreBand::iter().map(|band| self.band_count(band)).sum()
    }

    /// Returns stats with a scoring visit folded in.
    ///
    /// `match_history` must already include `visit`.
    pub(crate) fn with_visit(&self, visit: u32, match_history: &[u32]) -> Self {
        let mut next = Self {
            average: calculate_average(match_history),
            visit_history: match_history.to_vec(),
            ..self.clone()
        };

        if let Some(band) = ScoreBand::classify(visit) {
            let counter = match band {
                ScoreBand::Maximum => &mut next.scores_180,
                ScoreBand::OneSeventyPlus => &mut next.scores_170_plus,
                ScoreBand::OneFortyPlus => &mut next.scores_140_plus,
                ScoreBand::TonPlus => &mut next.scores_100_plus,
                ScoreBand::NinetyPlus => &mut next.scores_90_plus,
                ScoreBand::SixtyFivePlus => &mut next.scores_65_plus,
            };
            *counter += 1;
        }

        next
    }

    /// Returns stats with a won leg folded in.
    ///
    /// `darts` is the leg length including the checkout visit, `checked_out`
    /// the score held immediately before it.
    pub(crate) fn with_leg_won(&self, darts: u32, checked_out: u32) -> Self {
        let best_leg = match self.best_leg {
            Some(best) if best <= darts => Some(best),
            _ => Some(darts),
        };

        Self {
            best_leg,
            highest_checkout: self.highest_checkout.max(checked_out),
            ..self.clone()
        }
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Three-dart average of a visit history, rounded to two decimals.
///
/// Returns 0.0 for an empty history.
#[instrument(skip(history), fields(visits = history.len()))]
pub fn calculate_average(history: &[u32]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: u64 = history.iter().map(|&v| u64::from(v)).sum();
    round2(total as f64 / history.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_example_history() {
        assert_eq!(calculate_average(&[100, 140, 60]), 100.0);
    }

    #[test]
    fn test_average_rounds_to_two_places() {
        assert_eq!(calculate_average(&[100, 0, 0]), 33.33);
        assert_eq!(calculate_average(&[26, 45, 60]), 43.67);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(calculate_average(&[]), 0.0);
    }

    #[test]
    fn test_average_is_pure() {
        let history = [81, 60, 41];
        assert_eq!(calculate_average(&history), calculate_average(&history));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::classify(64), None);
        assert_eq!(ScoreBand::classify(65), Some(ScoreBand::SixtyFivePlus));
        assert_eq!(ScoreBand::classify(89), Some(ScoreBand::SixtyFivePlus));
        assert_eq!(ScoreBand::classify(90), Some(ScoreBand::NinetyPlus));
        assert_eq!(ScoreBand::classify(100), Some(ScoreBand::TonPlus));
        assert_eq!(ScoreBand::classify(139), Some(ScoreBand::TonPlus));
        assert_eq!(ScoreBand::classify(140), Some(ScoreBand::OneFortyPlus));
        assert_eq!(ScoreBand::classify(170), Some(ScoreBand::OneSeventyPlus));
        assert_eq!(ScoreBand::classify(179), Some(ScoreBand::OneSeventyPlus));
        assert_eq!(ScoreBand::classify(180), Some(ScoreBand::Maximum));
    }

    #[test]
    fn test_each_visit_hits_at_most_one_band() {
        for visit in 0..=180 {
            let stats = MatchStats::default().with_visit(visit, &[visit]);
            let expected = u32::from(visit >= 65);
            assert_eq!(stats.banded_visits(), expected, "visit {visit}");
        }
    }

    #[test]
    fn test_maximum_does_not_count_as_one_seventy() {
        let stats = MatchStats::default().with_visit(180, &[180]);
        assert_eq!(*stats.scores_180(), 1);
        assert_eq!(*stats.scores_170_plus(), 0);
    }

    #[test]
    fn test_best_leg_never_increases() {
        let stats = MatchStats::default().with_leg_won(15, 40);
        let stats = stats.with_leg_won(21, 32);
        assert_eq!(*stats.best_leg(), Some(15));
        let stats = stats.with_leg_won(12, 16);
        assert_eq!(*stats.best_leg(), Some(12));
    }

    #[test]
    fn test_highest_checkout_keeps_maximum() {
        let stats = MatchStats::default().with_leg_won(15, 121);
        let stats = stats.with_leg_won(18, 40);
        assert_eq!(*stats.highest_checkout(), 121);
    }
}
