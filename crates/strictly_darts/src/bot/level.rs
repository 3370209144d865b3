//! Bot skill catalogue.

use serde::Serialize;
use tracing::instrument;

/// A bot skill profile.
///
/// Levels are read-only constants shared by every match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BotLevel {
    /// Catalogue id, 1 (weakest) to 6 (strongest).
    pub id: u8,
    /// Display name.
    pub name: &'static str,
    /// Target three-dart average.
    pub avg: f64,
    /// Probability of hitting a finish when one is on, in `[0, 1]`.
    pub checkout_rate: f64,
    /// Standard deviation of visit scores.
    pub consistency: f64,
}

static CATALOGUE: [BotLevel; 6] = [
    BotLevel {
        id: 1,
        name: "Rookie",
        avg: 30.0,
        checkout_rate: 0.05,
        consistency: 15.0,
    },
    BotLevel {
        id: 2,
        name: "Pub Player",
        avg: 45.0,
        checkout_rate: 0.12,
        consistency: 15.0,
    },
    BotLevel {
        id: 3,
        name: "League Player",
        avg: 60.0,
        checkout_rate: 0.2,
        consistency: 14.0,
    },
    BotLevel {
        id: 4,
        name: "County Player",
        avg: 80.0,
        checkout_rate: 0.3,
        consistency: 13.0,
    },
    BotLevel {
        id: 5,
        name: "Tour Pro",
        avg: 95.0,
        checkout_rate: 0.4,
        consistency: 12.0,
    },
    BotLevel {
        id: 6,
        name: "World Champion",
        avg: 110.0,
        checkout_rate: 0.5,
        consistency: 12.0,
    },
];

impl BotLevel {
    /// Returns every level, weakest first.
    pub fn catalogue() -> &'static [BotLevel] {
        &CATALOGUE
    }

    /// Looks up a level by id.
    #[instrument]
    pub fn by_id(id: u8) -> Option<&'static BotLevel> {
        CATALOGUE.iter().find(|level| level.id == id)
    }

    /// Looks up a level by name, ignoring case.
    #[instrument]
    pub fn by_name(name: &str) -> Option<&'static BotLevel> {
        CATALOGUE
            .iter()
            .find(|level| level.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Looks up a level by id if `key` is numeric, otherwise by name.
    #[instrument]
    pub fn lookup(key: &str) -> Option<&'static BotLevel> {
        match key.trim().parse::<u8>() {
            Ok(id) => Self::by_id(id),
            Err(_) => Self::by_name(key),
        }
    }
}
