//! Match configuration, fixed once per match.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the leg target is interpreted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchType {
    /// Win the target number of legs outright.
    #[default]
    FirstTo,
    /// Win more than half of the target number of legs.
    BestOf,
}

impl MatchType {
    /// Returns the number of legs a player must win to take the match.
    ///
    /// For `BestOf` this is "more than half", so best of 5 needs 3 and
    /// best of 4 needs 3 as well.
    #[instrument]
    pub fn legs_needed(self, target_legs: u32) -> u32 {
        match self {
            Self::FirstTo => target_legs,
            Self::BestOf => target_legs / 2 + 1,
        }
    }
}

/// Plain-data match settings as they appear in files and on the wire.
///
/// Every field has a default, so a partial TOML table is enough. Convert
/// into a [`MatchConfig`] to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Score each leg starts from.
    pub starting_score: u32,
    /// Leg target interpretation.
    pub match_type: MatchType,
    /// Leg target.
    pub target_legs: u32,
    /// Optional set target (stored, not scored).
    pub target_sets: Option<u32>,
    /// Legs must finish on a double.
    pub double_out: bool,
    /// Legs must start on a double (stored, not enforced).
    pub double_in: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            starting_score: 501,
            match_type: MatchType::FirstTo,
            target_legs: 3,
            target_sets: None,
            double_out: true,
            double_in: false,
        }
    }
}

/// Validated, immutable configuration for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchSettings", into = "MatchSettings")]
pub struct MatchConfig {
    settings: MatchSettings,
    legs_needed: u32,
}

impl MatchConfig {
    /// Creates a double-out configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `starting_score` or `target_legs` is zero.
    #[instrument]
    pub fn new(
        starting_score: u32,
        match_type: MatchType,
        target_legs: u32,
    ) -> Result<Self, ConfigError> {
        Self::try_from(MatchSettings {
            starting_score,
            match_type,
            target_legs,
            ..MatchSettings::default()
        })
    }

    /// Returns the score each leg begins from.
    pub fn starting_score(&self) -> u32 {
        self.settings.starting_score
    }

    /// Returns the leg target interpretation.
    pub fn match_type(&self) -> MatchType {
        self.settings.match_type
    }

    /// Returns the configured leg target.
    pub fn target_legs(&self) -> u32 {
        self.settings.target_legs
    }

    /// Returns the configured set target, if any.
    pub fn target_sets(&self) -> Option<u32> {
        self.settings.target_sets
    }

    /// Returns whether legs must be finished on a double.
    pub fn double_out(&self) -> bool {
        self.settings.double_out
    }

    /// Returns whether legs must be started on a double.
    pub fn double_in(&self) -> bool {
        self.settings.double_in
    }

    /// Returns the legs needed to win, precomputed at construction.
    pub fn legs_needed(&self) -> u32 {
        self.legs_needed
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        let settings = MatchSettings::default();
        let legs_needed = settings.match_type.legs_needed(settings.target_legs);
        Self {
            settings,
            legs_needed,
        }
    }
}

impl TryFrom<MatchSettings> for MatchConfig {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(settings: MatchSettings) -> Result<Self, Self::Error> {
        if settings.starting_score == 0 {
            return Err(ConfigError::new("starting_score must be positive"));
        }
        if settings.target_legs == 0 {
            return Err(ConfigError::new("target_legs must be positive"));
        }
        if settings.target_sets == Some(0) {
            return Err(ConfigError::new("target_sets must be positive when set"));
        }

        let legs_needed = settings.match_type.legs_needed(settings.target_legs);
        debug!(
            starting_score = settings.starting_score,
            match_type = %settings.match_type,
            target_legs = settings.target_legs,
            legs_needed,
            "Match configured"
        );
        Ok(Self {
            settings,
            legs_needed,
        })
    }
}

impl From<MatchConfig> for MatchSettings {
    fn from(config: MatchConfig) -> Self {
        config.settings
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_to_needs_target() {
        let config = MatchConfig::new(501, MatchType::FirstTo, 3).unwrap();
        assert_eq!(config.legs_needed(), 3);
    }

    #[test]
    fn test_best_of_needs_majority() {
        assert_eq!(MatchType::BestOf.legs_needed(5), 3);
        assert_eq!(MatchType::BestOf.legs_needed(4), 3);
        assert_eq!(MatchType::BestOf.legs_needed(1), 1);
    }

    #[test]
    fn test_zero_starting_score_rejected() {
        let err = MatchConfig::new(0, MatchType::FirstTo, 3).unwrap_err();
        assert!(err.message.contains("starting_score"));
    }

    #[test]
    fn test_zero_target_legs_rejected() {
        assert!(MatchConfig::new(501, MatchType::BestOf, 0).is_err());
    }

    #[test]
    fn test_zero_target_sets_rejected() {
        let settings = MatchSettings {
            target_sets: Some(0),
            ..MatchSettings::default()
        };
        assert!(MatchConfig::try_from(settings).is_err());
    }

    #[test]
    fn test_any_positive_starting_score_accepted() {
        let config = MatchConfig::new(41, MatchType::FirstTo, 1).unwrap();
        assert_eq!(config.starting_score(), 41);
    }

    #[test]
    fn test_match_type_parses_snake_case() {
        assert_eq!("best_of".parse::<MatchType>().unwrap(), MatchType::BestOf);
        assert_eq!(MatchType::FirstTo.to_string(), "first_to");
    }
}
