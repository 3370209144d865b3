//! Match settings loaded from TOML with command-line overrides.

use serde::Deserialize;
use std::path::Path;
use strictly_darts::{ConfigError, MatchConfig, MatchSettings, MatchType};
use tracing::{debug, info, instrument};

/// Top-level layout of a match settings file.
///
/// ```toml
/// [match]
/// starting_score = 301
/// match_type = "best_of"
/// target_legs = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    /// The `[match]` table.
    #[serde(rename = "match")]
    pub match_settings: MatchSettings,
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Starting score.
    pub start: Option<u32>,
    /// Leg target.
    pub legs: Option<u32>,
    /// Switch to best-of.
    pub best_of: bool,
}

/// Loads settings from a TOML file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_settings(path: impl AsRef<Path>) -> Result<MatchSettings, ConfigError> {
    debug!("Loading match settings from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

    let file: SettingsFile = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

    info!(
        starting_score = file.match_settings.starting_score,
        target_legs = file.match_settings.target_legs,
        "Match settings loaded"
    );
    Ok(file.match_settings)
}

/// Builds a validated configuration from an optional file and overrides.
#[instrument(skip(path))]
pub fn resolve_config(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<MatchConfig, ConfigError> {
    let mut settings = match path {
        Some(path) => load_settings(path)?,
        None => MatchSettings::default(),
    };

    if let Some(start) = overrides.start {
        settings.starting_score = start;
    }
    if let Some(legs) = overrides.legs {
        settings.target_legs = legs;
    }
    if overrides.best_of {
        settings.match_type = MatchType::BestOf;
    }

    MatchConfig::try_from(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, Overrides::default()).unwrap();
        assert_eq!(config.starting_score(), 501);
        assert_eq!(config.match_type(), MatchType::FirstTo);
        assert_eq!(config.target_legs(), 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = settings_file("[match]\nstarting_score = 301\nmatch_type = \"best_of\"\n");
        let config = resolve_config(Some(file.path()), Overrides::default()).unwrap();
        assert_eq!(config.starting_score(), 301);
        assert_eq!(config.match_type(), MatchType::BestOf);
        assert_eq!(config.legs_needed(), 2);
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = settings_file("[match]\nstarting_score = 301\ntarget_legs = 7\n");
        let overrides = Overrides {
            start: Some(170),
            legs: None,
            best_of: true,
        };
        let config = resolve_config(Some(file.path()), overrides).unwrap();
        assert_eq!(config.starting_score(), 170);
        assert_eq!(config.legs_needed(), 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let overrides = Overrides {
            legs: Some(0),
            ..Overrides::default()
        };
        assert!(resolve_config(None, overrides).is_err());
    }

    #[test]
    fn test_unparseable_file_rejected() {
        let file = settings_file("[match]\nstarting_score = \"lots\"\n");
        let err = resolve_config(Some(file.path()), Overrides::default()).unwrap_err();
        assert!(err.message.contains("parse"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = load_settings("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("read"));
    }
}
