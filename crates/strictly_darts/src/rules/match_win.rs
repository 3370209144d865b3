//! Match completion.

use crate::config::MatchConfig;
use tracing::instrument;

/// Returns true if winning one more leg from `legs_won` takes the match.
#[instrument(skip(config), fields(legs_needed = config.legs_needed()))]
pub fn is_match_won(config: &MatchConfig, legs_won: u32) -> bool {
    legs_won + 1 >= config.legs_needed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchType;

    #[test]
    fn test_first_to_three() {
        let config = MatchConfig::new(501, MatchType::FirstTo, 3).unwrap();
        assert!(!is_match_won(&config, 0));
        assert!(!is_match_won(&config, 1));
        assert!(is_match_won(&config, 2));
    }

    #[test]
    fn test_best_of_five_needs_three() {
        let config = MatchConfig::new(501, MatchType::BestOf, 5).unwrap();
        assert!(!is_match_won(&config, 1));
        assert!(is_match_won(&config, 2));
    }

    #[test]
    fn test_best_of_even_needs_more_than_half() {
        let config = MatchConfig::new(501, MatchType::BestOf, 4).unwrap();
        assert!(!is_match_won(&config, 1));
        assert!(is_match_won(&config, 2));
    }

    #[test]
    fn test_single_leg_match() {
        let config = MatchConfig::new(301, MatchType::FirstTo, 1).unwrap();
        assert!(is_match_won(&config, 0));
    }
}
