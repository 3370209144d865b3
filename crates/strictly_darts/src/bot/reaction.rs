//! Advisory bot reactions for callers that animate turns.

use crate::types::{MAX_VISIT, ThrowResult};
use serde::{Deserialize, Serialize};

/// Visits below this are worth a grumble.
const POOR_VISIT: u32 = 26;

/// What the bot is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BotReaction {
    /// Three treble 20s.
    Maximum,
    /// A ton or more.
    BigScore,
    /// Finished the leg.
    Checkout,
    /// Busted.
    Bust,
    /// Scored very little.
    PoorVisit,
}

impl BotReaction {
    /// Picks the reaction for a visit, or `None` if it was unremarkable.
    pub fn for_throw(result: &ThrowResult, visit: u32) -> Option<Self> {
        if !result.success {
            None
        } else if result.is_leg_won {
            Some(Self::Checkout)
        } else if result.is_bust {
            Some(Self::Bust)
        } else if visit == MAX_VISIT {
            Some(Self::Maximum)
        } else if visit >= 100 {
            Some(Self::BigScore)
        } else if visit < POOR_VISIT {
            Some(Self::PoorVisit)
        } else {
            None
        }
    }

    /// Candidate lines for this reaction.
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Self::Maximum => &[
                "One hundred and eighty!",
                "Maximum!",
                "Treble twenty, three times.",
            ],
            Self::BigScore => &["Lovely darts.", "That's more like it.", "Ton up!"],
            Self::Checkout => &["Game shot!", "Checked out.", "Double trouble, solved."],
            Self::Bust => &["Bust. Ouch.", "Too greedy.", "Back to the same score."],
            Self::PoorVisit => &["Come on...", "Wrong bed.", "The board moved, honestly."],
        }
    }
}
