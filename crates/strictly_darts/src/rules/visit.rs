//! Bust and checkout classification for a single visit.

use crate::types::MAX_VISIT;
use tracing::instrument;

/// How a visit lands against the remaining score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitClass {
    /// Visit score outside 0-180.
    OutOfRange,
    /// Overshot, or left exactly 1 (unfinishable on a double).
    Bust,
    /// Left exactly zero.
    Checkout,
    /// Ordinary visit leaving the given remainder.
    Scoring(u32),
}

/// Classifies `visit` thrown from `score`.
///
/// A remainder of 1 busts because no double finishes it. Any visit that
/// reaches exactly zero is a checkout; the finishing double is assumed
/// rather than verified.
#[instrument]
pub fn classify_visit(score: u32, visit: i32) -> VisitClass {
    let Ok(visit) = u32::try_from(visit) else {
        return VisitClass::OutOfRange;
    };
    if visit > MAX_VISIT {
        return VisitClass::OutOfRange;
    }

    match score.checked_sub(visit) {
        None | Some(1) => VisitClass::Bust,
        Some(0) => VisitClass::Checkout,
        Some(remaining) => VisitClass::Scoring(remaining),
    }
}
