//! X01 rules.
//!
//! Pure functions that classify a visit against a remaining score and decide
//! match completion. They hold no state so the engine can compose them into
//! a transition.

pub mod match_win;
pub mod visit;

pub use match_win::is_match_won;
pub use visit::{VisitClass, classify_visit};
