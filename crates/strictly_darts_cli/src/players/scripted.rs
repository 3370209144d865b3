//! Thrower that replays a fixed list of visits.

use super::Thrower;
use std::collections::VecDeque;
use strictly_darts::PlayerState;

/// Replays visits in order, then throws zeros.
pub struct ScriptedThrower {
    name: String,
    visits: VecDeque<i32>,
}

impl ScriptedThrower {
    /// Creates a scripted thrower.
    pub fn new(name: impl Into<String>, visits: impl IntoIterator<Item = i32>) -> Self {
        Self {
            name: name.into(),
            visits: visits.into_iter().collect(),
        }
    }
}

impl Thrower for ScriptedThrower {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_visit(&mut self, _state: &PlayerState) -> i32 {
        self.visits.pop_front().unwrap_or(0)
    }
}
