//! Team entity - a club that appears as the home or away side of a wager.

use super::Named;
use serde::Serialize;

/// A registered team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Unique, non-empty team name
    pub name: String,
}

impl Team {
    /// Creates a team with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Team {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
