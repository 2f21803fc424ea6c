//! Championship entity - the competition a wager belongs to.
//!
//! `game_count` is a cached value derived from the wager book. It is refreshed
//! by [`crate::core::wager::refresh_game_counts`] and never edited by hand.

use super::Named;
use serde::Serialize;

/// A registered championship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Championship {
    /// Unique championship name
    pub name: String,
    /// Season label, usually a year such as "2024" or "2024/25"
    pub season: String,
    /// Number of wagers whose competition is this championship
    pub game_count: usize,
}

impl Championship {
    /// Creates a championship with no recorded games.
    pub fn new(name: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            season: season.into(),
            game_count: 0,
        }
    }
}

impl Named for Championship {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
