//! Strategy entity.

use super::Named;
use serde::Serialize;

/// A registered betting strategy.
///
/// `team` and `tags` are carried through persistence untouched; nothing in
/// the ledger interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strategy {
    /// Unique strategy name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Optional team the strategy was written for
    pub team: Option<String>,
    /// Optional tag labels attached to the strategy
    pub tags: Vec<String>,
}

impl Strategy {
    /// Creates a strategy with a description and no team or tags.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            team: None,
            tags: Vec::new(),
        }
    }
}

impl Named for Strategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
