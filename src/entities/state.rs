//! The application state object.
//!
//! [`LedgerState`] is everything that is persisted: the three registries,
//! the tag set and the wager book. It is owned by a
//! [`crate::core::Session`] and passed by reference to the aggregation
//! functions.

use super::{Championship, Registry, Strategy, TagSet, Team, WagerBook};

/// Registries plus wager book.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    /// Registered teams
    pub teams: Registry<Team>,
    /// Registered championships
    pub championships: Registry<Championship>,
    /// Registered strategies
    pub strategies: Registry<Strategy>,
    /// Tag labels
    pub tags: TagSet,
    /// Wagers by month
    pub wagers: WagerBook,
}

impl LedgerState {
    /// Empty registries and book with the given tag set.
    #[must_use]
    pub fn with_tags(tags: TagSet) -> Self {
        Self {
            teams: Registry::new(),
            championships: Registry::new(),
            strategies: Registry::new(),
            tags,
            wagers: WagerBook::new(),
        }
    }
}

impl Default for LedgerState {
    /// Fresh ledger: empty registries, twelve empty months, default tags.
    fn default() -> Self {
        Self::with_tags(TagSet::defaults())
    }
}
