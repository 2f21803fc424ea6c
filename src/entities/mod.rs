//! Entity module - plain data types for the ledger.
//!
//! Registries hold named records (teams, championships, strategies) and the
//! tag set. The wager book holds wagers in twelve monthly buckets. Wagers
//! reference registry entries by name only; keeping the two sides consistent
//! is the job of [`crate::core`].

pub mod book;
pub mod championship;
pub mod month;
pub mod registry;
pub mod state;
pub mod strategy;
pub mod tags;
pub mod team;
pub mod wager;

use std::fmt;

pub use book::WagerBook;
pub use championship::Championship;
pub use month::Month;
pub use registry::{Named, Registry};
pub use state::LedgerState;
pub use strategy::Strategy;
pub use tags::{DEFAULT_TAGS, TagSet};
pub use team::Team;
pub use wager::{Wager, WagerDraft};

/// The kinds of named entity a wager can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A team, referenced as home or away side
    Team,
    /// A championship, referenced as the wager's competition
    Championship,
    /// A betting strategy
    Strategy,
    /// A free-form tag label
    Tag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Team => "Team",
            Self::Championship => "Championship",
            Self::Strategy => "Strategy",
            Self::Tag => "Tag",
        };
        f.write_str(label)
    }
}
