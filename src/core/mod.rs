//! Core business logic - framework-agnostic ledger operations.
//!
//! Mutations take a [`Session`] and commit through its store after the
//! in-memory change succeeds. Aggregations are pure functions over a
//! [`crate::entities::LedgerState`] and recompute everything on each call.

/// Registry/wager consistency checks and reference counting
pub mod audit;
/// Championship registry operations
pub mod championship;
/// Monthly performance, daily rollups and per-month breakdowns
pub mod monthly;
/// Recent games and dashboard overview
pub mod report;
/// Session: state plus store, commit after mutation
pub mod session;
/// Per-team, per-championship, per-strategy and per-tag statistics
pub mod stats;
/// Strategy registry operations
pub mod strategy;
/// Tag set operations
pub mod tag;
/// Team registry operations
pub mod team;
/// Wager entry, edits and removal
pub mod wager;

pub use session::{LoadOutcome, Session};

use crate::{
    entities::EntityKind,
    errors::{Error, Result},
};

/// Trims a name and rejects it when nothing is left.
pub(crate) fn required_name(name: &str, kind: EntityKind) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{kind} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Season used when a championship is created without one.
pub(crate) fn current_season() -> String {
    use chrono::Datelike;
    chrono::Local::now().year().to_string()
}
