//! Unified error type for the ledger.
//!
//! Every user action returns [`Result`]. None of these errors is fatal to a
//! session: validation, conflict and in-use errors abort the action before any
//! mutation, while a [`Error::Persistence`] raised by a commit leaves the
//! already-applied in-memory change in place.

use crate::entities::{EntityKind, Month};
use thiserror::Error;

/// All errors produced by the ledger core, its stores and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problems.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A required field is empty or missing.
    #[error("Validation error: {message}")]
    Validation {
        /// Which field failed and why
        message: String,
    },

    /// Stake is not a finite positive amount.
    #[error("Invalid stake: {stake} (must be greater than zero)")]
    InvalidStake {
        /// The rejected stake
        stake: f64,
    },

    /// A create or rename would duplicate an existing name.
    #[error("{kind} '{name}' already exists")]
    Conflict {
        /// Registry the name collided in
        kind: EntityKind,
        /// The duplicate name
        name: String,
    },

    /// Delete blocked because wagers still reference the entity.
    #[error("{kind} '{name}' is used by {references} wager(s) and cannot be removed")]
    InUse {
        /// Registry of the blocked entity
        kind: EntityKind,
        /// Name of the blocked entity
        name: String,
        /// Number of wagers referencing it
        references: usize,
    },

    /// Rename or delete target does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// Registry that was searched
        kind: EntityKind,
        /// The missing name
        name: String,
    },

    /// No wager at the given position of a month bucket.
    #[error("No wager #{index} in {month}")]
    WagerNotFound {
        /// Month bucket searched
        month: Month,
        /// Zero-based position
        index: usize,
    },

    /// Loading or saving the ledger failed.
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description including the path involved
        message: String,
    },

    /// I/O error outside the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error outside the store.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True when the error came from a commit, meaning the in-memory change
    /// was applied but may not be durable.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_use_message_names_entity() {
        let err = Error::InUse {
            kind: EntityKind::Championship,
            name: "La Liga".to_string(),
            references: 2,
        };
        assert_eq!(
            err.to_string(),
            "Championship 'La Liga' is used by 2 wager(s) and cannot be removed"
        );
    }

    #[test]
    fn test_wager_not_found_message() {
        let err = Error::WagerNotFound {
            month: Month::Marco,
            index: 4,
        };
        assert_eq!(err.to_string(), "No wager #4 in Março");
    }

    #[test]
    fn test_is_persistence() {
        assert!(
            Error::Persistence {
                message: "disk full".to_string()
            }
            .is_persistence()
        );
        assert!(!Error::validation("name").is_persistence());
    }
}
