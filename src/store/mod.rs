//! Persistence adapters for the ledger.
//!
//! The core only sees the [`LedgerStore`] trait. A store saves the whole
//! [`LedgerState`] on every commit and loads it once when a session opens.

/// Wire format of the persisted JSON document
pub mod document;
/// JSON file adapter
pub mod json_file;
/// In-memory adapter
pub mod memory;

use crate::{entities::LedgerState, errors::Result};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable home of a [`LedgerState`].
pub trait LedgerStore {
    /// Loads the stored state.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and an
    /// [`crate::errors::Error::Persistence`] when stored data cannot be read
    /// or is structurally invalid.
    fn load(&self) -> Result<Option<LedgerState>>;

    /// Overwrites the stored state with `state`.
    fn save(&mut self, state: &LedgerState) -> Result<()>;
}
