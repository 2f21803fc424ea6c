//! In-memory store, used by tests and by callers that do not need
//! durability.

use super::LedgerStore;
use crate::{
    entities::LedgerState,
    errors::{Error, Result},
};

/// Keeps the last saved state in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<LedgerState>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// An empty store; loading returns nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`.
    #[must_use]
    pub fn with_state(state: LedgerState) -> Self {
        Self {
            saved: Some(state),
            ..Self::default()
        }
    }

    /// Makes every following save fail with a persistence error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The last successfully saved state.
    #[must_use]
    pub const fn saved(&self) -> Option<&LedgerState> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Option<LedgerState>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, state: &LedgerState) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Persistence {
                message: "Memory store is set to fail saves".to_string(),
            });
        }
        self.saved = Some(state.clone());
        self.save_count += 1;
        Ok(())
    }
}
