//! Session - the application state object and its store.
//!
//! A session owns the in-memory [`LedgerState`], which is the source of truth
//! for as long as the session lives. Every successful mutation is followed by
//! a full save through the [`LedgerStore`]. A failed save is reported as
//! [`crate::errors::Error::Persistence`] but the mutation is not rolled back.

use crate::{
    core::audit,
    entities::LedgerState,
    errors::Result,
    store::LedgerStore,
};
use tracing::{debug, info, warn};

/// How the session obtained its initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// State was read from the store
    Loaded,
    /// Nothing was stored; started from the default state
    Fresh,
    /// Stored data was unreadable; started from the default state
    Recovered {
        /// Why the stored data was rejected
        reason: String,
    },
}

/// In-memory ledger bound to a store.
#[derive(Debug)]
pub struct Session<S> {
    state: LedgerState,
    store: S,
    load_outcome: LoadOutcome,
}

impl<S: LedgerStore> Session<S> {
    /// Opens a session, falling back to [`LedgerState::default`] when the
    /// store is empty or unreadable.
    pub fn open(store: S) -> Self {
        Self::open_with(store, LedgerState::default)
    }

    /// Opens a session, using `fresh` to build the state when the store is
    /// empty or unreadable. Never fails: a bad store degrades to a fresh
    /// ledger with a warning.
    pub fn open_with(store: S, fresh: impl FnOnce() -> LedgerState) -> Self {
        let (state, load_outcome) = match store.load() {
            Ok(Some(state)) => {
                info!(
                    teams = state.teams.len(),
                    championships = state.championships.len(),
                    wagers = state.wagers.len(),
                    "Loaded ledger"
                );
                (state, LoadOutcome::Loaded)
            }
            Ok(None) => {
                info!("No stored ledger found, starting a new one");
                (fresh(), LoadOutcome::Fresh)
            }
            Err(e) => {
                warn!(error = %e, "Stored ledger is unreadable, starting a new one");
                (
                    fresh(),
                    LoadOutcome::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        };

        let report = audit::audit(&state);
        if !report.is_clean() {
            warn!(?report, "Ledger has wagers referencing unregistered names");
        }

        Self {
            state,
            store,
            load_outcome,
        }
    }

    /// Wraps an existing state without loading from the store.
    pub const fn new(state: LedgerState, store: S) -> Self {
        Self {
            state,
            store,
            load_outcome: LoadOutcome::Loaded,
        }
    }

    /// Current in-memory state.
    #[must_use]
    pub const fn state(&self) -> &LedgerState {
        &self.state
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// How the initial state was obtained.
    #[must_use]
    pub const fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Saves the current state through the store.
    pub fn commit(&mut self) -> Result<()> {
        self.store
            .save(&self.state)
            .inspect(|()| debug!("Ledger committed"))
            .inspect_err(|e| warn!(error = %e, "Ledger change kept in memory but not saved"))
    }

    /// Runs a mutation and commits when it succeeds.
    ///
    /// If `change` fails nothing is committed; `change` must then leave the
    /// state untouched, so every check happens before the first write.
    pub(crate) fn apply<T>(
        &mut self,
        change: impl FnOnce(&mut LedgerState) -> Result<T>,
    ) -> Result<T> {
        let outcome = change(&mut self.state)?;
        self.commit()?;
        Ok(outcome)
    }
}
