//! Strategy registry operations.
//!
//! Renames cascade into each wager's strategy field. Deletion has no in-use
//! guard: wagers keep the removed strategy's name and show up in
//! [`crate::core::audit::audit`].

use crate::{
    core::{Session, audit::reference_count, required_name},
    entities::{EntityKind, Named, Strategy},
    errors::{Error, Result},
    store::LedgerStore,
};
use tracing::{debug, info, warn};

/// Registers a strategy unless it already exists. Returns `true` when
/// created.
pub fn upsert_strategy<S: LedgerStore>(
    session: &mut Session<S>,
    name: &str,
    description: &str,
) -> Result<bool> {
    let name = required_name(name, EntityKind::Strategy)?;
    if session.state().strategies.contains(&name) {
        debug!(strategy = %name, "Strategy already registered");
        return Ok(false);
    }

    session.apply(|state| {
        state
            .strategies
            .insert(Strategy::new(name.clone(), description.trim()));
        Ok(())
    })?;
    info!(strategy = %name, "Strategy registered");
    Ok(true)
}

/// Registers a new strategy, refusing duplicates.
pub fn create_strategy<S: LedgerStore>(
    session: &mut Session<S>,
    name: &str,
    description: &str,
) -> Result<()> {
    let name = required_name(name, EntityKind::Strategy)?;
    if session.state().strategies.contains(&name) {
        return Err(Error::Conflict {
            kind: EntityKind::Strategy,
            name,
        });
    }

    session.apply(|state| {
        state
            .strategies
            .insert(Strategy::new(name.clone(), description.trim()));
        Ok(())
    })?;
    info!(strategy = %name, "Strategy created");
    Ok(())
}

/// Renames a strategy, optionally replacing its description, and rewrites
/// every wager that names it. Returns the number of wagers rewritten.
pub fn rename_strategy<S: LedgerStore>(
    session: &mut Session<S>,
    old: &str,
    new: &str,
    description: Option<&str>,
) -> Result<usize> {
    let new = required_name(new, EntityKind::Strategy)?;
    let strategies = &session.state().strategies;
    if !strategies.contains(old) {
        return Err(Error::NotFound {
            kind: EntityKind::Strategy,
            name: old.to_string(),
        });
    }
    if new != old && strategies.contains(&new) {
        return Err(Error::Conflict {
            kind: EntityKind::Strategy,
            name: new,
        });
    }

    let rewritten = session.apply(|state| {
        if let Some(strategy) = state.strategies.get_mut(old) {
            strategy.set_name(new.clone());
            if let Some(description) = description {
                strategy.description = description.trim().to_string();
            }
        }
        let mut rewritten = 0;
        if new != old {
            for wager in state.wagers.wagers_mut() {
                if wager.strategy == old {
                    wager.strategy.clone_from(&new);
                    rewritten += 1;
                }
            }
        }
        Ok(rewritten)
    })?;

    info!(old = %old, new = %new, rewritten, "Strategy updated");
    Ok(rewritten)
}

/// Removes a strategy. Wagers that name it are left as they are.
pub fn delete_strategy<S: LedgerStore>(session: &mut Session<S>, name: &str) -> Result<()> {
    let state = session.state();
    if !state.strategies.contains(name) {
        return Err(Error::NotFound {
            kind: EntityKind::Strategy,
            name: name.to_string(),
        });
    }
    let references = reference_count(state, EntityKind::Strategy, name);

    session.apply(|state| {
        state.strategies.remove(name);
        Ok(())
    })?;
    if references > 0 {
        warn!(strategy = %name, references, "Removed strategy is still named by wagers");
    }
    info!(strategy = %name, "Strategy removed");
    Ok(())
}
