//! Tag set operations.
//!
//! Tags are labels, not records. Renaming or deleting a tag changes only the
//! tag set: wagers keep the old label, and [`crate::core::audit::audit`]
//! lists the orphaned labels.

use crate::{
    core::{Session, audit::reference_count, required_name},
    entities::EntityKind,
    errors::{Error, Result},
    store::LedgerStore,
};
use tracing::{info, warn};

/// Adds a tag label, refusing duplicates.
pub fn add_tag<S: LedgerStore>(session: &mut Session<S>, tag: &str) -> Result<()> {
    let tag = required_name(tag, EntityKind::Tag)?;
    if session.state().tags.contains(&tag) {
        return Err(Error::Conflict {
            kind: EntityKind::Tag,
            name: tag,
        });
    }

    session.apply(|state| {
        state.tags.insert(tag.clone());
        Ok(())
    })?;
    info!(tag = %tag, "Tag added");
    Ok(())
}

/// Renames a tag in place. Wagers carrying the old label are not touched.
pub fn rename_tag<S: LedgerStore>(session: &mut Session<S>, old: &str, new: &str) -> Result<()> {
    let new = required_name(new, EntityKind::Tag)?;
    let state = session.state();
    if !state.tags.contains(old) {
        return Err(Error::NotFound {
            kind: EntityKind::Tag,
            name: old.to_string(),
        });
    }
    if new != old && state.tags.contains(&new) {
        return Err(Error::Conflict {
            kind: EntityKind::Tag,
            name: new,
        });
    }
    let orphaned = if new == old {
        0
    } else {
        reference_count(state, EntityKind::Tag, old)
    };

    session.apply(|state| {
        state.tags.rename(old, new.clone());
        Ok(())
    })?;
    if orphaned > 0 {
        warn!(old = %old, new = %new, orphaned, "Wagers still carry the old tag label");
    }
    info!(old = %old, new = %new, "Tag renamed");
    Ok(())
}

/// Removes a tag. There is no in-use guard.
pub fn delete_tag<S: LedgerStore>(session: &mut Session<S>, tag: &str) -> Result<()> {
    let state = session.state();
    if !state.tags.contains(tag) {
        return Err(Error::NotFound {
            kind: EntityKind::Tag,
            name: tag.to_string(),
        });
    }
    let orphaned = reference_count(state, EntityKind::Tag, tag);

    session.apply(|state| {
        state.tags.remove(tag);
        Ok(())
    })?;
    if orphaned > 0 {
        warn!(tag = %tag, orphaned, "Removed tag is still carried by wagers");
    }
    info!(tag = %tag, "Tag removed");
    Ok(())
}
