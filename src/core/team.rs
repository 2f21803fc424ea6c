//! Team registry operations.
//!
//! Teams are created explicitly or implicitly the first time they appear in a
//! wager. Renames are cascaded into every wager's home and away fields;
//! deletes are refused while any wager names the team.

use crate::{
    core::{Session, audit::reference_count, required_name},
    entities::{EntityKind, LedgerState, Named, Team},
    errors::{Error, Result},
    store::LedgerStore,
};
use tracing::{debug, info};

/// Registers a team unless it already exists.
///
/// Returns `true` when the team was created. An existing team is left alone
/// and nothing is committed.
pub fn upsert_team<S: LedgerStore>(session: &mut Session<S>, name: &str) -> Result<bool> {
    let name = required_name(name, EntityKind::Team)?;
    if session.state().teams.contains(&name) {
        debug!(team = %name, "Team already registered");
        return Ok(false);
    }

    session.apply(|state| {
        ensure_team(state, &name);
        Ok(())
    })?;
    info!(team = %name, "Team registered");
    Ok(true)
}

/// Registers a new team, refusing duplicates.
pub fn create_team<S: LedgerStore>(session: &mut Session<S>, name: &str) -> Result<()> {
    let name = required_name(name, EntityKind::Team)?;
    if session.state().teams.contains(&name) {
        return Err(Error::Conflict {
            kind: EntityKind::Team,
            name,
        });
    }

    session.apply(|state| {
        ensure_team(state, &name);
        Ok(())
    })?;
    info!(team = %name, "Team created");
    Ok(())
}

/// Renames a team and rewrites every wager that names it.
///
/// Returns the number of wagers rewritten.
pub fn rename_team<S: LedgerStore>(
    session: &mut Session<S>,
    old: &str,
    new: &str,
) -> Result<usize> {
    let new = required_name(new, EntityKind::Team)?;
    let teams = &session.state().teams;
    if !teams.contains(old) {
        return Err(Error::NotFound {
            kind: EntityKind::Team,
            name: old.to_string(),
        });
    }
    if new == old {
        debug!(team = %old, "Rename to the same name, nothing to do");
        return Ok(0);
    }
    if teams.contains(&new) {
        return Err(Error::Conflict {
            kind: EntityKind::Team,
            name: new,
        });
    }

    let rewritten = session.apply(|state| {
        if let Some(team) = state.teams.get_mut(old) {
            team.set_name(new.clone());
        }
        let mut rewritten = 0;
        for wager in state.wagers.wagers_mut() {
            if !wager.involves_team(old) {
                continue;
            }
            if wager.home_team == old {
                wager.home_team.clone_from(&new);
            }
            if wager.away_team == old {
                wager.away_team.clone_from(&new);
            }
            rewritten += 1;
        }
        Ok(rewritten)
    })?;

    info!(old = %old, new = %new, rewritten, "Team renamed");
    Ok(rewritten)
}

/// Removes a team that no wager references.
pub fn delete_team<S: LedgerStore>(session: &mut Session<S>, name: &str) -> Result<()> {
    let state = session.state();
    if !state.teams.contains(name) {
        return Err(Error::NotFound {
            kind: EntityKind::Team,
            name: name.to_string(),
        });
    }
    let references = reference_count(state, EntityKind::Team, name);
    if references > 0 {
        return Err(Error::InUse {
            kind: EntityKind::Team,
            name: name.to_string(),
            references,
        });
    }

    session.apply(|state| {
        state.teams.remove(name);
        Ok(())
    })?;
    info!(team = %name, "Team removed");
    Ok(())
}

/// Adds the team to the registry if missing, without committing.
/// Returns whether it was added.
pub(crate) fn ensure_team(state: &mut LedgerState, name: &str) -> bool {
    let added = state.teams.insert(Team::new(name));
    if added {
        info!(team = %name, "Team added to registry");
    }
    added
}
