//! Championship registry operations.
//!
//! Mirrors the team rules, cascading into each wager's competition field. A
//! rename may also change the season, which nothing else references.

use crate::{
    core::{Session, audit::reference_count, current_season, required_name, wager::refresh_game_counts},
    entities::{Championship, EntityKind, LedgerState, Named},
    errors::{Error, Result},
    store::LedgerStore,
};
use tracing::{debug, info};

/// Registers a championship unless it already exists.
///
/// `season` defaults to the current year. Returns `true` when created.
pub fn upsert_championship<S: LedgerStore>(
    session: &mut Session<S>,
    name: &str,
    season: Option<&str>,
) -> Result<bool> {
    let name = required_name(name, EntityKind::Championship)?;
    if session.state().championships.contains(&name) {
        debug!(championship = %name, "Championship already registered");
        return Ok(false);
    }
    let season = season_or_current(season)?;

    session.apply(|state| {
        state
            .championships
            .insert(Championship::new(name.clone(), season.clone()));
        refresh_game_counts(state);
        Ok(())
    })?;
    info!(championship = %name, season = %season, "Championship registered");
    Ok(true)
}

/// Registers a new championship, refusing duplicates.
pub fn create_championship<S: LedgerStore>(
    session: &mut Session<S>,
    name: &str,
    season: &str,
) -> Result<()> {
    let name = required_name(name, EntityKind::Championship)?;
    let season = required_season(season)?;
    if session.state().championships.contains(&name) {
        return Err(Error::Conflict {
            kind: EntityKind::Championship,
            name,
        });
    }

    session.apply(|state| {
        state
            .championships
            .insert(Championship::new(name.clone(), season.clone()));
        refresh_game_counts(state);
        Ok(())
    })?;
    info!(championship = %name, season = %season, "Championship created");
    Ok(())
}

/// Renames a championship, optionally changing its season, and rewrites the
/// competition of every wager that names it.
///
/// Returns the number of wagers rewritten.
pub fn rename_championship<S: LedgerStore>(
    session: &mut Session<S>,
    old: &str,
    new: &str,
    season: Option<&str>,
) -> Result<usize> {
    let new = required_name(new, EntityKind::Championship)?;
    let season = season.map(required_season).transpose()?;
    let championships = &session.state().championships;
    if !championships.contains(old) {
        return Err(Error::NotFound {
            kind: EntityKind::Championship,
            name: old.to_string(),
        });
    }
    if new != old && championships.contains(&new) {
        return Err(Error::Conflict {
            kind: EntityKind::Championship,
            name: new,
        });
    }

    let rewritten = session.apply(|state| {
        if let Some(championship) = state.championships.get_mut(old) {
            championship.set_name(new.clone());
            if let Some(season) = season {
                championship.season = season;
            }
        }
        let mut rewritten = 0;
        if new != old {
            for wager in state.wagers.wagers_mut() {
                if wager.competition == old {
                    wager.competition.clone_from(&new);
                    rewritten += 1;
                }
            }
        }
        refresh_game_counts(state);
        Ok(rewritten)
    })?;

    info!(old = %old, new = %new, rewritten, "Championship updated");
    Ok(rewritten)
}

/// Removes a championship that no wager references.
pub fn delete_championship<S: LedgerStore>(session: &mut Session<S>, name: &str) -> Result<()> {
    let state = session.state();
    if !state.championships.contains(name) {
        return Err(Error::NotFound {
            kind: EntityKind::Championship,
            name: name.to_string(),
        });
    }
    let references = reference_count(state, EntityKind::Championship, name);
    if references > 0 {
        return Err(Error::InUse {
            kind: EntityKind::Championship,
            name: name.to_string(),
            references,
        });
    }

    session.apply(|state| {
        state.championships.remove(name);
        Ok(())
    })?;
    info!(championship = %name, "Championship removed");
    Ok(())
}

/// Adds the championship with the current season if missing, without
/// committing. Returns whether it was added.
pub(crate) fn ensure_championship(state: &mut LedgerState, name: &str) -> bool {
    let added = state
        .championships
        .insert(Championship::new(name, current_season()));
    if added {
        info!(championship = %name, "Championship added to registry");
    }
    added
}

fn season_or_current(season: Option<&str>) -> Result<String> {
    season.map_or_else(|| Ok(current_season()), required_season)
}

fn required_season(season: &str) -> Result<String> {
    let trimmed = season.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Season cannot be empty"));
    }
    Ok(trimmed.to_string())
}
