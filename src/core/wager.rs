//! Wager entry, edits and removal.
//!
//! Recording or editing a wager registers its teams and championship when
//! they are new, so the registries always cover the names a wager uses.
//! Strategy and tag are taken as given. A wager stays in the month bucket it
//! was recorded in even when its date is edited.

use crate::{
    core::{Session, championship::ensure_championship, team::ensure_team},
    entities::{LedgerState, Month, Wager, WagerDraft},
    errors::{Error, Result},
    store::LedgerStore,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info};

/// One game of a day's batch.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLine {
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
    /// Amount risked
    pub stake: f64,
    /// Signed result
    pub profit_loss: f64,
}

/// Several games recorded together for one day, sharing date, competition,
/// strategy and tag.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    /// Day of the games
    pub date: NaiveDate,
    /// Championship shared by every game
    pub competition: String,
    /// Strategy shared by every game
    pub strategy: String,
    /// Tag shared by every game
    pub tag: String,
    /// The games
    pub games: Vec<GameLine>,
}

/// Records a wager in a month bucket.
///
/// Returns the wager's position within the month.
pub fn add_wager<S: LedgerStore>(
    session: &mut Session<S>,
    month: Month,
    draft: WagerDraft,
) -> Result<usize> {
    let wager = Wager::try_from(draft)?;
    let (home, away) = (wager.home_team.clone(), wager.away_team.clone());

    let index = session.apply(|state| {
        register_references(state, &wager);
        let index = state.wagers.push(month, wager);
        refresh_game_counts(state);
        Ok(index)
    })?;

    info!(month = %month, index, home = %home, away = %away, "Wager recorded");
    Ok(index)
}

/// Records a day's batch of games in one commit.
///
/// Games without a home or away team are skipped. Any other invalid game
/// rejects the whole batch before anything is recorded. Returns the number of
/// wagers added.
pub fn add_day<S: LedgerStore>(session: &mut Session<S>, month: Month, day: DayEntry) -> Result<usize> {
    if day.competition.trim().is_empty() {
        return Err(Error::validation("Competition is required"));
    }

    let mut wagers = Vec::with_capacity(day.games.len());
    for (idx, game) in day.games.into_iter().enumerate() {
        if game.home_team.trim().is_empty() || game.away_team.trim().is_empty() {
            debug!(game = idx + 1, "Skipping game without both teams");
            continue;
        }
        wagers.push(Wager::try_from(WagerDraft {
            date: day.date,
            competition: day.competition.clone(),
            home_team: game.home_team,
            away_team: game.away_team,
            strategy: day.strategy.clone(),
            tag: day.tag.clone(),
            stake: game.stake,
            profit_loss: game.profit_loss,
        })?);
    }

    if wagers.is_empty() {
        debug!(month = %month, "No complete games in batch, nothing recorded");
        return Ok(0);
    }

    let added = session.apply(|state| {
        let added = wagers.len();
        for wager in wagers {
            register_references(state, &wager);
            state.wagers.push(month, wager);
        }
        refresh_game_counts(state);
        Ok(added)
    })?;

    info!(month = %month, date = %day.date, added, "Day of wagers recorded");
    Ok(added)
}

/// Replaces the wager at `index` of `month`, keeping its bucket and position.
pub fn update_wager<S: LedgerStore>(
    session: &mut Session<S>,
    month: Month,
    index: usize,
    draft: WagerDraft,
) -> Result<()> {
    let wager = Wager::try_from(draft)?;
    if index >= session.state().wagers.month(month).len() {
        return Err(Error::WagerNotFound { month, index });
    }

    session.apply(|state| {
        register_references(state, &wager);
        state.wagers.month_mut(month)[index] = wager;
        refresh_game_counts(state);
        Ok(())
    })?;

    info!(month = %month, index, "Wager updated");
    Ok(())
}

/// Removes the wager at `index` of `month` and returns it.
pub fn remove_wager<S: LedgerStore>(
    session: &mut Session<S>,
    month: Month,
    index: usize,
) -> Result<Wager> {
    if index >= session.state().wagers.month(month).len() {
        return Err(Error::WagerNotFound { month, index });
    }

    let removed = session.apply(|state| {
        let removed = state.wagers.month_mut(month).remove(index);
        refresh_game_counts(state);
        Ok(removed)
    })?;

    info!(month = %month, index, "Wager removed");
    Ok(removed)
}

/// Recomputes every championship's cached game count from the wager book.
pub fn refresh_game_counts(state: &mut LedgerState) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for wager in state.wagers.wagers() {
        *counts.entry(wager.competition.as_str()).or_default() += 1;
    }
    for championship in state.championships.iter_mut() {
        championship.game_count = counts.get(championship.name.as_str()).copied().unwrap_or(0);
    }
}

fn register_references(state: &mut LedgerState, wager: &Wager) {
    ensure_team(state, &wager.home_team);
    ensure_team(state, &wager.away_team);
    ensure_championship(state, &wager.competition);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_wager_registers_names() -> Result<()> {
        let mut session = setup_test_session();
        let index = add_wager(
            &mut session,
            Month::Janeiro,
            test_draft("2024-01-05", "La Liga", "Real Madrid", "Barcelona", 10.0, -10.0),
        )?;
        assert_eq!(index, 0);

        let state = session.state();
        assert!(state.teams.contains("Real Madrid"));
        assert!(state.teams.contains("Barcelona"));
        assert_eq!(state.championships.get("La Liga").unwrap().game_count, 1);
        assert_eq!(state.wagers.month(Month::Janeiro).len(), 1);
        assert_eq!(session.store().save_count(), 1);
        Ok(())
    }

    #[test]
    fn test_add_wager_validation_leaves_state_untouched() {
        let mut session = setup_test_session();
        let err = add_wager(
            &mut session,
            Month::Janeiro,
            test_draft("2024-01-05", "La Liga", "", "Barcelona", 10.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        let err = add_wager(
            &mut session,
            Month::Janeiro,
            test_draft("2024-01-05", "La Liga", "A", "B", 0.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidStake { .. }));

        assert!(session.state().wagers.is_empty());
        assert!(session.state().teams.is_empty());
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_add_day_skips_incomplete_games() -> Result<()> {
        let mut session = setup_test_session();
        let day = DayEntry {
            date: date("2024-02-10"),
            competition: "Primeira Liga".to_string(),
            strategy: "Over 2.5".to_string(),
            tag: "Normal".to_string(),
            games: vec![
                GameLine {
                    home_team: "Benfica".to_string(),
                    away_team: "Porto".to_string(),
                    stake: 2.0,
                    profit_loss: 1.5,
                },
                GameLine {
                    home_team: "Braga".to_string(),
                    away_team: String::new(),
                    stake: 2.0,
                    profit_loss: -2.0,
                },
                GameLine {
                    home_team: "Sporting".to_string(),
                    away_team: "Braga".to_string(),
                    stake: 1.0,
                    profit_loss: -1.0,
                },
            ],
        };

        assert_eq!(add_day(&mut session, Month::Fevereiro, day)?, 2);
        let state = session.state();
        assert_eq!(state.wagers.month(Month::Fevereiro).len(), 2);
        assert_eq!(state.teams.len(), 4);
        assert_eq!(state.championships.get("Primeira Liga").unwrap().game_count, 2);
        assert_eq!(session.store().save_count(), 1);
        Ok(())
    }

    #[test]
    fn test_add_day_requires_competition() {
        let mut session = setup_test_session();
        let day = DayEntry {
            date: date("2024-02-10"),
            competition: " ".to_string(),
            strategy: String::new(),
            tag: String::new(),
            games: Vec::new(),
        };
        assert!(matches!(
            add_day(&mut session, Month::Fevereiro, day).unwrap_err(),
            Error::Validation { .. }
        ));
    }

    #[test]
    fn test_update_keeps_bucket_even_when_date_moves() -> Result<()> {
        let mut session = setup_scenario_session()?;
        update_wager(
            &mut session,
            Month::Janeiro,
            0,
            test_draft("2024-05-01", "Premier League", "Arsenal", "Chelsea", 4.0, 2.0),
        )?;

        let state = session.state();
        let january = state.wagers.month(Month::Janeiro);
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].home_team, "Arsenal");
        assert!(state.wagers.month(Month::Maio).is_empty());
        assert_eq!(state.championships.get("La Liga").unwrap().game_count, 1);
        assert_eq!(state.championships.get("Premier League").unwrap().game_count, 1);
        Ok(())
    }

    #[test]
    fn test_update_and_remove_bad_index() -> Result<()> {
        let mut session = setup_scenario_session()?;
        assert!(matches!(
            remove_wager(&mut session, Month::Janeiro, 7).unwrap_err(),
            Error::WagerNotFound { index: 7, .. }
        ));
        assert!(matches!(
            update_wager(
                &mut session,
                Month::Abril,
                0,
                test_draft("2024-04-01", "X", "A", "B", 1.0, 1.0)
            )
            .unwrap_err(),
            Error::WagerNotFound { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_remove_refreshes_game_count() -> Result<()> {
        let mut session = setup_scenario_session()?;
        let removed = remove_wager(&mut session, Month::Janeiro, 0)?;
        assert_eq!(removed.profit_loss, -10.0);
        assert_eq!(
            session.state().championships.get("La Liga").unwrap().game_count,
            1
        );
        Ok(())
    }
}
