//! Dashboard figures
//!
//! Registry sizes and the most recent wagers across the whole year.

use crate::entities::{LedgerState, Month, Wager};
use serde::Serialize;
use std::cmp::Reverse;

/// Number of recent wagers shown when no count is configured.
pub const DEFAULT_RECENT_GAMES: usize = 5;

/// A wager together with the month bucket it lives in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentGame<'a> {
    /// Bucket holding the wager
    pub month: Month,
    /// The wager itself
    #[serde(flatten)]
    pub wager: &'a Wager,
}

/// The `n` most recent wagers, newest first.
///
/// Wagers sharing a date keep calendar-bucket then insertion order.
#[must_use]
pub fn recent_games(state: &LedgerState, n: usize) -> Vec<RecentGame<'_>> {
    let mut games: Vec<RecentGame<'_>> = state
        .wagers
        .iter()
        .map(|(month, wager)| RecentGame { month, wager })
        .collect();
    games.sort_by_key(|game| Reverse(game.wager.date));
    games.truncate(n);
    games
}

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Registered teams
    pub teams: usize,
    /// Registered championships
    pub championships: usize,
    /// Registered strategies
    pub strategies: usize,
    /// Tags in the tag set
    pub tags: usize,
    /// Wagers across all months
    pub wagers: usize,
}

/// Counts every registry and the wager book.
#[must_use]
pub fn overview(state: &LedgerState) -> Overview {
    Overview {
        teams: state.teams.len(),
        championships: state.championships.len(),
        strategies: state.strategies.len(),
        tags: state.tags.len(),
        wagers: state.wagers.len(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{core::wager::add_wager, errors::Result, test_utils::*};

    #[test]
    fn test_recent_games_newest_first() -> Result<()> {
        let mut session = setup_scenario_session()?;
        add_wager(
            &mut session,
            Month::Marco,
            test_draft("2024-03-01", "Serie A", "Roma", "Lazio", 1.0, 1.0),
        )?;

        let recent = recent_games(session.state(), DEFAULT_RECENT_GAMES);
        assert_eq!(recent.len(), 3);
        let dates: Vec<_> = recent.iter().map(|game| game.wager.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-03-01"), date("2024-01-12"), date("2024-01-05")]
        );
        assert_eq!(recent[0].month, Month::Marco);
        Ok(())
    }

    #[test]
    fn test_recent_games_ties_keep_bucket_order() -> Result<()> {
        let mut session = setup_test_session();
        // Same date in two buckets, recorded out of calendar order
        add_wager(
            &mut session,
            Month::Maio,
            test_draft("2024-05-05", "Liga", "C", "D", 1.0, 1.0),
        )?;
        add_wager(
            &mut session,
            Month::Abril,
            test_draft("2024-05-05", "Liga", "A", "B", 1.0, 1.0),
        )?;
        add_wager(
            &mut session,
            Month::Maio,
            test_draft("2024-05-05", "Liga", "E", "F", 1.0, 1.0),
        )?;

        let recent = recent_games(session.state(), 2);
        let homes: Vec<_> = recent.iter().map(|game| game.wager.home_team.as_str()).collect();
        assert_eq!(homes, vec!["A", "C"]);
        Ok(())
    }

    #[test]
    fn test_recent_games_zero_and_empty() -> Result<()> {
        let session = setup_scenario_session()?;
        assert!(recent_games(session.state(), 0).is_empty());
        assert!(recent_games(setup_test_session().state(), 5).is_empty());
        Ok(())
    }

    #[test]
    fn test_overview_counts() -> Result<()> {
        let session = setup_scenario_session()?;
        assert_eq!(
            overview(session.state()),
            Overview {
                teams: 2,
                championships: 1,
                strategies: 1,
                tags: 4,
                wagers: 2,
            }
        );
        Ok(())
    }
}
