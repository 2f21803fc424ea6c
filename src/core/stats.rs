//! Per-entity profitability statistics.
//!
//! Every function scans the whole wager book on each call, so results are
//! always consistent with the current state and calling twice without a
//! mutation in between gives identical results.
//!
//! Green/red rule: a wager with `profit_loss >= 0` is green, otherwise red.
//! Break-even counts as green.

use crate::entities::{LedgerState, Wager};
use serde::Serialize;

/// Return on investment in percent, 0 when nothing was staked.
#[must_use]
pub fn calculate_roi(profit: f64, stake: f64) -> f64 {
    if stake > 0.0 {
        profit / stake * 100.0
    } else {
        0.0
    }
}

/// Running totals over a set of wagers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Tally {
    pub(crate) count: usize,
    pub(crate) greens: usize,
    pub(crate) reds: usize,
    pub(crate) stake: f64,
    pub(crate) profit: f64,
}

impl Tally {
    pub(crate) fn record(&mut self, wager: &Wager) {
        self.count += 1;
        if wager.is_green() {
            self.greens += 1;
        } else {
            self.reds += 1;
        }
        self.stake += wager.stake;
        self.profit += wager.profit_loss;
    }

    pub(crate) fn over<'a>(wagers: impl IntoIterator<Item = &'a Wager>) -> Self {
        let mut tally = Self::default();
        for wager in wagers {
            tally.record(wager);
        }
        tally
    }

    pub(crate) fn roi(&self) -> f64 {
        calculate_roi(self.profit, self.stake)
    }
}

/// Statistics for one team, over wagers where it played either side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    /// Wagers involving the team
    pub market_count: usize,
    /// Wagers that did not lose
    pub greens: usize,
    /// Wagers that lost
    pub reds: usize,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// `profit_total / stake_total * 100`, 0 when nothing was staked
    pub roi_percent: f64,
}

/// Statistics for one championship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipStats {
    /// Wagers in the championship
    pub game_count: usize,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Wagers that did not lose
    pub greens: usize,
    /// Wagers that lost
    pub reds: usize,
    /// Return on investment in percent
    pub roi_percent: f64,
}

/// Statistics for one strategy or one tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionStats {
    /// Strategy name or tag label
    pub name: String,
    /// Wagers that did not lose
    pub greens: usize,
    /// Wagers that lost
    pub reds: usize,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Return on investment in percent
    pub roi_percent: f64,
}

/// A team's statistics labelled with its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    /// Team name
    pub team: String,
    /// The team's figures
    #[serde(flatten)]
    pub stats: TeamStats,
}

/// A championship's statistics labelled with its name and season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipRow {
    /// Championship name
    pub championship: String,
    /// Season label
    pub season: String,
    /// The championship's figures
    #[serde(flatten)]
    pub stats: ChampionshipStats,
}

impl From<Tally> for TeamStats {
    fn from(tally: Tally) -> Self {
        Self {
            market_count: tally.count,
            greens: tally.greens,
            reds: tally.reds,
            stake_total: tally.stake,
            profit_total: tally.profit,
            roi_percent: tally.roi(),
        }
    }
}

impl From<Tally> for ChampionshipStats {
    fn from(tally: Tally) -> Self {
        Self {
            game_count: tally.count,
            stake_total: tally.stake,
            profit_total: tally.profit,
            greens: tally.greens,
            reds: tally.reds,
            roi_percent: tally.roi(),
        }
    }
}

impl SelectionStats {
    fn from_tally(name: &str, tally: Tally) -> Self {
        Self {
            name: name.to_string(),
            greens: tally.greens,
            reds: tally.reds,
            stake_total: tally.stake,
            profit_total: tally.profit,
            roi_percent: tally.roi(),
        }
    }
}

/// Statistics for wagers where `name` is the home or away team.
#[must_use]
pub fn team_stats(state: &LedgerState, name: &str) -> TeamStats {
    Tally::over(state.wagers.wagers().filter(|w| w.involves_team(name))).into()
}

/// Statistics for wagers whose competition is `name`.
#[must_use]
pub fn championship_stats(state: &LedgerState, name: &str) -> ChampionshipStats {
    Tally::over(state.wagers.wagers().filter(|w| w.competition == name)).into()
}

/// Statistics for wagers placed with strategy `name`.
#[must_use]
pub fn strategy_stats(state: &LedgerState, name: &str) -> SelectionStats {
    let tally = Tally::over(state.wagers.wagers().filter(|w| w.strategy == name));
    SelectionStats::from_tally(name, tally)
}

/// Statistics for wagers carrying the tag `value`.
#[must_use]
pub fn tag_stats(state: &LedgerState, value: &str) -> SelectionStats {
    let tally = Tally::over(state.wagers.wagers().filter(|w| w.tag == value));
    SelectionStats::from_tally(value, tally)
}

/// One row per registered team, in registry order.
#[must_use]
pub fn all_team_stats(state: &LedgerState) -> Vec<TeamRow> {
    state
        .teams
        .iter()
        .map(|team| TeamRow {
            team: team.name.clone(),
            stats: team_stats(state, &team.name),
        })
        .collect()
}

/// One row per registered championship, in registry order.
#[must_use]
pub fn all_championship_stats(state: &LedgerState) -> Vec<ChampionshipRow> {
    state
        .championships
        .iter()
        .map(|championship| ChampionshipRow {
            championship: championship.name.clone(),
            season: championship.season.clone(),
            stats: championship_stats(state, &championship.name),
        })
        .collect()
}

/// One row per registered strategy, in registry order.
#[must_use]
pub fn all_strategy_stats(state: &LedgerState) -> Vec<SelectionStats> {
    state
        .strategies
        .names()
        .map(|name| strategy_stats(state, name))
        .collect()
}

/// One row per tag in the tag set, in order.
#[must_use]
pub fn all_tag_stats(state: &LedgerState) -> Vec<SelectionStats> {
    state.tags.iter().map(|tag| tag_stats(state, tag)).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        core::wager::add_wager,
        entities::Month,
        errors::Result,
        test_utils::*,
    };

    #[test]
    fn test_calculate_roi_zero_stake() {
        assert_eq!(calculate_roi(50.0, 0.0), 0.0);
        assert_eq!(calculate_roi(-5.0, 10.0), -50.0);
    }

    #[test]
    fn test_single_losing_wager_team_stats() -> Result<()> {
        let mut session = setup_test_session();
        add_wager(
            &mut session,
            Month::Janeiro,
            test_draft("2024-01-05", "La Liga", "Real Madrid", "Barcelona", 10.0, -10.0),
        )?;

        let stats = team_stats(session.state(), "Real Madrid");
        assert_eq!(
            stats,
            TeamStats {
                market_count: 1,
                greens: 0,
                reds: 1,
                stake_total: 10.0,
                profit_total: -10.0,
                roi_percent: -100.0,
            }
        );
        Ok(())
    }

    #[test]
    fn test_championship_stats_after_second_wager() -> Result<()> {
        let session = setup_scenario_session()?;
        let stats = championship_stats(session.state(), "La Liga");

        assert_eq!(stats.game_count, 2);
        assert_eq!(stats.stake_total, 15.0);
        assert_eq!(stats.profit_total, -5.0);
        assert_eq!(stats.greens, 1);
        assert_eq!(stats.reds, 1);
        assert!((stats.roi_percent - (-33.333_333)).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_break_even_counts_as_green() -> Result<()> {
        let mut session = setup_test_session();
        add_wager(
            &mut session,
            Month::Marco,
            test_draft("2024-03-02", "Serie A", "Inter", "Milan", 4.0, 0.0),
        )?;
        let stats = team_stats(session.state(), "Inter");
        assert_eq!(stats.greens, 1);
        assert_eq!(stats.reds, 0);
        assert_eq!(stats.roi_percent, 0.0);
        Ok(())
    }

    #[test]
    fn test_unknown_entity_has_zero_stats() {
        let session = setup_test_session();
        let stats = team_stats(session.state(), "Nobody");
        assert_eq!(stats.market_count, 0);
        assert_eq!(stats.roi_percent, 0.0);
        let stats = tag_stats(session.state(), "Normal");
        assert_eq!(stats.stake_total, 0.0);
        assert_eq!(stats.roi_percent, 0.0);
    }

    #[test]
    fn test_stats_are_idempotent() -> Result<()> {
        let session = setup_scenario_session()?;
        let state = session.state();
        assert_eq!(team_stats(state, "Barcelona"), team_stats(state, "Barcelona"));
        assert_eq!(all_championship_stats(state), all_championship_stats(state));
        assert_eq!(all_tag_stats(state), all_tag_stats(state));
        Ok(())
    }

    #[test]
    fn test_greens_plus_reds_equals_markets_for_all_teams() -> Result<()> {
        let session = setup_scenario_session()?;
        for row in all_team_stats(session.state()) {
            assert_eq!(row.stats.greens + row.stats.reds, row.stats.market_count);
        }
        Ok(())
    }

    #[test]
    fn test_strategy_and_tag_rows_follow_registry_order() -> Result<()> {
        let session = setup_scenario_session()?;
        let strategies = all_strategy_stats(session.state());
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].name, "Value Bet");
        assert_eq!(strategies[0].stake_total, 15.0);

        let tags = all_tag_stats(session.state());
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Normal", "Arbitrage", "Value Bet", "Sure Bet"]);
        assert_eq!(tags[0].greens + tags[0].reds, 2);
        Ok(())
    }
}
