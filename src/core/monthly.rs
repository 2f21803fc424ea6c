//! Month-level aggregations
//!
//! Builds the yearly performance table, the per-day rollup of a single month
//! and the figures shown at the top of a month page. Everything is recomputed
//! from the wager book on each call.

use crate::{
    core::stats::{Tally, calculate_roi},
    entities::{LedgerState, Month},
};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::{collections::BTreeMap, fmt};

/// Row label of the yearly performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// One calendar month
    Month(Month),
    /// Sum over all twelve months
    Total,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(month) => write!(f, "{month}"),
            Self::Total => f.write_str("TOTAL"),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the yearly performance table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    /// Month or `TOTAL`
    pub period: Period,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Return on investment in percent
    pub roi_percent: f64,
}

/// Twelve rows in calendar order followed by a `TOTAL` row.
///
/// Months without wagers are included with zero figures.
#[must_use]
pub fn monthly_performance(state: &LedgerState) -> Vec<MonthlyRow> {
    let mut rows = Vec::with_capacity(Month::ALL.len() + 1);
    let mut stake_total = 0.0;
    let mut profit_total = 0.0;

    for (month, wagers) in state.wagers.months() {
        let tally = Tally::over(wagers);
        stake_total += tally.stake;
        profit_total += tally.profit;
        rows.push(MonthlyRow {
            period: Period::Month(month),
            stake_total: tally.stake,
            profit_total: tally.profit,
            roi_percent: tally.roi(),
        });
    }

    rows.push(MonthlyRow {
        period: Period::Total,
        stake_total,
        profit_total,
        roi_percent: calculate_roi(profit_total, stake_total),
    });
    rows
}

/// Figures for one day of a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayResult {
    /// The day
    pub date: NaiveDate,
    /// Wagers placed that day
    pub markets: usize,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Return on investment in percent
    pub roi_percent: f64,
    /// Day ended with `profit_total >= 0`
    pub green: bool,
}

/// Per-day figures of a month, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyRollup {
    /// One entry per distinct date
    pub days: Vec<DayResult>,
    /// Number of distinct dates
    pub days_worked: usize,
    /// Days that ended green
    pub days_green: usize,
    /// Days that ended red
    pub days_red: usize,
}

impl DailyRollup {
    /// Share of worked days that ended green, in percent.
    #[must_use]
    pub fn green_rate(&self) -> f64 {
        if self.days_worked == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.days_green as f64 / self.days_worked as f64 * 100.0;
        rate
    }
}

/// Groups a month's wagers by date.
#[must_use]
pub fn daily_rollup(state: &LedgerState, month: Month) -> DailyRollup {
    let mut by_date: BTreeMap<NaiveDate, Tally> = BTreeMap::new();
    for wager in state.wagers.month(month) {
        by_date.entry(wager.date).or_default().record(wager);
    }

    let days: Vec<DayResult> = by_date
        .into_iter()
        .map(|(date, tally)| DayResult {
            date,
            markets: tally.count,
            stake_total: tally.stake,
            profit_total: tally.profit,
            roi_percent: tally.roi(),
            green: tally.profit >= 0.0,
        })
        .collect();
    let days_green = days.iter().filter(|day| day.green).count();

    DailyRollup {
        days_worked: days.len(),
        days_green,
        days_red: days.len() - days_green,
        days,
    }
}

/// Headline figures of a month page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// The month
    pub month: Month,
    /// Wagers in the month
    pub markets: usize,
    /// Wagers that did not lose
    pub markets_green: usize,
    /// Wagers that lost
    pub markets_red: usize,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Return on investment in percent
    pub roi_percent: f64,
    /// Per-day breakdown
    pub rollup: DailyRollup,
}

/// Builds the headline figures and daily rollup for `month`.
#[must_use]
pub fn month_summary(state: &LedgerState, month: Month) -> MonthSummary {
    let tally = Tally::over(state.wagers.month(month));
    MonthSummary {
        month,
        markets: tally.count,
        markets_green: tally.greens,
        markets_red: tally.reds,
        stake_total: tally.stake,
        profit_total: tally.profit,
        roi_percent: tally.roi(),
        rollup: daily_rollup(state, month),
    }
}

/// Profit of one strategy within a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyBreakdown {
    /// Strategy name as written on the wagers
    pub strategy: String,
    /// Sum of stakes
    pub stake_total: f64,
    /// Sum of profit/loss
    pub profit_total: f64,
    /// Return on investment in percent
    pub roi_percent: f64,
}

/// Totals per strategy used in `month`, sorted by strategy name.
#[must_use]
pub fn strategy_breakdown(state: &LedgerState, month: Month) -> Vec<StrategyBreakdown> {
    let mut by_strategy: BTreeMap<&str, Tally> = BTreeMap::new();
    for wager in state.wagers.month(month) {
        by_strategy
            .entry(wager.strategy.as_str())
            .or_default()
            .record(wager);
    }

    by_strategy
        .into_iter()
        .map(|(strategy, tally)| StrategyBreakdown {
            strategy: strategy.to_string(),
            stake_total: tally.stake,
            profit_total: tally.profit,
            roi_percent: tally.roi(),
        })
        .collect()
}
