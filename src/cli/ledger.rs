//! Handlers for the dashboard, `wager`, `month` and `audit` commands.

use super::{DayArgs, RunOptions, WagerArgs, WagerCommand, done, emit, render};
use crate::{
    core::{
        Session,
        audit::{IntegrityReport, audit as run_audit},
        monthly::{self, MonthSummary, MonthlyRow, StrategyBreakdown},
        report::{self, Overview, RecentGame},
        wager::{self, DayEntry, GameLine},
    },
    entities::{Month, Wager, WagerDraft},
    errors::{Error, Result},
    store::LedgerStore,
};
use serde::Serialize;
use std::str::FromStr;

#[derive(Serialize)]
struct Dashboard<'a> {
    overview: Overview,
    monthly: Vec<MonthlyRow>,
    recent_games: Vec<RecentGame<'a>>,
}

/// Executes `dashboard`.
pub fn dashboard<S: LedgerStore>(session: &Session<S>, options: RunOptions) -> Result<String> {
    let state = session.state();
    let view = Dashboard {
        overview: report::overview(state),
        monthly: monthly::monthly_performance(state),
        recent_games: report::recent_games(state, options.recent_games),
    };
    emit(options, &view, |view| {
        render::render_dashboard(&view.overview, &view.monthly, &view.recent_games)
    })
}

#[derive(Serialize)]
struct MonthPage<'a> {
    #[serde(flatten)]
    summary: MonthSummary,
    strategies: Vec<StrategyBreakdown>,
    wagers: &'a [Wager],
}

/// Executes `month <MONTH>`.
pub fn month<S: LedgerStore>(
    session: &Session<S>,
    month: Month,
    options: RunOptions,
) -> Result<String> {
    let state = session.state();
    let page = MonthPage {
        summary: monthly::month_summary(state, month),
        strategies: monthly::strategy_breakdown(state, month),
        wagers: state.wagers.month(month),
    };
    emit(options, &page, |page| {
        render::render_month(&page.summary, &page.strategies, page.wagers)
    })
}

/// Executes `audit`.
pub fn audit<S: LedgerStore>(session: &Session<S>, options: RunOptions) -> Result<String> {
    let report: IntegrityReport = run_audit(session.state());
    emit(options, &report, render::render_audit)
}

#[derive(Serialize)]
struct MonthWagers<'a> {
    month: Month,
    wagers: &'a [Wager],
}

/// Executes a `wager` subcommand.
pub fn wager<S: LedgerStore>(
    command: WagerCommand,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        WagerCommand::Add { month, wager: args } => {
            let month = month.unwrap_or_else(|| Month::from_date(args.date));
            let index = wager::add_wager(session, month, args.into())?;
            done(options, &format!("Wager #{index} recorded in {month}"))
        }
        WagerCommand::Day(args) => {
            let month = args.month.unwrap_or_else(|| Month::from_date(args.date));
            let day = DayEntry::try_from(args)?;
            let added = wager::add_day(session, month, day)?;
            done(options, &format!("{added} wager(s) recorded in {month}"))
        }
        WagerCommand::Edit {
            month,
            index,
            wager: args,
        } => {
            wager::update_wager(session, month, index, args.into())?;
            done(options, &format!("Wager #{index} in {month} updated"))
        }
        WagerCommand::Remove { month, index } => {
            let removed = wager::remove_wager(session, month, index)?;
            done(
                options,
                &format!(
                    "Removed wager #{index} in {month}: {} vs {} on {}",
                    removed.home_team, removed.away_team, removed.date
                ),
            )
        }
        WagerCommand::List { month } => {
            let state = session.state();
            let months: Vec<MonthWagers<'_>> = match month {
                Some(month) => vec![MonthWagers {
                    month,
                    wagers: state.wagers.month(month),
                }],
                None => state
                    .wagers
                    .months()
                    .filter(|(_, wagers)| !wagers.is_empty())
                    .map(|(month, wagers)| MonthWagers { month, wagers })
                    .collect(),
            };
            emit(options, &months, |months| {
                if months.is_empty() {
                    return "No wagers recorded yet.\n".to_string();
                }
                months
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}\n{}",
                            entry.month,
                            render::render_wagers(entry.month, entry.wagers)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

impl From<WagerArgs> for WagerDraft {
    fn from(args: WagerArgs) -> Self {
        Self {
            date: args.date,
            competition: args.competition,
            home_team: args.home,
            away_team: args.away,
            strategy: args.strategy,
            tag: args.tag,
            stake: args.stake,
            profit_loss: args.profit_loss,
        }
    }
}

impl FromStr for GameLine {
    type Err = Error;

    /// Parses `HOME,AWAY,STAKE,PROFIT_LOSS`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [home, away, stake, profit_loss] = parts.as_slice() else {
            return Err(Error::validation(format!(
                "Game '{s}' must be HOME,AWAY,STAKE,PROFIT_LOSS"
            )));
        };
        let amount = |value: &str, field: &str| {
            value.parse::<f64>().map_err(|e| {
                Error::validation(format!("Invalid {field} '{value}' in game '{s}': {e}"))
            })
        };
        Ok(Self {
            home_team: (*home).to_string(),
            away_team: (*away).to_string(),
            stake: amount(*stake, "stake")?,
            profit_loss: amount(*profit_loss, "profit/loss")?,
        })
    }
}

impl TryFrom<DayArgs> for DayEntry {
    type Error = Error;

    fn try_from(args: DayArgs) -> Result<Self> {
        let games = args
            .games
            .iter()
            .map(|game| game.parse())
            .collect::<Result<Vec<GameLine>>>()?;
        Ok(Self {
            date: args.date,
            competition: args.competition,
            strategy: args.strategy,
            tag: args.tag,
            games,
        })
    }
}
