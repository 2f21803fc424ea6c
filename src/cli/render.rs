//! Plain-text rendering of ledger views.
//!
//! Every function returns a `String` so output can be tested without
//! capturing stdout.

use crate::{
    core::{
        audit::IntegrityReport,
        monthly::{MonthSummary, MonthlyRow, StrategyBreakdown},
        report::{Overview, RecentGame},
        stats::{ChampionshipRow, SelectionStats, TeamRow, TeamStats},
    },
    entities::{Championship, Month, Strategy, Wager},
};
use std::fmt::Write;
use tabled::{Table, Tabled};

/// Formats an amount in euros, e.g. "€10.00" or "€-2.50".
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("€{amount:.2}")
}

/// Formats a result with an explicit sign, e.g. "€+5.00" or "€-10.00".
#[must_use]
pub fn format_result(amount: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let amount = amount + 0.0;
    if amount >= 0.0 {
        format!("€+{amount:.2}")
    } else {
        format!("€{amount:.2}")
    }
}

/// Formats a percentage with two decimals.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut out = Table::new(rows).to_string();
    out.push('\n');
    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

#[derive(Tabled)]
struct MonthLine {
    #[tabled(rename = "Month")]
    period: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

#[derive(Tabled)]
struct WagerCells {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Competition")]
    competition: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Away")]
    away: String,
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
}

impl From<&Wager> for WagerCells {
    fn from(wager: &Wager) -> Self {
        Self {
            date: wager.date.to_string(),
            competition: wager.competition.clone(),
            home: wager.home_team.clone(),
            away: wager.away_team.clone(),
            strategy: wager.strategy.clone(),
            tag: wager.tag.clone(),
            stake: format_currency(wager.stake),
            profit_loss: format_result(wager.profit_loss),
        }
    }
}

#[derive(Tabled)]
struct WagerLine {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(inline)]
    cells: WagerCells,
    #[tabled(rename = "% Stake")]
    stake_percent: String,
}

#[derive(Tabled)]
struct RecentLine {
    #[tabled(rename = "Month")]
    month: Month,
    #[tabled(inline)]
    cells: WagerCells,
}

#[derive(Tabled)]
struct DayLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Markets")]
    markets: usize,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Day")]
    outcome: &'static str,
}

#[derive(Tabled)]
struct BreakdownLine {
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

#[derive(Tabled)]
struct TeamLine {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Markets")]
    markets: usize,
    #[tabled(rename = "Greens")]
    greens: usize,
    #[tabled(rename = "Reds")]
    reds: usize,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

impl TeamLine {
    fn new(team: &str, stats: &TeamStats) -> Self {
        Self {
            team: team.to_string(),
            markets: stats.market_count,
            greens: stats.greens,
            reds: stats.reds,
            stake: format_currency(stats.stake_total),
            profit_loss: format_result(stats.profit_total),
            roi: format_percent(stats.roi_percent),
        }
    }
}

#[derive(Tabled)]
struct ChampionshipLine {
    #[tabled(rename = "Championship")]
    championship: String,
    #[tabled(rename = "Season")]
    season: String,
    #[tabled(rename = "Games")]
    games: usize,
    #[tabled(rename = "Greens")]
    greens: usize,
    #[tabled(rename = "Reds")]
    reds: usize,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

#[derive(Tabled)]
struct StrategyLine {
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Greens")]
    greens: usize,
    #[tabled(rename = "Reds")]
    reds: usize,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

#[derive(Tabled)]
struct TagLine {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Greens")]
    greens: usize,
    #[tabled(rename = "Reds")]
    reds: usize,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

/// Dashboard: headline counts, yearly performance and recent games.
#[must_use]
pub fn render_dashboard(
    overview: &Overview,
    monthly: &[MonthlyRow],
    recent: &[RecentGame<'_>],
) -> String {
    let mut out = String::new();
    section(&mut out, "Overview");
    let _ = writeln!(out, "Teams:         {}", overview.teams);
    let _ = writeln!(out, "Championships: {}", overview.championships);
    let _ = writeln!(out, "Strategies:    {}", overview.strategies);
    let _ = writeln!(out, "Tags:          {}", overview.tags);
    let _ = writeln!(out, "Wagers:        {}", overview.wagers);

    section(&mut out, "Monthly performance");
    out.push_str(&render_monthly(monthly));

    section(&mut out, "Recent games");
    if recent.is_empty() {
        out.push_str("No wagers recorded yet.\n");
    } else {
        out.push_str(&table(recent.iter().map(|game| RecentLine {
            month: game.month,
            cells: game.wager.into(),
        })));
    }
    out
}

/// Yearly performance table, one line per month plus TOTAL.
#[must_use]
pub fn render_monthly(rows: &[MonthlyRow]) -> String {
    table(rows.iter().map(|row| MonthLine {
        period: row.period.to_string(),
        stake: format_currency(row.stake_total),
        profit_loss: format_result(row.profit_total),
        roi: format_percent(row.roi_percent),
    }))
}

/// Wagers of one month with their positions.
#[must_use]
pub fn render_wagers(month: Month, wagers: &[Wager]) -> String {
    if wagers.is_empty() {
        return format!("No wagers in {month}.\n");
    }
    table(wagers.iter().enumerate().map(|(idx, wager)| WagerLine {
        position: format!("#{idx}"),
        cells: wager.into(),
        stake_percent: format_percent(wager.stake_percent()),
    }))
}

/// Month page: headline figures, daily results, strategies and wagers.
#[must_use]
pub fn render_month(
    summary: &MonthSummary,
    breakdown: &[StrategyBreakdown],
    wagers: &[Wager],
) -> String {
    let mut out = String::new();
    section(&mut out, &summary.month.to_string());
    let _ = writeln!(
        out,
        "Markets: {} ({} green, {} red)",
        summary.markets, summary.markets_green, summary.markets_red
    );
    let _ = writeln!(out, "Stake:   {}", format_currency(summary.stake_total));
    let _ = writeln!(out, "Result:  {}", format_result(summary.profit_total));
    let _ = writeln!(out, "ROI:     {}", format_percent(summary.roi_percent));
    let rollup = &summary.rollup;
    let _ = writeln!(
        out,
        "Days:    {} worked, {} green, {} red ({} green)",
        rollup.days_worked,
        rollup.days_green,
        rollup.days_red,
        format_percent(rollup.green_rate())
    );

    if !rollup.days.is_empty() {
        section(&mut out, "Daily results");
        out.push_str(&table(rollup.days.iter().map(|day| DayLine {
            date: day.date.to_string(),
            markets: day.markets,
            stake: format_currency(day.stake_total),
            profit_loss: format_result(day.profit_total),
            roi: format_percent(day.roi_percent),
            outcome: if day.green { "green" } else { "red" },
        })));
    }

    if !breakdown.is_empty() {
        section(&mut out, "Strategies");
        out.push_str(&table(breakdown.iter().map(|row| BreakdownLine {
            strategy: row.strategy.clone(),
            stake: format_currency(row.stake_total),
            profit_loss: format_result(row.profit_total),
            roi: format_percent(row.roi_percent),
        })));
    }

    section(&mut out, "Wagers");
    out.push_str(&render_wagers(summary.month, wagers));
    out
}

/// Team list with statistics.
#[must_use]
pub fn render_team_rows(rows: &[TeamRow]) -> String {
    if rows.is_empty() {
        return "No teams registered.\n".to_string();
    }
    table(rows.iter().map(|row| TeamLine::new(&row.team, &row.stats)))
}

/// Statistics of a single team.
#[must_use]
pub fn render_team_stats(name: &str, stats: &TeamStats) -> String {
    table([TeamLine::new(name, stats)])
}

/// Championship list with season and statistics.
#[must_use]
pub fn render_championship_rows(rows: &[ChampionshipRow]) -> String {
    if rows.is_empty() {
        return "No championships registered.\n".to_string();
    }
    table(rows.iter().map(|row| ChampionshipLine {
        championship: row.championship.clone(),
        season: row.season.clone(),
        games: row.stats.game_count,
        greens: row.stats.greens,
        reds: row.stats.reds,
        stake: format_currency(row.stats.stake_total),
        profit_loss: format_result(row.stats.profit_total),
        roi: format_percent(row.stats.roi_percent),
    }))
}

/// Strategy list: description, linked team, tags and statistics.
#[must_use]
pub fn render_strategy_rows<'a>(
    strategies: impl IntoIterator<Item = &'a Strategy>,
    stats: &[SelectionStats],
) -> String {
    let lines: Vec<StrategyLine> = strategies
        .into_iter()
        .zip(stats)
        .map(|(strategy, stats)| StrategyLine {
            strategy: strategy.name.clone(),
            description: strategy.description.clone(),
            team: strategy.team.clone().unwrap_or_default(),
            tags: strategy.tags.join(", "),
            greens: stats.greens,
            reds: stats.reds,
            profit_loss: format_result(stats.profit_total),
            roi: format_percent(stats.roi_percent),
        })
        .collect();
    if lines.is_empty() {
        return "No strategies registered.\n".to_string();
    }
    table(lines)
}

/// Tag list with statistics.
#[must_use]
pub fn render_tag_rows(stats: &[SelectionStats]) -> String {
    if stats.is_empty() {
        return "No tags defined.\n".to_string();
    }
    table(stats.iter().map(|row| TagLine {
        tag: row.name.clone(),
        greens: row.greens,
        reds: row.reds,
        stake: format_currency(row.stake_total),
        profit_loss: format_result(row.profit_total),
        roi: format_percent(row.roi_percent),
    }))
}

/// Integrity findings, or a single line when clean.
#[must_use]
pub fn render_audit(report: &IntegrityReport) -> String {
    if report.is_clean() {
        return "No integrity problems found.\n".to_string();
    }
    let mut out = String::new();
    for (title, names) in [
        ("Unregistered teams", &report.unknown_teams),
        ("Unregistered championships", &report.unknown_championships),
        ("Unregistered strategies", &report.unknown_strategies),
        ("Unknown tags", &report.unknown_tags),
        ("Stale game counts", &report.stale_game_counts),
    ] {
        if !names.is_empty() {
            let _ = writeln!(out, "{title}: {}", names.join(", "));
        }
    }
    out
}

/// One-line description of a championship.
#[must_use]
pub fn describe_championship(championship: &Championship) -> String {
    format!(
        "{} ({}, {} games)",
        championship.name, championship.season, championship.game_count
    )
}
