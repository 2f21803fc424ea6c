//! Wager entity - one recorded bet and its outcome.
//!
//! A wager names its championship, teams, strategy and tag as plain strings.
//! `stake_percent` is not a stored field: it is always derived from
//! `profit_loss / stake`.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// A validated wager record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wager {
    /// Day the wager was placed
    pub date: NaiveDate,
    /// Championship name
    pub competition: String,
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
    /// Strategy name
    pub strategy: String,
    /// Tag label
    pub tag: String,
    /// Amount risked, always greater than zero
    pub stake: f64,
    /// Signed result of the wager
    pub profit_loss: f64,
}

impl Wager {
    /// Result as a percentage of the stake.
    #[must_use]
    pub fn stake_percent(&self) -> f64 {
        stake_percent(self.profit_loss, self.stake)
    }

    /// A wager is green when it did not lose money. Break-even counts as green.
    #[must_use]
    pub fn is_green(&self) -> bool {
        self.profit_loss >= 0.0
    }

    /// True when the team played either side.
    #[must_use]
    pub fn involves_team(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// Unvalidated wager input, as typed by the user or read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WagerDraft {
    /// Day the wager was placed
    pub date: NaiveDate,
    /// Championship name
    pub competition: String,
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
    /// Strategy name
    pub strategy: String,
    /// Tag label
    pub tag: String,
    /// Amount risked
    pub stake: f64,
    /// Signed result
    pub profit_loss: f64,
}

impl TryFrom<WagerDraft> for Wager {
    type Error = Error;

    /// Trims every name and checks the required fields and amounts.
    fn try_from(draft: WagerDraft) -> Result<Self> {
        let competition = required(&draft.competition, "Competition")?;
        let home_team = required(&draft.home_team, "Home team")?;
        let away_team = required(&draft.away_team, "Away team")?;
        validate_amounts(draft.stake, draft.profit_loss)?;

        Ok(Self {
            date: draft.date,
            competition,
            home_team,
            away_team,
            strategy: draft.strategy.trim().to_string(),
            tag: draft.tag.trim().to_string(),
            stake: draft.stake,
            profit_loss: draft.profit_loss,
        })
    }
}

/// `profit_loss / stake * 100`, or 0 when the stake is 0.
#[must_use]
pub fn stake_percent(profit_loss: f64, stake: f64) -> f64 {
    if stake > 0.0 {
        profit_loss / stake * 100.0
    } else {
        0.0
    }
}

/// Checks that the stake is a finite positive amount and the result is finite.
pub fn validate_amounts(stake: f64, profit_loss: f64) -> Result<()> {
    if !stake.is_finite() || stake <= 0.0 {
        return Err(Error::InvalidStake { stake });
    }
    if !profit_loss.is_finite() {
        return Err(Error::validation(format!(
            "Profit/loss must be a finite amount, got {profit_loss}"
        )));
    }
    Ok(())
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
