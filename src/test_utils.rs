//! Shared test utilities for the ledger.
//!
//! Sessions here run over a [`MemoryStore`] so commits can be counted and
//! made to fail without touching the filesystem.

use crate::{
    core::{Session, strategy::create_strategy, wager::add_wager},
    entities::{LedgerState, Month, WagerDraft},
    errors::Result,
    store::MemoryStore,
};
use chrono::NaiveDate;

/// Installs a tracing subscriber that writes through the test harness.
/// Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Creates a session over an empty memory store with the default tags.
pub fn setup_test_session() -> Session<MemoryStore> {
    init_test_tracing();
    Session::new(LedgerState::default(), MemoryStore::new())
}

/// Creates a session holding the Real Madrid/Barcelona scenario.
///
/// # Contents
/// * Strategy "Value Bet"
/// * Janeiro #0: 2024-01-05 La Liga, Real Madrid vs Barcelona, stake 10, P/L -10
/// * Janeiro #1: 2024-01-12 La Liga, Barcelona vs Real Madrid, stake 5, P/L 5
pub fn setup_scenario_session() -> Result<Session<MemoryStore>> {
    let mut session = setup_test_session();
    create_strategy(&mut session, "Value Bet", "Back overpriced favourites")?;
    add_wager(
        &mut session,
        Month::Janeiro,
        test_draft("2024-01-05", "La Liga", "Real Madrid", "Barcelona", 10.0, -10.0),
    )?;
    add_wager(
        &mut session,
        Month::Janeiro,
        test_draft("2024-01-12", "La Liga", "Barcelona", "Real Madrid", 5.0, 5.0),
    )?;
    Ok(session)
}

/// Builds a wager draft with strategy "Value Bet" and tag "Normal".
pub fn test_draft(
    date_str: &str,
    competition: &str,
    home: &str,
    away: &str,
    stake: f64,
    profit_loss: f64,
) -> WagerDraft {
    WagerDraft {
        date: date(date_str),
        competition: competition.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        strategy: "Value Bet".to_string(),
        tag: "Normal".to_string(),
        stake,
        profit_loss,
    }
}

/// Parses an ISO date, panicking on bad input.
#[allow(clippy::unwrap_used)]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}
