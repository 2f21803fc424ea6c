//! JSON file store round trips against a real temporary directory.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use bet_ledger::{
    core::{LoadOutcome, Session, championship, strategy, wager},
    entities::{Month, WagerDraft},
    errors::Result,
    store::{JsonFileStore, LedgerStore},
};
use chrono::NaiveDate;
use std::fs;

fn draft(date: &str, home: &str, away: &str, stake: f64, profit_loss: f64) -> WagerDraft {
    WagerDraft {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        competition: "La Liga".to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        strategy: "Value Bet".to_string(),
        tag: "Normal".to_string(),
        stake,
        profit_loss,
    }
}

#[test]
fn test_missing_file_opens_fresh_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::open(JsonFileStore::new(dir.path().join("dados_apostas.json")));

    assert_eq!(session.load_outcome(), &LoadOutcome::Fresh);
    assert_eq!(session.state().tags.len(), 4);
    assert!(session.state().wagers.is_empty());
}

#[test]
fn test_state_survives_reopen() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dados_apostas.json");

    {
        let mut session = Session::open(JsonFileStore::new(&path));
        strategy::create_strategy(&mut session, "Value Bet", "Overpriced favourites")?;
        championship::create_championship(&mut session, "La Liga", "2024/25")?;
        wager::add_wager(
            &mut session,
            Month::Janeiro,
            draft("2024-01-05", "Real Madrid", "Barcelona", 10.0, -10.0),
        )?;
        wager::add_wager(
            &mut session,
            Month::Marco,
            draft("2024-03-02", "Barcelona", "Real Madrid", 5.0, 5.0),
        )?;
    }

    let reopened = Session::open(JsonFileStore::new(&path));
    assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded);
    let state = reopened.state();
    assert_eq!(state.teams.names().collect::<Vec<_>>(), ["Real Madrid", "Barcelona"]);
    let la_liga = state.championships.get("La Liga").unwrap();
    assert_eq!(la_liga.season, "2024/25");
    assert_eq!(la_liga.game_count, 2);
    assert_eq!(
        state.strategies.get("Value Bet").unwrap().description,
        "Overpriced favourites"
    );
    assert_eq!(state.wagers.month(Month::Marco)[0].profit_loss, 5.0);
    assert!(!JsonFileStore::new(&path).temp_path().exists());
    Ok(())
}

#[test]
fn test_saved_document_layout() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dados_apostas.json");
    let mut session = Session::open(JsonFileStore::new(&path));
    wager::add_wager(
        &mut session,
        Month::Marco,
        draft("2024-03-02", "Inter", "Milan", 8.0, -2.0),
    )?;

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    for key in ["equipas", "campeonatos", "estrategias", "tags", "mensal"] {
        assert!(doc.get(key).is_some(), "missing {key}");
    }
    let months: Vec<_> = doc["mensal"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(months.len(), 12);
    let record = &doc["mensal"]["Março"][0];
    assert_eq!(record["Data"], "2024-03-02");
    assert_eq!(record["Competição"], "La Liga");
    assert_eq!(record["Casa"], "Inter");
    assert_eq!(record["Visitante"], "Milan");
    assert_eq!(record["Stake"], 8.0);
    assert_eq!(record["Profit/Loss"], -2.0);
    assert_eq!(record["% Stake"], -25.0);
    assert_eq!(doc["campeonatos"][0]["Jogos"], 1);
    Ok(())
}

#[test]
fn test_hand_written_document_loads() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dados_apostas.json");
    fs::write(
        &path,
        r#"{
            "equipas": [{"Nome": "Benfica"}, {"Nome": "Porto"}, {"Nome": "Benfica"}],
            "campeonatos": [{"Nome": "Primeira Liga", "Temporada": 2024, "Jogos": 99}],
            "estrategias": [{"Nome": "Over 2.5"}],
            "tags": ["Normal", "Live"],
            "mensal": {
                "Fevereiro": [{"Data": "2024-02-10", "Competição": "Primeira Liga",
                               "Casa": "Benfica", "Visitante": "Porto",
                               "Estrategia": "Over 2.5", "Tag": "Live",
                               "Stake": 2, "Profit/Loss": 1.5, "% Stake": 0}]
            }
        }"#,
    )?;

    let state = JsonFileStore::new(&path).load()?.unwrap();
    assert_eq!(state.teams.len(), 2);
    let liga = state.championships.get("Primeira Liga").unwrap();
    assert_eq!(liga.season, "2024");
    assert_eq!(liga.game_count, 1);
    assert_eq!(state.tags.as_slice(), ["Normal", "Live"]);
    let wager = &state.wagers.month(Month::Fevereiro)[0];
    assert_eq!(wager.stake_percent(), 75.0);
    assert!(state.wagers.month(Month::Janeiro).is_empty());
    Ok(())
}

#[test]
fn test_empty_file_is_treated_as_missing() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dados_apostas.json");
    fs::write(&path, "  \n")?;
    assert!(JsonFileStore::new(&path).load()?.is_none());
    Ok(())
}
