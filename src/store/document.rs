//! The persisted JSON document.
//!
//! Field names follow the established file layout (`equipas`, `campeonatos`,
//! `estrategias`, `tags`, `mensal`, and Portuguese column names inside each
//! record). Records are validated when they are turned into a
//! [`LedgerState`]; derived values (`Jogos`, `% Stake`) are written for
//! readers of the file but ignored on load and recomputed.

use crate::{
    core::{required_name, wager::refresh_game_counts},
    entities::{
        Championship, EntityKind, LedgerState, Month, Registry, Strategy, TagSet, Team, Wager,
        WagerDraft,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::SerializeMap,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Top-level keys that must all be present for a document to be accepted.
pub const REQUIRED_KEYS: [&str; 5] = ["equipas", "campeonatos", "estrategias", "tags", "mensal"];

/// The whole persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    /// Team registry
    pub equipas: Vec<TeamRecord>,
    /// Championship registry
    pub campeonatos: Vec<ChampionshipRecord>,
    /// Strategy registry
    pub estrategias: Vec<StrategyRecord>,
    /// Tag labels in order
    pub tags: Vec<String>,
    /// Wagers keyed by month label
    pub mensal: MonthlyRecords,
}

/// A persisted team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Team name
    #[serde(rename = "Nome")]
    pub name: String,
}

/// A persisted championship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionshipRecord {
    /// Championship name
    #[serde(rename = "Nome")]
    pub name: String,
    /// Season label; older files store the year as a number
    #[serde(rename = "Temporada", default, deserialize_with = "season_text")]
    pub season: String,
    /// Cached game count, recomputed after load
    #[serde(rename = "Jogos", default, skip_deserializing)]
    pub game_count: usize,
}

/// A persisted strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRecord {
    /// Strategy name
    #[serde(rename = "Nome")]
    pub name: String,
    /// Description
    #[serde(rename = "Descrição", default)]
    pub description: Option<String>,
    /// Unused team column
    #[serde(rename = "Equipa", default)]
    pub team: Option<String>,
    /// Unused tags column
    #[serde(rename = "Tags", default)]
    pub tags: Option<Vec<String>>,
}

/// A persisted wager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagerRecord {
    /// ISO-8601 date
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    /// Championship name
    #[serde(rename = "Competição")]
    pub competition: String,
    /// Home team
    #[serde(rename = "Casa")]
    pub home_team: String,
    /// Away team
    #[serde(rename = "Visitante")]
    pub away_team: String,
    /// Strategy name
    #[serde(rename = "Estrategia", default)]
    pub strategy: String,
    /// Tag label
    #[serde(rename = "Tag", default)]
    pub tag: String,
    /// Stake
    #[serde(rename = "Stake")]
    pub stake: f64,
    /// Signed result
    #[serde(rename = "Profit/Loss")]
    pub profit_loss: f64,
    /// Derived percentage, recomputed after load
    #[serde(rename = "% Stake", default, skip_deserializing)]
    pub stake_percent: f64,
}

/// Month label to wager list, written in calendar order.
#[derive(Debug, Clone, Default)]
pub struct MonthlyRecords {
    entries: Vec<(String, Vec<WagerRecord>)>,
}

impl Serialize for MonthlyRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, wagers) in &self.entries {
            map.serialize_entry(label, wagers)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonthlyRecords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = BTreeMap::<String, Vec<WagerRecord>>::deserialize(deserializer)?;
        Ok(Self {
            entries: map.into_iter().collect(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeasonValue {
    Text(String),
    Number(serde_json::Number),
}

fn season_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let season = match Option::<SeasonValue>::deserialize(deserializer)? {
        Some(SeasonValue::Text(text)) => text,
        Some(SeasonValue::Number(number)) => number
            .as_i64()
            .map(|year| year.to_string())
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| format!("{f:.0}"))
            })
            .unwrap_or_else(|| number.to_string()),
        None => String::new(),
    };
    Ok(season)
}

impl LedgerDocument {
    /// Parses document text, checking that every top-level key is present.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::Persistence {
                message: format!("Corrupt ledger data: {e}"),
            })?;

        let object = value.as_object().ok_or_else(|| Error::Persistence {
            message: "Ledger data is not a JSON object".to_string(),
        })?;
        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(Error::Persistence {
                message: format!("Invalid ledger structure: missing '{missing}'"),
            });
        }

        serde_json::from_value(value).map_err(|e| Error::Persistence {
            message: format!("Invalid ledger structure: {e}"),
        })
    }

    /// Snapshot of a state, with derived columns filled in.
    #[must_use]
    pub fn from_state(state: &LedgerState) -> Self {
        let entries = state
            .wagers
            .months()
            .map(|(month, wagers)| {
                (
                    month.label().to_string(),
                    wagers.iter().map(WagerRecord::from).collect(),
                )
            })
            .collect();

        Self {
            equipas: state
                .teams
                .iter()
                .map(|t| TeamRecord {
                    name: t.name.clone(),
                })
                .collect(),
            campeonatos: state
                .championships
                .iter()
                .map(|c| ChampionshipRecord {
                    name: c.name.clone(),
                    season: c.season.clone(),
                    game_count: c.game_count,
                })
                .collect(),
            estrategias: state
                .strategies
                .iter()
                .map(|s| StrategyRecord {
                    name: s.name.clone(),
                    description: Some(s.description.clone()),
                    team: s.team.clone(),
                    tags: Some(s.tags.clone()),
                })
                .collect(),
            tags: state.tags.as_slice().to_vec(),
            mensal: MonthlyRecords { entries },
        }
    }

    /// Validates every record and builds the in-memory state.
    ///
    /// Registry names and tags are trimmed the same way wager fields are.
    /// Blank names, duplicate names and unknown month labels are dropped with
    /// a warning. A wager that fails validation rejects the whole document.
    pub fn into_state(self) -> Result<LedgerState> {
        let (teams, dup_teams) = Registry::from_items(
            self.equipas
                .into_iter()
                .filter_map(|r| loaded_name(&r.name, EntityKind::Team))
                .map(Team::new),
        );
        let (championships, dup_championships) =
            Registry::from_items(self.campeonatos.into_iter().filter_map(|r| {
                loaded_name(&r.name, EntityKind::Championship)
                    .map(|name| Championship::new(name, r.season))
            }));
        let (strategies, dup_strategies) =
            Registry::from_items(self.estrategias.into_iter().filter_map(|r| {
                let name = loaded_name(&r.name, EntityKind::Strategy)?;
                Some(Strategy {
                    name,
                    description: r.description.unwrap_or_default(),
                    team: r.team,
                    tags: r.tags.unwrap_or_default(),
                })
            }));
        let (tags, dup_tags) = TagSet::from_tags(
            self.tags
                .iter()
                .filter_map(|tag| loaded_name(tag, EntityKind::Tag)),
        );

        for (kind, dups) in [
            ("team", dup_teams),
            ("championship", dup_championships),
            ("strategy", dup_strategies),
            ("tag", dup_tags),
        ] {
            for name in dups {
                warn!(kind, name = %name, "Dropping duplicate entry from ledger data");
            }
        }

        let mut state = LedgerState {
            teams,
            championships,
            strategies,
            tags,
            wagers: crate::entities::WagerBook::new(),
        };

        for (label, records) in self.mensal.entries {
            let Some(month) = Month::from_label(&label) else {
                warn!(label = %label, wagers = records.len(), "Skipping unknown month in ledger data");
                continue;
            };
            for (idx, record) in records.into_iter().enumerate() {
                let wager = Wager::try_from(WagerDraft::from(record)).map_err(|e| {
                    Error::Persistence {
                        message: format!("Invalid wager #{idx} in {month}: {e}"),
                    }
                })?;
                state.wagers.push(month, wager);
            }
        }

        refresh_game_counts(&mut state);
        Ok(state)
    }
}

/// Trimmed registry name, or `None` with a warning when it is blank.
fn loaded_name(raw: &str, kind: EntityKind) -> Option<String> {
    match required_name(raw, kind) {
        Ok(name) => Some(name),
        Err(e) => {
            warn!(kind = %kind, error = %e, "Dropping unnamed entry from ledger data");
            None
        }
    }
}

impl From<&Wager> for WagerRecord {
    fn from(wager: &Wager) -> Self {
        Self {
            date: wager.date,
            competition: wager.competition.clone(),
            home_team: wager.home_team.clone(),
            away_team: wager.away_team.clone(),
            strategy: wager.strategy.clone(),
            tag: wager.tag.clone(),
            stake: wager.stake,
            profit_loss: wager.profit_loss,
            stake_percent: wager.stake_percent(),
        }
    }
}

impl From<WagerRecord> for WagerDraft {
    fn from(record: WagerRecord) -> Self {
        Self {
            date: record.date,
            competition: record.competition,
            home_team: record.home_team,
            away_team: record.away_team,
            strategy: record.strategy,
            tag: record.tag,
            stake: record.stake,
            profit_loss: record.profit_loss,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::audit::{audit, reference_count};

    const SAMPLE: &str = r#"{
        "equipas": [{"Nome": "Real Madrid"}, {"Nome": "Barcelona"}],
        "campeonatos": [{"Nome": "La Liga", "Temporada": 2024, "Jogos": 99}],
        "estrategias": [{"Nome": "Value Bet", "Descrição": "Odds above fair", "Equipa": null, "Tags": null}],
        "tags": ["Normal", "Arbitrage"],
        "mensal": {
            "Janeiro": [{
                "Data": "2024-01-05", "Competição": "La Liga", "Casa": "Real Madrid",
                "Visitante": "Barcelona", "Estrategia": "Value Bet", "Tag": "Normal",
                "Stake": 10, "Profit/Loss": -10, "% Stake": 12345
            }],
            "Fevereiro": []
        }
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let state = LedgerDocument::parse(SAMPLE).unwrap().into_state().unwrap();

        assert_eq!(state.teams.len(), 2);
        let liga = state.championships.get("La Liga").unwrap();
        assert_eq!(liga.season, "2024");
        // Cached count is recomputed, not trusted
        assert_eq!(liga.game_count, 1);
        assert_eq!(state.strategies.get("Value Bet").unwrap().description, "Odds above fair");

        let january = state.wagers.month(Month::Janeiro);
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].stake_percent(), -100.0);
    }

    #[test]
    fn test_registry_names_are_trimmed_and_blanks_dropped() {
        let text = r#"{
            "equipas": [{"Nome": " Benfica "}, {"Nome": "Porto"}, {"Nome": ""}],
            "campeonatos": [{"Nome": "Primeira Liga ", "Temporada": "2024"}, {"Nome": "  "}],
            "estrategias": [{"Nome": ""}],
            "tags": [" Normal", "", "Normal"],
            "mensal": {
                "Março": [{
                    "Data": "2024-03-09", "Competição": "Primeira Liga", "Casa": " Benfica ",
                    "Visitante": "Porto", "Estrategia": "", "Tag": "Normal",
                    "Stake": 2, "Profit/Loss": 1
                }]
            }
        }"#;
        let state = LedgerDocument::parse(text).unwrap().into_state().unwrap();

        assert_eq!(state.teams.names().collect::<Vec<_>>(), ["Benfica", "Porto"]);
        assert_eq!(
            state.championships.names().collect::<Vec<_>>(),
            ["Primeira Liga"]
        );
        assert!(state.strategies.is_empty());
        assert_eq!(state.tags.as_slice(), ["Normal"]);
        assert_eq!(state.wagers.month(Month::Marco)[0].home_team, "Benfica");
        assert_eq!(reference_count(&state, EntityKind::Team, "Benfica"), 1);
        assert!(audit(&state).is_clean());
    }

    #[test]
    fn test_missing_top_level_key_is_invalid() {
        let text = r#"{"equipas": [], "campeonatos": [], "estrategias": [], "tags": []}"#;
        let err = LedgerDocument::parse(text).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
        assert!(err.to_string().contains("mensal"));
    }

    #[test]
    fn test_corrupt_json_is_invalid() {
        assert!(matches!(
            LedgerDocument::parse("{not json").unwrap_err(),
            Error::Persistence { .. }
        ));
    }

    #[test]
    fn test_non_positive_stake_rejects_document() {
        let text = SAMPLE.replace("\"Stake\": 10", "\"Stake\": 0");
        let err = LedgerDocument::parse(&text)
            .unwrap()
            .into_state()
            .unwrap_err();
        assert!(err.to_string().contains("Janeiro"));
    }

    #[test]
    fn test_unknown_month_is_skipped() {
        let text = SAMPLE.replace("\"Fevereiro\"", "\"Smarch\"");
        let state = LedgerDocument::parse(&text).unwrap().into_state().unwrap();
        assert_eq!(state.wagers.len(), 1);
    }

    #[test]
    fn test_serialized_months_in_calendar_order() {
        let state = LedgerDocument::parse(SAMPLE).unwrap().into_state().unwrap();
        let json = serde_json::to_string(&LedgerDocument::from_state(&state)).unwrap();

        let jan = json.find("\"Janeiro\"").unwrap();
        let mar = json.find("\"Março\"").unwrap();
        let dec = json.find("\"Dezembro\"").unwrap();
        assert!(jan < mar && mar < dec);
        assert!(json.contains("\"% Stake\":-100.0"));
        assert!(json.contains("\"Jogos\":1"));
        assert!(json.contains("\"Data\":\"2024-01-05\""));
    }
}
