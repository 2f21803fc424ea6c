//! Referential integrity checks over the ledger state.

use crate::entities::{EntityKind, LedgerState, Wager};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Number of wagers that reference `name` as the given kind of entity.
#[must_use]
pub fn reference_count(state: &LedgerState, kind: EntityKind, name: &str) -> usize {
    state
        .wagers
        .wagers()
        .filter(|wager| references(wager, kind, name))
        .count()
}

fn references(wager: &Wager, kind: EntityKind, name: &str) -> bool {
    match kind {
        EntityKind::Team => wager.involves_team(name),
        EntityKind::Championship => wager.competition == name,
        EntityKind::Strategy => wager.strategy == name,
        EntityKind::Tag => wager.tag == name,
    }
}

/// Names used by wagers that have no registry entry, plus stale caches.
///
/// Each list is sorted and free of duplicates. Empty strategy and tag fields
/// are not reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Home or away teams missing from the team registry
    pub unknown_teams: Vec<String>,
    /// Competitions missing from the championship registry
    pub unknown_championships: Vec<String>,
    /// Strategies missing from the strategy registry
    pub unknown_strategies: Vec<String>,
    /// Tags missing from the tag set
    pub unknown_tags: Vec<String>,
    /// Championships whose cached game count disagrees with the wager book
    pub stale_game_counts: Vec<String>,
}

impl IntegrityReport {
    /// `true` when nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unknown_teams.is_empty()
            && self.unknown_championships.is_empty()
            && self.unknown_strategies.is_empty()
            && self.unknown_tags.is_empty()
            && self.stale_game_counts.is_empty()
    }
}

/// Scans every wager and championship for dangling references.
#[must_use]
pub fn audit(state: &LedgerState) -> IntegrityReport {
    let mut teams = BTreeSet::new();
    let mut championships = BTreeSet::new();
    let mut strategies = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for wager in state.wagers.wagers() {
        for team in [&wager.home_team, &wager.away_team] {
            if !state.teams.contains(team) {
                teams.insert(team.clone());
            }
        }
        if !state.championships.contains(&wager.competition) {
            championships.insert(wager.competition.clone());
        }
        if !wager.strategy.is_empty() && !state.strategies.contains(&wager.strategy) {
            strategies.insert(wager.strategy.clone());
        }
        if !wager.tag.is_empty() && !state.tags.contains(&wager.tag) {
            tags.insert(wager.tag.clone());
        }
        *counts.entry(wager.competition.as_str()).or_default() += 1;
    }

    let stale_game_counts = state
        .championships
        .iter()
        .filter(|c| c.game_count != counts.get(c.name.as_str()).copied().unwrap_or(0))
        .map(|c| c.name.clone())
        .collect::<BTreeSet<_>>();

    IntegrityReport {
        unknown_teams: teams.into_iter().collect(),
        unknown_championships: championships.into_iter().collect(),
        unknown_strategies: strategies.into_iter().collect(),
        unknown_tags: tags.into_iter().collect(),
        stale_game_counts: stale_game_counts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::{strategy::delete_strategy, tag::delete_tag},
        entities::Month,
        errors::Result,
        test_utils::*,
    };

    #[test]
    fn test_scenario_is_clean() -> Result<()> {
        let session = setup_scenario_session()?;
        let report = audit(session.state());
        assert!(report.is_clean(), "{report:?}");
        Ok(())
    }

    #[test]
    fn test_reference_count_per_kind() -> Result<()> {
        let session = setup_scenario_session()?;
        let state = session.state();
        assert_eq!(reference_count(state, EntityKind::Team, "Real Madrid"), 2);
        assert_eq!(reference_count(state, EntityKind::Championship, "La Liga"), 2);
        assert_eq!(reference_count(state, EntityKind::Strategy, "Value Bet"), 2);
        assert_eq!(reference_count(state, EntityKind::Tag, "Value Bet"), 0);
        assert_eq!(reference_count(state, EntityKind::Tag, "Normal"), 2);
        Ok(())
    }

    #[test]
    fn test_reports_orphans_after_unguarded_deletes() -> Result<()> {
        let mut session = setup_scenario_session()?;
        delete_strategy(&mut session, "Value Bet")?;
        delete_tag(&mut session, "Normal")?;

        let report = audit(session.state());
        assert_eq!(report.unknown_strategies, vec!["Value Bet".to_string()]);
        assert_eq!(report.unknown_tags, vec!["Normal".to_string()]);
        assert!(report.unknown_teams.is_empty());
        assert!(!report.is_clean());
        Ok(())
    }

    #[test]
    fn test_reports_unregistered_names_and_stale_counts() -> Result<()> {
        let mut state = LedgerState::default();
        let wager = Wager::try_from(test_draft(
            "2024-06-01",
            "Copa",
            "Flamengo",
            "Santos",
            3.0,
            1.0,
        ))?;
        state.wagers.push(Month::Junho, wager);
        state
            .championships
            .insert(crate::entities::Championship::new("Brasileirão", "2024"));
        state.championships.get_mut("Brasileirão").unwrap().game_count = 4;

        let report = audit(&state);
        assert_eq!(report.unknown_teams, vec!["Flamengo", "Santos"]);
        assert_eq!(report.unknown_championships, vec!["Copa"]);
        assert_eq!(report.unknown_strategies, vec!["Value Bet"]);
        assert!(report.unknown_tags.is_empty());
        assert_eq!(report.stale_game_counts, vec!["Brasileirão"]);
        Ok(())
    }
}
