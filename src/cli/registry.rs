//! Handlers for the `team`, `championship`, `strategy` and `tag` command groups.

use super::{
    ChampionshipCommand, RunOptions, StrategyCommand, TagCommand, TeamCommand, done, emit,
    render,
};
use crate::{
    core::{Session, championship, current_season, stats, strategy, tag, team},
    errors::Result,
    store::LedgerStore,
};
use serde::Serialize;

/// Executes a `team` subcommand.
pub fn team<S: LedgerStore>(
    command: TeamCommand,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        TeamCommand::List => emit(
            options,
            &stats::all_team_stats(session.state()),
            |rows| render::render_team_rows(rows),
        ),
        TeamCommand::Add { name } => {
            team::create_team(session, &name)?;
            done(options, &format!("Team '{}' added", name.trim()))
        }
        TeamCommand::Rename { old, new } => {
            let rewritten = team::rename_team(session, &old, &new)?;
            done(
                options,
                &format!("Team '{old}' renamed to '{}' ({rewritten} wager(s) updated)", new.trim()),
            )
        }
        TeamCommand::Delete { name } => {
            team::delete_team(session, &name)?;
            done(options, &format!("Team '{name}' removed"))
        }
        TeamCommand::Stats { name } => {
            let stats = stats::team_stats(session.state(), &name);
            emit(options, &stats, |stats| render::render_team_stats(&name, stats))
        }
    }
}

/// Executes a `championship` subcommand.
pub fn championship<S: LedgerStore>(
    command: ChampionshipCommand,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        ChampionshipCommand::List => emit(
            options,
            &stats::all_championship_stats(session.state()),
            |rows| render::render_championship_rows(rows),
        ),
        ChampionshipCommand::Add { name, season } => {
            let season = season.unwrap_or_else(current_season);
            championship::create_championship(session, &name, &season)?;
            let name = name.trim();
            let added = session
                .state()
                .championships
                .get(name)
                .map_or_else(|| name.to_string(), render::describe_championship);
            done(options, &format!("Championship {added} added"))
        }
        ChampionshipCommand::Rename { old, new, season } => {
            let rewritten =
                championship::rename_championship(session, &old, &new, season.as_deref())?;
            done(
                options,
                &format!(
                    "Championship '{old}' updated to '{}' ({rewritten} wager(s) updated)",
                    new.trim()
                ),
            )
        }
        ChampionshipCommand::Delete { name } => {
            championship::delete_championship(session, &name)?;
            done(options, &format!("Championship '{name}' removed"))
        }
    }
}

#[derive(Serialize)]
struct StrategyListing<'a> {
    name: &'a str,
    description: &'a str,
    team: Option<&'a str>,
    tags: &'a [String],
    stats: stats::SelectionStats,
}

/// Executes a `strategy` subcommand.
pub fn strategy<S: LedgerStore>(
    command: StrategyCommand,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        StrategyCommand::List => {
            let state = session.state();
            let stats = stats::all_strategy_stats(state);
            if options.json {
                let listing: Vec<StrategyListing<'_>> = state
                    .strategies
                    .iter()
                    .zip(stats)
                    .map(|(strategy, stats)| StrategyListing {
                        name: &strategy.name,
                        description: &strategy.description,
                        team: strategy.team.as_deref(),
                        tags: &strategy.tags,
                        stats,
                    })
                    .collect();
                return emit(options, &listing, |_| String::new());
            }
            Ok(render::render_strategy_rows(state.strategies.iter(), &stats))
        }
        StrategyCommand::Add { name, description } => {
            strategy::create_strategy(session, &name, &description)?;
            done(options, &format!("Strategy '{}' added", name.trim()))
        }
        StrategyCommand::Rename {
            old,
            new,
            description,
        } => {
            let rewritten =
                strategy::rename_strategy(session, &old, &new, description.as_deref())?;
            done(
                options,
                &format!(
                    "Strategy '{old}' updated to '{}' ({rewritten} wager(s) updated)",
                    new.trim()
                ),
            )
        }
        StrategyCommand::Delete { name } => {
            strategy::delete_strategy(session, &name)?;
            done(options, &format!("Strategy '{name}' removed"))
        }
    }
}

/// Executes a `tag` subcommand.
pub fn tag<S: LedgerStore>(
    command: TagCommand,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        TagCommand::List => emit(options, &stats::all_tag_stats(session.state()), |rows| {
            render::render_tag_rows(rows)
        }),
        TagCommand::Add { tag } => {
            tag::add_tag(session, &tag)?;
            done(options, &format!("Tag '{}' added", tag.trim()))
        }
        TagCommand::Rename { old, new } => {
            tag::rename_tag(session, &old, &new)?;
            done(options, &format!("Tag '{old}' renamed to '{}'", new.trim()))
        }
        TagCommand::Delete { tag } => {
            tag::delete_tag(session, &tag)?;
            done(options, &format!("Tag '{tag}' removed"))
        }
    }
}
