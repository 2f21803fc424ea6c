//! Command-line interface definitions.

pub mod ledger;
pub mod registry;
pub mod render;

use crate::{
    config::{DATA_FILE_ENV, DEFAULT_CONFIG_FILE},
    core::Session,
    entities::Month,
    errors::Result,
    store::LedgerStore,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Betting ledger - record wagers and track profitability.
#[derive(Parser, Debug)]
#[command(name = "bet-ledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Ledger data file, overriding config.toml
    #[arg(short, long, env = DATA_FILE_ENV)]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show headline counts, monthly performance and recent games
    Dashboard,

    /// Manage teams
    #[command(subcommand)]
    Team(TeamCommand),

    /// Manage championships
    #[command(subcommand)]
    Championship(ChampionshipCommand),

    /// Manage strategies
    #[command(subcommand)]
    Strategy(StrategyCommand),

    /// Manage tags
    #[command(subcommand)]
    Tag(TagCommand),

    /// Record and edit wagers
    #[command(subcommand)]
    Wager(WagerCommand),

    /// Show the page of one month
    Month {
        /// Month name (e.g. Março) or number (1-12)
        month: Month,
    },

    /// List wagers that reference unregistered names
    Audit,
}

/// Subcommands for `bet-ledger team`
#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// List teams with their statistics
    List,
    /// Register a team
    Add {
        /// Team name
        name: String,
    },
    /// Rename a team and every wager that names it
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Remove a team no wager references
    Delete {
        /// Team name
        name: String,
    },
    /// Show statistics for one team
    Stats {
        /// Team name
        name: String,
    },
}

/// Subcommands for `bet-ledger championship`
#[derive(Subcommand, Debug)]
pub enum ChampionshipCommand {
    /// List championships with their statistics
    List,
    /// Register a championship
    Add {
        /// Championship name
        name: String,
        /// Season label, defaults to the current year
        #[arg(long)]
        season: Option<String>,
    },
    /// Rename a championship and every wager in it
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
        /// New season label
        #[arg(long)]
        season: Option<String>,
    },
    /// Remove a championship no wager references
    Delete {
        /// Championship name
        name: String,
    },
}

/// Subcommands for `bet-ledger strategy`
#[derive(Subcommand, Debug)]
pub enum StrategyCommand {
    /// List strategies with their statistics
    List,
    /// Register a strategy
    Add {
        /// Strategy name
        name: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Rename a strategy and every wager that uses it
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a strategy, even while wagers still use it
    Delete {
        /// Strategy name
        name: String,
    },
}

/// Subcommands for `bet-ledger tag`
#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// List tags with their statistics
    List,
    /// Add a tag
    Add {
        /// Tag label
        tag: String,
    },
    /// Rename a tag; wagers keep the old label
    Rename {
        /// Current label
        old: String,
        /// New label
        new: String,
    },
    /// Remove a tag; wagers keep the label
    Delete {
        /// Tag label
        tag: String,
    },
}

/// Subcommands for `bet-ledger wager`
#[derive(Subcommand, Debug)]
pub enum WagerCommand {
    /// Record a wager
    Add {
        /// Month bucket, defaults to the month of the date
        #[arg(long)]
        month: Option<Month>,
        #[command(flatten)]
        wager: WagerArgs,
    },
    /// Record several games of one day
    Day(DayArgs),
    /// Replace the wager at a position
    Edit {
        /// Month bucket holding the wager
        month: Month,
        /// Position within the month, as shown by `wager list`
        index: usize,
        #[command(flatten)]
        wager: WagerArgs,
    },
    /// Remove the wager at a position
    Remove {
        /// Month bucket holding the wager
        month: Month,
        /// Position within the month, as shown by `wager list`
        index: usize,
    },
    /// List wagers of one month, or of every month
    List {
        /// Month bucket
        month: Option<Month>,
    },
}

/// Fields of one wager.
#[derive(Args, Debug, Clone)]
pub struct WagerArgs {
    /// Day of the wager (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Championship name
    #[arg(long)]
    pub competition: String,
    /// Home team
    #[arg(long)]
    pub home: String,
    /// Away team
    #[arg(long)]
    pub away: String,
    /// Strategy name
    #[arg(long, default_value = "")]
    pub strategy: String,
    /// Tag label
    #[arg(long, default_value = "Normal")]
    pub tag: String,
    /// Amount risked
    #[arg(long)]
    pub stake: f64,
    /// Signed result
    #[arg(long, allow_negative_numbers = true)]
    pub profit_loss: f64,
}

/// Fields of a day's batch of games.
#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    /// Month bucket, defaults to the month of the date
    #[arg(long)]
    pub month: Option<Month>,
    /// Day of the games (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Championship shared by every game
    #[arg(long)]
    pub competition: String,
    /// Strategy shared by every game
    #[arg(long, default_value = "")]
    pub strategy: String,
    /// Tag shared by every game
    #[arg(long, default_value = "Normal")]
    pub tag: String,
    /// One game as HOME,AWAY,STAKE,PROFIT_LOSS; repeat for each game
    #[arg(long = "game", required = true, allow_hyphen_values = true)]
    pub games: Vec<String>,
}

/// Settings that shape command output.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Print JSON instead of text
    pub json: bool,
    /// Number of recent games on the dashboard
    pub recent_games: usize,
}

/// Result line of a mutation, printed as `{"message": ...}` in JSON mode.
#[derive(Debug, Serialize)]
struct Message<'a> {
    message: &'a str,
}

/// Formats a value as pretty JSON, or as text with `text`.
pub(crate) fn emit<T: Serialize + ?Sized>(
    options: RunOptions,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    if options.json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}

/// Formats the confirmation of a mutation.
pub(crate) fn done(options: RunOptions, message: &str) -> Result<String> {
    emit(options, &Message { message }, |m| format!("{}\n", m.message))
}

/// Executes one command against the session and returns what to print.
pub fn run<S: LedgerStore>(
    command: Command,
    session: &mut Session<S>,
    options: RunOptions,
) -> Result<String> {
    match command {
        Command::Dashboard => ledger::dashboard(session, options),
        Command::Team(command) => registry::team(command, session, options),
        Command::Championship(command) => registry::championship(command, session, options),
        Command::Strategy(command) => registry::strategy(command, session, options),
        Command::Tag(command) => registry::tag(command, session, options),
        Command::Wager(command) => ledger::wager(command, session, options),
        Command::Month { month } => ledger::month(session, month, options),
        Command::Audit => ledger::audit(session, options),
    }
}
