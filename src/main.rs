use bet_ledger::{
    cli::{self, Cli, RunOptions},
    config::{self, resolve_data_file},
    core::Session,
    entities::LedgerState,
    errors::{Error, Result},
    store::JsonFileStore,
};
use clap::Parser;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env before clap reads BET_LEDGER_DATA_FILE
    dotenv().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e @ Error::Persistence { .. }) => {
            warn!(error = %e, "Change applied but may not be durable");
            eprintln!("Warning: the change was applied but may not have been saved: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    // 3. Load the application configuration
    let app_config = config::load_config(&cli.config)?;
    let data_file = resolve_data_file(cli.data, app_config.data_file.clone());
    info!(data_file = %data_file.display(), "Using ledger file");

    // 4. Open the ledger, seeding a new one with the configured tags
    let mut session = Session::open_with(JsonFileStore::new(data_file), || {
        LedgerState::with_tags(app_config.seed_tags())
    });

    let options = RunOptions {
        json: cli.json,
        recent_games: app_config.recent_games,
    };
    cli::run(cli.command, &mut session, options)
}
