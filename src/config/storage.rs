//! Ledger file location.
//!
//! Precedence: `--data` on the command line or the `BET_LEDGER_DATA_FILE`
//! environment variable (`.env` included, both read by clap), then
//! `data_file` in config.toml, then [`DEFAULT_DATA_FILE`].

use std::path::PathBuf;

/// Environment variable that overrides the configured data file.
pub const DATA_FILE_ENV: &str = "BET_LEDGER_DATA_FILE";

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "dados_apostas.json";

/// Picks the data file from an explicit override and the configured path,
/// in that order.
#[must_use]
pub fn resolve_data_file(explicit: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    explicit
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_configured() {
        assert_eq!(
            resolve_data_file(None, None),
            PathBuf::from("dados_apostas.json")
        );
    }

    #[test]
    fn test_explicit_beats_configured() {
        let explicit = Some(PathBuf::from("cli.json"));
        let configured = Some(PathBuf::from("config.json"));

        assert_eq!(
            resolve_data_file(explicit, configured.clone()),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            resolve_data_file(None, configured),
            PathBuf::from("config.json")
        );
    }
}
