//! Application settings loading from config.toml
//!
//! The file is optional. Every key has a default, so a missing file or an
//! empty one gives the same configuration. A file that exists but cannot be
//! parsed is an error rather than a silent fallback.

use crate::{
    core::report::DEFAULT_RECENT_GAMES,
    entities::{DEFAULT_TAGS, TagSet},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Structure of config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Ledger JSON file; the environment can override it
    pub data_file: Option<PathBuf>,
    /// Number of wagers listed under "recent games" on the dashboard
    pub recent_games: usize,
    /// Tags seeded into a brand new ledger
    pub default_tags: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            recent_games: DEFAULT_RECENT_GAMES,
            default_tags: DEFAULT_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the TOML is invalid or has unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Tag set for a fresh ledger. Duplicate and blank entries are dropped.
    #[must_use]
    pub fn seed_tags(&self) -> TagSet {
        let (tags, duplicates) = TagSet::from_tags(
            self.default_tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty()),
        );
        if !duplicates.is_empty() {
            warn!(?duplicates, "Duplicate default tags ignored");
        }
        tags
    }
}

/// Loads configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config file
///
/// # Returns
/// * `Ok(AppConfig)` - Parsed configuration, or defaults when the file is absent
/// * `Err(Error)` - The file exists but could not be read or parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    AppConfig::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            data_file = "ledger/apostas.json"
            recent_games = 10
            default_tags = ["Normal", "Live"]
        "#;

        let config = AppConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("ledger/apostas.json")));
        assert_eq!(config.recent_games, 10);
        assert_eq!(config.default_tags, vec!["Normal", "Live"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.recent_games, 5);
        assert_eq!(config.seed_tags().len(), 4);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = AppConfig::from_toml("recent_games = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = AppConfig::from_toml("colour = \"green\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_seed_tags_drops_blank_and_duplicates() {
        let config = AppConfig {
            default_tags: vec!["Live".into(), " ".into(), "Live".into(), "Cash Out".into()],
            ..AppConfig::default()
        };
        let tags = config.seed_tags();
        assert_eq!(tags.as_slice(), ["Live", "Cash Out"]);
    }

    #[test]
    fn test_load_config_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_config(dir.path().join("config.toml")).unwrap();
        assert_eq!(missing, AppConfig::default());

        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "recent_games = 3").unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.recent_games, 3);
        assert_eq!(loaded.data_file, None);

        std::fs::write(&path, "recent_games = [").unwrap();
        assert!(matches!(load_config(&path).unwrap_err(), Error::Config { .. }));
    }
}
