//! JSON file store.
//!
//! Reads and writes the whole ledger as one pretty-printed JSON document.
//! Saves go to a sibling temp file which is synced and then renamed over the
//! target, so a failed save never leaves a half-written ledger behind.

use super::{LedgerStore, document::LedgerDocument};
use crate::{
    entities::LedgerState,
    errors::{Error, Result},
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Ledger persisted to a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given file. Nothing is read until
    /// [`LedgerStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next save is written to before the rename.
    #[must_use]
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn persistence_error(&self, action: &str, e: impl std::fmt::Display) -> Error {
        Error::Persistence {
            message: format!("Failed to {action} {}: {e}", self.path.display()),
        }
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Option<LedgerState>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Ledger file does not exist");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| self.persistence_error("read", e))?;
        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "Ledger file is empty");
            return Ok(None);
        }

        let state = LedgerDocument::parse(&contents)?.into_state()?;
        debug!(
            path = %self.path.display(),
            wagers = state.wagers.len(),
            "Loaded ledger file"
        );
        Ok(Some(state))
    }

    fn save(&mut self, state: &LedgerState) -> Result<()> {
        let json = serde_json::to_string_pretty(&LedgerDocument::from_state(state))
            .map_err(|e| self.persistence_error("encode", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error("prepare", e))?;
        }

        let temp_path = self.temp_path();
        let write_temp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        };

        write_temp().map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.persistence_error("write", e)
        })?;

        debug!(path = %self.path.display(), bytes = json.len(), "Saved ledger file");
        Ok(())
    }
}
