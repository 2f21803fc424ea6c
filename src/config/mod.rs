/// Application settings loaded from config.toml
pub mod settings;

/// Location of the ledger data file
pub mod storage;

pub use settings::{AppConfig, DEFAULT_CONFIG_FILE, load_config};
pub use storage::{DATA_FILE_ENV, DEFAULT_DATA_FILE, resolve_data_file};
