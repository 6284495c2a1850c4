use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the database file. Created if missing.
    pub data_dir: PathBuf,
    /// Promotes the store's lifecycle messages from `debug` to `info`.
    pub verbose: bool,
    /// Compact the database file when the store is closed.
    pub compact_on_close: bool,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn compact_on_close(mut self, enabled: bool) -> Self {
        self.compact_on_close = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            verbose: false,
            compact_on_close: false,
        }
    }
}
