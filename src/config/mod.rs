use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::analytics::{DEFAULT_RECENT_LIMIT, DEFAULT_SERIES_MONTHS};
use crate::core::utils::{app_data_dir, config_file_in, ensure_dir, state_dir_in, write_atomic};
use crate::errors::Result;
use crate::storage::{
    deferred::DeferredPersistence, json_backend::JsonFileStore, BlobPersistence,
    StatePersistence, STATE_KEY,
};
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Key the state blob is stored under.
    pub storage_key: String,
    /// Overrides the directory state blobs are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub recent_limit: usize,
    pub series_months: u32,
    /// Hand snapshots to a background writer so `dispatch` never waits on disk. When
    /// false, each snapshot is written inline.
    pub deferred_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STATE_KEY.into(),
            data_dir: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
            series_months: DEFAULT_SERIES_MONTHS,
            deferred_writes: true,
        }
    }
}

impl Config {
    /// Directory state blobs live in, relative to the application base directory.
    pub fn state_dir(&self, base: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| state_dir_in(base))
    }

    /// Builds a file-backed store and restores any snapshot already on disk.
    pub fn open_store(&self, base: &Path) -> Result<Store> {
        let dir = self.state_dir(base);
        let blobs = JsonFileStore::new(dir.clone())?;
        let persistence = BlobPersistence::with_key(blobs, self.storage_key.clone());
        let persistence: Box<dyn StatePersistence> = if self.deferred_writes {
            Box::new(DeferredPersistence::new(persistence)?)
        } else {
            Box::new(persistence)
        };
        info!(dir = %dir.display(), key = %self.storage_key, "opening state store");
        Ok(Store::open(persistence))
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Loads the configuration and opens the store it describes.
    pub fn open_store(&self) -> Result<(Config, Store)> {
        let config = self.load()?;
        let store = config.open_store(&self.base)?;
        Ok((config, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transaction;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn load_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_key, "expenseTrackerState");
        assert!(config.deferred_writes);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            recent_limit: 10,
            deferred_writes: false,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert!(manager.path().exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "recent_limit": 3 }"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.series_months, DEFAULT_SERIES_MONTHS);
        assert!(config.deferred_writes);
    }

    #[test]
    fn open_store_restores_previous_session() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        {
            let (_, mut store) = manager.open_store().unwrap();
            let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
            store.add_transaction(Transaction::new("Rent", -900.0, date, "bills").with_id("rent"));
        }
        let (_, store) = manager.open_store().unwrap();
        assert!(store.state().transaction("rent").is_some());
    }
}
