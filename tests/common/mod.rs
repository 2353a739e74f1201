#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use expense_core::{
    config::ConfigManager,
    domain::{Budget, Transaction},
    storage::{json_backend::JsonFileStore, BlobPersistence},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated base directory and a config manager rooted in it.
pub fn setup_test_env() -> (PathBuf, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (base, config_manager)
}

/// File-backed persistence inside a fresh temp directory.
pub fn file_persistence() -> (PathBuf, BlobPersistence<JsonFileStore>) {
    let (base, _) = setup_test_env();
    let dir = base.join("state");
    let store = JsonFileStore::new(dir.clone()).expect("create json blob store");
    (dir, BlobPersistence::new(store))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn expense(
    id: &str,
    description: &str,
    amount: f64,
    on: NaiveDate,
    category: &str,
) -> Transaction {
    Transaction::new(description, -amount.abs(), on, category).with_id(id)
}

pub fn income(id: &str, description: &str, amount: f64, on: NaiveDate) -> Transaction {
    Transaction::new(description, amount.abs(), on, "other").with_id(id)
}

pub fn budget(id: &str, category: &str, amount: f64, month: u32, year: i32) -> Budget {
    Budget::new(category, amount, month, year).with_id(id)
}
