//! Storage layer for Pocket Budget
//!
//! Provides the key/value persistence adapters, atomic JSON file writes and
//! the mapping between `BudgetState` and its persisted keys.

pub mod file_io;
pub mod kv;
pub mod state;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use state::{load_state, save_state};

use crate::config::paths::PocketPaths;
use crate::error::BudgetError;

/// Open the on-disk store for the given paths
pub fn open_file_store(paths: &PocketPaths) -> Result<JsonFileStore, BudgetError> {
    paths.ensure_directories()?;
    Ok(JsonFileStore::open(paths.storage_file()))
}
