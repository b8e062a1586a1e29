//! Key/value persistence adapters
//!
//! The tracker persists four string-valued keys. `JsonFileStore` keeps them
//! in a single JSON object on disk and rewrites it atomically after every
//! change; `MemoryStore` keeps them in process.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

use super::file_io::{read_json, write_json_atomic};
use crate::error::BudgetResult;

/// Durable string key/value storage
pub trait KeyValueStore {
    /// Read a value; `None` if the key was never written
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove a single key
    fn remove(&mut self, key: &str) -> BudgetResult<()>;

    /// Erase every key
    fn clear(&mut self) -> BudgetResult<()>;
}

/// Key/value store backed by one JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store, loading existing entries
    ///
    /// A file that cannot be parsed is treated as empty so that every key
    /// falls back to its default; it is only replaced on the next write.
    pub fn open(path: PathBuf) -> Self {
        let entries = match read_json::<BTreeMap<String, String>, _>(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable storage file");
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write `entries` to disk, adopting them only once the write succeeded
    fn commit(&mut self, entries: BTreeMap<String, String>) -> BudgetResult<()> {
        write_json_atomic(&self.path, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.commit(BTreeMap::new())
    }
}

/// In-process key/value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        {
            let mut store = JsonFileStore::open(path.clone());
            store.set("income", "1000").unwrap();
            store.set("currency", "$").unwrap();
            store.remove("currency").unwrap();
        }

        let store = JsonFileStore::open(path);
        assert_eq!(store.get("income").unwrap().as_deref(), Some("1000"));
        assert_eq!(store.get("currency").unwrap(), None);
    }

    #[test]
    fn test_file_store_clear() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = JsonFileStore::open(path.clone());
        store.set("income", "1000").unwrap();
        store.clear().unwrap();

        let reopened = JsonFileStore::open(path);
        assert_eq!(reopened.get("income").unwrap(), None);
    }

    #[test]
    fn test_failed_write_leaves_no_trace() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let blocker = temp_dir.path().join("storage.json.tmp");

        let mut store = JsonFileStore::open(path.clone());
        store.set("income", "100").unwrap();

        // A directory in the temp file's place makes the write fail
        std::fs::create_dir(&blocker).unwrap();
        assert!(store.set("income", "999").is_err());
        assert!(store.remove("income").is_err());
        assert!(store.clear().is_err());
        assert_eq!(store.get("income").unwrap().as_deref(), Some("100"));
        std::fs::remove_dir(&blocker).unwrap();

        store.set("currency", "$").unwrap();

        let reopened = JsonFileStore::open(path);
        assert_eq!(reopened.get("income").unwrap().as_deref(), Some("100"));
        assert_eq!(reopened.get("currency").unwrap().as_deref(), Some("$"));
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ broken").unwrap();

        let store = JsonFileStore::open(path);
        assert_eq!(store.get("income").unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with_entries([("income", "5")]);
        assert_eq!(store.get("income").unwrap().as_deref(), Some("5"));

        store.set("currency", "€").unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
