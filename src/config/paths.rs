//! Path management for Pocket Budget
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//! 3. `$HOME/.config/pocket-budget` when no platform directory is known

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "POCKET_BUDGET_DATA_DIR";

/// Manages all paths used by Pocket Budget
#[derive(Debug, Clone)]
pub struct PocketPaths {
    /// Base directory for all Pocket Budget files
    base_dir: PathBuf,
}

impl PocketPaths {
    /// Create a new PocketPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PocketPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the persisted key/value store
    pub fn storage_file(&self) -> PathBuf {
        self.base_dir.join("storage.json")
    }

    /// Path to the default currency catalog
    pub fn currencies_file(&self) -> PathBuf {
        self.base_dir.join("currencies.json")
    }

    /// Path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("pocket.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Pocket Budget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    if let Some(dirs) = ProjectDirs::from("", "", "pocket-budget") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("pocket-budget"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.storage_file(), temp_dir.path().join("storage.json"));
        assert_eq!(
            paths.currencies_file(),
            temp_dir.path().join("currencies.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
