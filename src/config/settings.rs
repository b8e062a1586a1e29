//! User settings for Pocket Budget
//!
//! Manages where the currency catalog comes from and how notifications
//! and dates are presented.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::PocketPaths;
use crate::error::BudgetError;
use crate::models::is_valid_date_format;
use crate::services::catalog::CatalogSource;

/// User settings for Pocket Budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Path or http(s) URL of the currency catalog.
    /// `None` means the `currencies.json` next to the settings file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_source: Option<String>,

    /// How long a notification stays on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Fade-out duration once a notification has expired
    #[serde(default = "default_fade_millis")]
    pub fade_millis: u64,

    /// Date format for transaction rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_notification_secs() -> u64 {
    3
}

fn default_fade_millis() -> u64 {
    500
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            catalog_source: None,
            notification_secs: default_notification_secs(),
            fade_millis: default_fade_millis(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !is_valid_date_format(&settings.date_format) {
                warn!(
                    date_format = %settings.date_format,
                    "Date format cannot render a date, using the default"
                );
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the configured catalog source
    pub fn catalog_source(&self, paths: &PocketPaths) -> CatalogSource {
        match &self.catalog_source {
            Some(raw) if !raw.trim().is_empty() => CatalogSource::parse(raw.trim()),
            _ => CatalogSource::File(paths.currencies_file()),
        }
    }
}
