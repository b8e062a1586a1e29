//! Tracing setup
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs
//! to a file under the data directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "POCKET_BUDGET_LOG";

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr
pub fn init_stderr_logging() {
    let stderr_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry().with(stderr_log).try_init();
}

/// Log to an append-only file
pub fn init_file_logging(path: &Path) -> BudgetResult<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Io(format!("Could not open log file: {}", e)))?;

    let file_log = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(env_filter());

    let _ = tracing_subscriber::registry().with(file_log).try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pocket.log");

        init_file_logging(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_file_logging_bad_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("pocket.log");

        assert!(init_file_logging(&path).is_err());
    }
}
