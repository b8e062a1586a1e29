//! Whole-budget CLI commands: init, summary, clear and config

use std::io::{BufRead, Write};

use super::print_notification;
use crate::config::paths::PocketPaths;
use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::BudgetResult;
use crate::models::Notification;
use crate::services::budget::{current_month, BudgetStore};
use crate::services::catalog::write_default_catalog;
use crate::storage::kv::KeyValueStore;

/// Create the data directory, settings file and default currency catalog
///
/// Existing files are left alone so `init` can be re-run safely.
pub fn handle_init(paths: &PocketPaths, settings: &Settings) -> BudgetResult<()> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }
    if !paths.currencies_file().exists() {
        write_default_catalog(&paths.currencies_file())?;
    }

    println!("Initialized Pocket Budget at {}", paths.base_dir().display());
    Ok(())
}

/// Print the budget summary
pub fn handle_summary<S: KeyValueStore>(store: &BudgetStore<S>) -> BudgetResult<()> {
    print!("{}", format_summary(&store.compute_summary()));
    Ok(())
}

/// Clear all data, asking for confirmation unless `force` is set
///
/// Declining leaves the store untouched.
pub fn handle_clear<S, R, W>(
    store: &mut BudgetStore<S>,
    force: bool,
    input: &mut R,
    output: &mut W,
) -> BudgetResult<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if !force
        && !confirm(
            "Are you sure you want to clear all data? This cannot be undone. (yes/no): ",
            input,
            output,
        )?
    {
        writeln!(output, "Aborted.")?;
        return Ok(());
    }

    store.clear_all_data(current_month())?;
    print_notification(&Notification::warning("All data cleared!"));
    Ok(())
}

/// Print paths and settings
pub fn handle_config(paths: &PocketPaths, settings: &Settings) -> BudgetResult<()> {
    println!("Pocket Budget Configuration");
    println!("{}", "=".repeat(40));
    println!("Data directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Storage file:     {}", paths.storage_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Currency catalog: {}", settings.catalog_source(paths));
    println!("Notifications:    {}s (+{}ms fade)", settings.notification_secs, settings.fade_millis);
    println!("Date format:      {}", settings.date_format);
    Ok(())
}

/// Ask a yes/no question; only "yes" or "y" counts as agreement
pub fn confirm<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}
