//! Currency CLI commands

use clap::Subcommand;

use super::print_notification;
use crate::config::paths::PocketPaths;
use crate::config::settings::Settings;
use crate::display::format_catalog;
use crate::error::BudgetResult;
use crate::models::Notification;
use crate::services::budget::BudgetStore;
use crate::services::catalog::load_catalog_or_fallback;
use crate::storage::kv::KeyValueStore;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// List the available currencies
    #[command(alias = "ls")]
    List,

    /// Select the display currency by symbol
    Set {
        /// Currency symbol, e.g. "$" or "€"
        symbol: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    paths: &PocketPaths,
    cmd: CurrencyCommands,
) -> BudgetResult<()> {
    match cmd {
        CurrencyCommands::List => {
            let load = load_catalog_or_fallback(&settings.catalog_source(paths));
            if load.used_fallback() {
                print_notification(&Notification::warning(
                    "Error loading currency list. Using defaults.",
                ));
            }
            print!(
                "{}",
                format_catalog(&load.currencies, store.selected_currency_symbol())
            );
        }

        CurrencyCommands::Set { symbol } => {
            store.set_selected_currency(&symbol)?;
            print_notification(&Notification::success(format!(
                "Currency set to {}",
                store.selected_currency_symbol()
            )));
        }
    }

    Ok(())
}
