//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget store.

pub mod currency;
pub mod data;
pub mod income;
pub mod transaction;

pub use currency::{handle_currency_command, CurrencyCommands};
pub use data::{confirm, handle_clear, handle_config, handle_init, handle_summary};
pub use income::{handle_income_command, IncomeCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::display::{format_notification, format_rollover};
use crate::models::{MonthlyRollover, Notification};

/// Print a success/info/warning line to stdout
pub fn print_notification(notification: &Notification) {
    println!("{}", format_notification(notification));
}

/// Print the notice shown when a new month cleared the register
pub fn print_rollover(rollover: &MonthlyRollover) {
    print_notification(&Notification::info(
        "New month! Transactions have been cleared.",
    ));
    println!("{}", format_rollover(rollover));
}
