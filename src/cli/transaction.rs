//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing and deleting transactions.

use chrono::Local;
use clap::Subcommand;

use super::print_notification;
use crate::config::settings::Settings;
use crate::display::{format_transaction_list, format_transaction_row};
use crate::error::{BudgetError, BudgetResult};
use crate::models::transaction::INPUT_DATE_FORMAT;
use crate::models::{parse_amount, Notification};
use crate::services::budget::BudgetStore;
use crate::storage::kv::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction (negative amounts are expenses)
    Add {
        /// What the money was for
        description: String,

        /// Signed amount, e.g. "-50" for an expense
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List,

    /// Delete a transaction by its list index
    #[command(alias = "rm")]
    Delete {
        /// Index as shown by `txn list`
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            date,
        } => {
            let amount = parse_amount(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(INPUT_DATE_FORMAT).to_string());

            let index = store.add_transaction(&description, amount, &date)?;

            print_notification(&Notification::success("Transaction added!"));
            if let Some(txn) = store.transactions().get(index) {
                println!(
                    "  {}",
                    format_transaction_row(txn, store.selected_currency_symbol(), &settings.date_format)
                );
            }
        }

        TransactionCommands::List => {
            print!(
                "{}",
                format_transaction_list(
                    store.transactions(),
                    store.selected_currency_symbol(),
                    &settings.date_format,
                )
            );
        }

        TransactionCommands::Delete { index } => {
            let len = store.transactions().len();
            let index = usize::try_from(index)
                .map_err(|_| BudgetError::index_out_of_range(index, len))?;

            let removed = store.delete_transaction(index)?;

            print_notification(&Notification::info("Transaction deleted."));
            println!(
                "  {}",
                format_transaction_row(&removed, store.selected_currency_symbol(), &settings.date_format)
            );
        }
    }

    Ok(())
}
