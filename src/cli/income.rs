//! Income CLI commands
//!
//! Implements CLI commands for the monthly income figure.

use clap::Subcommand;

use super::print_notification;
use crate::display::{format_income_line, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_amount, Notification};
use crate::services::budget::BudgetStore;
use crate::storage::kv::KeyValueStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "2500" or "2500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let value = parse_amount(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;

            let summary = store.set_income(value)?;

            print_notification(&Notification::success("Income updated successfully!"));
            println!();
            print!("{}", format_summary(&summary));
        }

        IncomeCommands::Show => {
            println!("{}", format_income_line(&store.compute_summary()));
        }
    }

    Ok(())
}
