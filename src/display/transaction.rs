//! Transaction display formatting
//!
//! Formats the transaction register for terminal output.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{format_date, format_signed_amount, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a single transaction on one line
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    format!(
        "{} {:30} {:>14}",
        format_date(txn.date, date_format),
        truncate(&txn.description, 30),
        format_signed_amount(symbol, txn.amount)
    )
}

/// Format the register as a table; indices match `delete`
pub fn format_transaction_list(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows = transactions
        .iter()
        .enumerate()
        .map(|(index, txn)| TransactionRow {
            index,
            date: format_date(txn.date, date_format),
            description: txn.description.clone(),
            kind: txn.kind().to_string(),
            amount: format_signed_amount(symbol, txn.amount),
        });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
