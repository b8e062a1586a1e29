//! Summary display formatting

use crate::models::{format_money, MonthlyRollover, Summary};

/// One-line income header
pub fn format_income_line(summary: &Summary) -> String {
    format!(
        "Monthly Income: {}",
        format_money(&summary.currency_symbol, summary.income)
    )
}

/// Multi-line summary block
pub fn format_summary(summary: &Summary) -> String {
    let symbol = summary.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "Set Monthly Income:        {:>14}\n",
        format_money(symbol, summary.income)
    ));
    output.push_str(&format!(
        "Income from Transactions:  {:>14}\n",
        format_money(symbol, summary.total_income_from_transactions)
    ));
    output.push_str(&format!(
        "Total Expenses:            {:>14}\n",
        format_money(symbol, summary.total_spent())
    ));
    output.push_str(&"-".repeat(41));
    output.push('\n');
    output.push_str(&format!(
        "Projected Savings/Balance: {:>14}\n",
        format_money(symbol, summary.projected_savings)
    ));

    output
}

/// Notice shown after a monthly rollover
pub fn format_rollover(rollover: &MonthlyRollover) -> String {
    let summary = &rollover.summary;
    let symbol = summary.currency_symbol.as_str();

    format!(
        "{} summary (transactions have been cleared)\n  Total Income: {}\n  Total Spent:  {}\n  Savings:      {}\n",
        rollover.previous_month_name(),
        format_money(symbol, summary.income),
        format_money(symbol, summary.total_spent()),
        format_money(symbol, summary.projected_savings),
    )
}
