//! Derived budget summaries
//!
//! Summaries are pure reductions over the transaction list. Nothing is
//! rounded here; rounding happens only when a value is formatted.

use chrono::Month;
use serde::Serialize;

use super::transaction::Transaction;

/// Totals derived from the current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The monthly income baseline
    pub income: f64,
    /// Sum of negative amounts (zero or negative)
    pub total_expenses: f64,
    /// Sum of positive amounts
    pub total_income_from_transactions: f64,
    /// Sum of every amount
    pub net_flow: f64,
    /// `income + net_flow`
    pub projected_savings: f64,
    /// Symbol to format the figures with
    pub currency_symbol: String,
}

impl Summary {
    /// Reduce a transaction list against an income baseline
    pub fn compute(income: f64, transactions: &[Transaction], currency_symbol: &str) -> Self {
        let mut total_expenses = 0.0;
        let mut total_income_from_transactions = 0.0;
        let mut net_flow = 0.0;

        for txn in transactions {
            if txn.amount < 0.0 {
                total_expenses += txn.amount;
            } else if txn.amount > 0.0 {
                total_income_from_transactions += txn.amount;
            }
            net_flow += txn.amount;
        }

        Self {
            income,
            total_expenses,
            total_income_from_transactions,
            net_flow,
            projected_savings: income + net_flow,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Expenses as a positive figure
    pub fn total_spent(&self) -> f64 {
        -self.total_expenses
    }

    pub fn is_deficit(&self) -> bool {
        self.projected_savings < 0.0
    }
}

/// Notice produced when a new calendar month clears the transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRollover {
    /// Month (0-11) whose transactions were cleared
    pub previous_month: u32,
    /// Month (0-11) now recorded as the last reset
    pub current_month: u32,
    /// Totals as they stood before clearing
    pub summary: Summary,
}

impl MonthlyRollover {
    /// English name of the month that just closed
    pub fn previous_month_name(&self) -> &'static str {
        month_name(self.previous_month)
    }
}

/// English name for a zero-based month index
pub fn month_name(month0: u32) -> &'static str {
    u8::try_from(month0)
        .ok()
        .and_then(|m| m.checked_add(1))
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}
