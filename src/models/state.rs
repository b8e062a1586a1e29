//! Persisted budget state
//!
//! One income figure, one flat list of transactions, the display currency
//! symbol and the month of the last rollover check.

use std::cmp::Reverse;

use super::transaction::Transaction;

/// Symbol used until the user picks another one
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// The whole tracker state
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    /// Monthly income baseline (never negative)
    pub income: f64,

    /// Transactions, newest date first
    pub transactions: Vec<Transaction>,

    /// Display-only currency symbol
    pub selected_currency_symbol: String,

    /// Calendar month (0-11) of the last rollover check, `None` before the first
    pub last_reset_month: Option<u32>,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self {
            income: 0.0,
            transactions: Vec::new(),
            selected_currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            last_reset_month: None,
        }
    }
}

impl BudgetState {
    /// Defaults with the rollover month already recorded
    pub fn reset_for_month(current_month: u32) -> Self {
        Self {
            last_reset_month: Some(current_month),
            ..Self::default()
        }
    }

    /// Re-establish date-descending order; equal dates keep their relative order
    pub fn sort_transactions(&mut self) {
        self.transactions.sort_by_key(|t| Reverse(t.date));
    }
}
