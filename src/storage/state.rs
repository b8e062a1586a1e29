//! Budget state persistence
//!
//! Maps `BudgetState` onto the four persisted keys. Every read goes through
//! an explicit default-substitution rule, so a missing or malformed value
//! never prevents the tracker from starting.

use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::error::BudgetResult;
use crate::models::{BudgetState, Transaction, DEFAULT_CURRENCY_SYMBOL};

pub const INCOME_KEY: &str = "income";
pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CURRENCY_KEY: &str = "currency";
pub const LAST_RESET_MONTH_KEY: &str = "lastResetMonth";

/// Load the budget state, substituting defaults for bad values
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> BudgetResult<BudgetState> {
    let mut state = BudgetState {
        income: parse_income(store.get(INCOME_KEY)?.as_deref()),
        transactions: parse_transactions(store.get(TRANSACTIONS_KEY)?.as_deref()),
        selected_currency_symbol: parse_currency(store.get(CURRENCY_KEY)?.as_deref()),
        last_reset_month: parse_month(store.get(LAST_RESET_MONTH_KEY)?.as_deref()),
    };
    state.sort_transactions();

    debug!(
        income = state.income,
        transactions = state.transactions.len(),
        last_reset_month = ?state.last_reset_month,
        "Loaded budget state"
    );

    Ok(state)
}

pub fn save_income<S: KeyValueStore + ?Sized>(store: &mut S, income: f64) -> BudgetResult<()> {
    store.set(INCOME_KEY, &income.to_string())
}

pub fn save_transactions<S: KeyValueStore + ?Sized>(
    store: &mut S,
    transactions: &[Transaction],
) -> BudgetResult<()> {
    store.set(TRANSACTIONS_KEY, &serde_json::to_string(transactions)?)
}

pub fn save_currency<S: KeyValueStore + ?Sized>(store: &mut S, symbol: &str) -> BudgetResult<()> {
    store.set(CURRENCY_KEY, symbol)
}

/// Persist the rollover month; an unset month is left unwritten
pub fn save_last_reset_month<S: KeyValueStore + ?Sized>(
    store: &mut S,
    month: Option<u32>,
) -> BudgetResult<()> {
    match month {
        Some(month) => store.set(LAST_RESET_MONTH_KEY, &month.to_string()),
        None => Ok(()),
    }
}

/// Persist every field of the state
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &BudgetState) -> BudgetResult<()> {
    save_income(store, state.income)?;
    save_transactions(store, &state.transactions)?;
    save_currency(store, &state.selected_currency_symbol)?;
    save_last_reset_month(store, state.last_reset_month)
}

fn parse_income(raw: Option<&str>) -> f64 {
    match raw.map(|s| s.trim().parse::<f64>()) {
        None => 0.0,
        Some(Ok(income)) if income.is_finite() && income >= 0.0 => income,
        Some(_) => {
            warn!(raw = ?raw, "Stored income is invalid, using 0");
            0.0
        }
    }
}

fn parse_transactions(raw: Option<&str>) -> Vec<Transaction> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let records: Vec<Transaction> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Stored transactions are unreadable, starting empty");
            return Vec::new();
        }
    };

    let total = records.len();
    let valid: Vec<Transaction> = records
        .into_iter()
        .filter(|txn| txn.validate().is_ok())
        .collect();

    if valid.len() != total {
        warn!(
            dropped = total - valid.len(),
            "Discarded stored transactions that fail validation"
        );
    }

    valid
}

fn parse_currency(raw: Option<&str>) -> String {
    match raw {
        Some(symbol) if !symbol.is_empty() => symbol.to_string(),
        _ => DEFAULT_CURRENCY_SYMBOL.to_string(),
    }
}

fn parse_month(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|month| *month <= 11)
}
