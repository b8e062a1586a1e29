//! Budget store
//!
//! Owns the budget state and the persistence adapter it is written to.
//! Every successful mutation is persisted before it returns; every failed
//! one leaves the state untouched.

use chrono::{Datelike, Local};
use tracing::{error, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, MonthlyRollover, Summary, Transaction};
use crate::storage::kv::KeyValueStore;
use crate::storage::state::{
    load_state, save_currency, save_income, save_last_reset_month, save_state, save_transactions,
};

/// Current local calendar month, zero-based
pub fn current_month() -> u32 {
    Local::now().month0()
}

/// Controller for the tracker state
pub struct BudgetStore<S: KeyValueStore> {
    state: BudgetState,
    store: S,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Load state from the given store
    pub fn open(store: S) -> BudgetResult<Self> {
        let state = load_state(&store)?;
        Ok(Self { state, store })
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn income(&self) -> f64 {
        self.state.income
    }

    /// Transactions, newest date first
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn selected_currency_symbol(&self) -> &str {
        &self.state.selected_currency_symbol
    }

    pub fn last_reset_month(&self) -> Option<u32> {
        self.state.last_reset_month
    }

    /// The underlying persistence adapter
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the monthly income baseline
    pub fn set_income(&mut self, value: f64) -> BudgetResult<Summary> {
        if !value.is_finite() || value < 0.0 {
            return Err(BudgetError::Validation(
                "Income must be a non-negative number".into(),
            ));
        }

        save_income(&mut self.store, value)?;
        self.state.income = value;
        info!(income = value, "Income updated");

        Ok(self.compute_summary())
    }

    /// Record a transaction, returning the index it landed at
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        date: &str,
    ) -> BudgetResult<usize> {
        let txn = Transaction::from_input(description, amount, date)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let mut transactions = self.state.transactions.clone();
        // Goes after existing entries with the same date
        let index = transactions.partition_point(|t| t.date >= txn.date);
        transactions.insert(index, txn);

        save_transactions(&mut self.store, &transactions)?;
        self.state.transactions = transactions;
        info!(index, count = self.state.transactions.len(), "Transaction added");

        Ok(index)
    }

    /// Remove the transaction at `index`
    pub fn delete_transaction(&mut self, index: usize) -> BudgetResult<Transaction> {
        let len = self.state.transactions.len();
        if index >= len {
            let index = i64::try_from(index).unwrap_or(i64::MAX);
            error!(index, len, "Invalid index for deletion");
            return Err(BudgetError::index_out_of_range(index, len));
        }

        let mut transactions = self.state.transactions.clone();
        let removed = transactions.remove(index);

        save_transactions(&mut self.store, &transactions)?;
        self.state.transactions = transactions;
        info!(index, "Transaction deleted");

        Ok(removed)
    }

    /// Change the display currency symbol
    ///
    /// The symbol is not checked against the loaded catalog.
    pub fn set_selected_currency(&mut self, symbol: &str) -> BudgetResult<Summary> {
        save_currency(&mut self.store, symbol)?;
        self.state.selected_currency_symbol = symbol.to_string();
        info!(symbol, "Currency selected");

        Ok(self.compute_summary())
    }

    /// Clear transactions when the calendar month has moved on
    ///
    /// Returns the closed month's totals when a rollover happened. The very
    /// first check only records the month.
    pub fn check_monthly_reset(
        &mut self,
        current_month: u32,
    ) -> BudgetResult<Option<MonthlyRollover>> {
        if current_month > 11 {
            return Err(BudgetError::Validation(format!(
                "Month {} is outside 0-11",
                current_month
            )));
        }

        match self.state.last_reset_month {
            None => {
                save_last_reset_month(&mut self.store, Some(current_month))?;
                self.state.last_reset_month = Some(current_month);
                info!(month = current_month, "Recorded first rollover month");
                Ok(None)
            }
            Some(previous_month) if previous_month != current_month => {
                let rollover = MonthlyRollover {
                    previous_month,
                    current_month,
                    summary: self.compute_summary(),
                };

                save_transactions(&mut self.store, &[])?;
                if let Err(e) = save_last_reset_month(&mut self.store, Some(current_month)) {
                    // Put the closed month's transactions back so the next
                    // check sees the same state
                    if let Err(restore) =
                        save_transactions(&mut self.store, &self.state.transactions)
                    {
                        error!(error = %restore, "Could not restore transactions");
                    }
                    return Err(e);
                }

                self.state.transactions.clear();
                self.state.last_reset_month = Some(current_month);
                info!(
                    from = previous_month,
                    to = current_month,
                    "New month, transactions cleared"
                );

                Ok(Some(rollover))
            }
            Some(_) => Ok(None),
        }
    }

    /// Erase everything and restore defaults
    ///
    /// Irreversible. Callers are expected to have confirmed with the user.
    pub fn clear_all_data(&mut self, current_month: u32) -> BudgetResult<()> {
        let fresh = BudgetState::reset_for_month(current_month);

        self.store.clear()?;
        save_state(&mut self.store, &fresh)?;
        self.state = fresh;
        info!("All data cleared");

        Ok(())
    }

    /// Derive the summary figures; no side effects
    pub fn compute_summary(&self) -> Summary {
        Summary::compute(
            self.state.income,
            &self.state.transactions,
            &self.state.selected_currency_symbol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{JsonFileStore, MemoryStore};
    use crate::storage::state::{
        CURRENCY_KEY, INCOME_KEY, LAST_RESET_MONTH_KEY, TRANSACTIONS_KEY,
    };
    use tempfile::TempDir;

    fn create_test_store() -> BudgetStore<MemoryStore> {
        BudgetStore::open(MemoryStore::new()).unwrap()
    }

    fn descriptions(store: &BudgetStore<MemoryStore>) -> Vec<&str> {
        store
            .transactions()
            .iter()
            .map(|t| t.description.as_str())
            .collect()
    }

    #[test]
    fn test_set_income() {
        let mut store = create_test_store();
        let summary = store.set_income(1000.0).unwrap();

        assert_eq!(store.income(), 1000.0);
        assert_eq!(summary.projected_savings, 1000.0);
        assert_eq!(store.store().get(INCOME_KEY).unwrap().as_deref(), Some("1000"));
    }

    #[test]
    fn test_set_income_rejects_negative_and_nan() {
        let mut store = create_test_store();
        store.set_income(300.0).unwrap();

        assert!(store.set_income(-5.0).unwrap_err().is_validation());
        assert!(store.set_income(f64::NAN).unwrap_err().is_validation());
        assert!(store.set_income(f64::INFINITY).unwrap_err().is_validation());
        assert_eq!(store.income(), 300.0);
    }

    #[test]
    fn test_set_income_accepts_zero() {
        let mut store = create_test_store();
        store.set_income(0.0).unwrap();
        assert_eq!(store.income(), 0.0);
    }

    #[test]
    fn test_groceries_summary() {
        let mut store = create_test_store();
        store.set_income(1000.0).unwrap();
        store.add_transaction("Groceries", -50.0, "2024-01-05").unwrap();

        let summary = store.compute_summary();
        assert_eq!(summary.total_expenses, -50.0);
        assert_eq!(summary.total_income_from_transactions, 0.0);
        assert_eq!(summary.net_flow, -50.0);
        assert_eq!(summary.projected_savings, 950.0);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.currency_symbol, "₹");
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut store = create_test_store();
        store.add_transaction("Mid", -1.0, "2024-03-10").unwrap();
        store.add_transaction("Early", -1.0, "2024-01-01").unwrap();
        store.add_transaction("Late", 5.0, "2024-12-31").unwrap();
        store.add_transaction("Mid again", 2.0, "2024-03-10").unwrap();

        assert_eq!(descriptions(&store), vec!["Late", "Mid", "Mid again", "Early"]);
        assert!(store
            .transactions()
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn test_add_returns_landing_index() {
        let mut store = create_test_store();
        assert_eq!(store.add_transaction("B", 1.0, "2024-02-01").unwrap(), 0);
        assert_eq!(store.add_transaction("A", 1.0, "2024-03-01").unwrap(), 0);
        assert_eq!(store.add_transaction("C", 1.0, "2024-01-01").unwrap(), 2);
        assert_eq!(store.add_transaction("B2", 1.0, "2024-02-01").unwrap(), 2);
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut store = create_test_store();
        store.add_transaction("Rent", -800.0, "2024-04-01").unwrap();
        store.add_transaction("Salary", 2500.0, "2024-04-25").unwrap();
        store.add_transaction("Coffee", -3.0, "2024-04-10").unwrap();
        let before = store.transactions().to_vec();

        let index = store.add_transaction("Books", -30.0, "2024-04-10").unwrap();
        let removed = store.delete_transaction(index).unwrap();

        assert_eq!(removed.description, "Books");
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut store = create_test_store();
        store.add_transaction("Keep", 1.0, "2024-01-01").unwrap();

        assert!(store.add_transaction("  ", 1.0, "2024-01-01").unwrap_err().is_validation());
        assert!(store.add_transaction("x", f64::NAN, "2024-01-01").unwrap_err().is_validation());
        assert!(store.add_transaction("x", 1.0, "2024-13-01").unwrap_err().is_validation());
        assert!(store.add_transaction("x", 1.0, "").unwrap_err().is_validation());

        assert_eq!(descriptions(&store), vec!["Keep"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut store = create_test_store();
        store.add_transaction("Only", 1.0, "2024-01-01").unwrap();

        let err = store.delete_transaction(1).unwrap_err();
        assert!(err.is_index());
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_delete_persists() {
        let mut store = create_test_store();
        store.add_transaction("A", 1.0, "2024-01-02").unwrap();
        store.add_transaction("B", 1.0, "2024-01-01").unwrap();

        store.delete_transaction(0).unwrap();

        let raw = store.store().get(TRANSACTIONS_KEY).unwrap().unwrap();
        let persisted: Vec<Transaction> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].description, "B");
    }

    #[test]
    fn test_set_selected_currency_unvalidated() {
        let mut store = create_test_store();
        let summary = store.set_selected_currency("XYZ").unwrap();

        assert_eq!(summary.currency_symbol, "XYZ");
        assert_eq!(store.selected_currency_symbol(), "XYZ");
        assert_eq!(store.store().get(CURRENCY_KEY).unwrap().as_deref(), Some("XYZ"));
    }

    #[test]
    fn test_first_monthly_check_only_records_month() {
        let mut store = create_test_store();
        store.add_transaction("Keep", -10.0, "2024-04-02").unwrap();

        let rollover = store.check_monthly_reset(3).unwrap();

        assert!(rollover.is_none());
        assert_eq!(store.last_reset_month(), Some(3));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(
            store.store().get(LAST_RESET_MONTH_KEY).unwrap().as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_month_change_clears_transactions() {
        let mut store = create_test_store();
        store.set_income(1000.0).unwrap();
        store.check_monthly_reset(3).unwrap();
        store.add_transaction("Groceries", -50.0, "2024-04-05").unwrap();

        let rollover = store.check_monthly_reset(4).unwrap().unwrap();

        assert_eq!(rollover.previous_month, 3);
        assert_eq!(rollover.current_month, 4);
        assert_eq!(rollover.summary.total_expenses, -50.0);
        assert_eq!(rollover.summary.projected_savings, 950.0);
        assert!(store.transactions().is_empty());
        assert_eq!(store.income(), 1000.0);
        assert_eq!(store.last_reset_month(), Some(4));
        assert_eq!(store.store().get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("[]"));
    }

    /// Store whose writes to one key always fail
    struct FailingKeyStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl KeyValueStore for FailingKeyStore {
        fn get(&self, key: &str) -> BudgetResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
            if key == self.failing_key {
                return Err(BudgetError::Storage(format!("cannot write {}", key)));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> BudgetResult<()> {
            self.inner.remove(key)
        }

        fn clear(&mut self) -> BudgetResult<()> {
            self.inner.clear()
        }
    }

    #[test]
    fn test_failed_rollover_keeps_month_intact() {
        let transactions = r#"[{"description":"Groceries","amount":-50.0,"date":"2024-04-05"}]"#;
        let inner = MemoryStore::with_entries([
            (INCOME_KEY, "1000"),
            (TRANSACTIONS_KEY, transactions),
            (LAST_RESET_MONTH_KEY, "3"),
        ]);
        let mut store = BudgetStore::open(FailingKeyStore {
            inner,
            failing_key: LAST_RESET_MONTH_KEY,
        })
        .unwrap();

        assert!(store.check_monthly_reset(4).is_err());

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.last_reset_month(), Some(3));
        assert_eq!(store.compute_summary().projected_savings, 950.0);

        let reloaded = BudgetStore::open(MemoryStore::with_entries([
            (
                TRANSACTIONS_KEY,
                store.store().get(TRANSACTIONS_KEY).unwrap().unwrap().as_str(),
            ),
        ]))
        .unwrap();
        assert_eq!(reloaded.transactions().len(), 1);
    }

    #[test]
    fn test_same_month_is_noop() {
        let mut store = create_test_store();
        store.check_monthly_reset(7).unwrap();
        store.add_transaction("Keep", 1.0, "2024-08-01").unwrap();

        assert!(store.check_monthly_reset(7).unwrap().is_none());
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let mut store = create_test_store();
        assert!(store.check_monthly_reset(12).unwrap_err().is_validation());
        assert_eq!(store.last_reset_month(), None);
    }

    #[test]
    fn test_clear_all_data() {
        let mut store = create_test_store();
        store.set_income(5000.0).unwrap();
        store.add_transaction("Rent", -1200.0, "2024-06-01").unwrap();
        store.set_selected_currency("$").unwrap();
        store.check_monthly_reset(2).unwrap();

        store.clear_all_data(5).unwrap();

        assert_eq!(store.income(), 0.0);
        assert!(store.transactions().is_empty());
        assert_eq!(store.selected_currency_symbol(), "₹");
        assert_eq!(store.last_reset_month(), Some(5));

        let reloaded = load_state(store.store()).unwrap();
        assert_eq!(&reloaded, store.state());
    }

    #[test]
    fn test_state_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        {
            let mut store = BudgetStore::open(JsonFileStore::open(path.clone())).unwrap();
            store.set_income(1500.0).unwrap();
            store.add_transaction("Bonus", 200.0, "2024-09-15").unwrap();
            store.set_selected_currency("£").unwrap();
        }

        let store = BudgetStore::open(JsonFileStore::open(path)).unwrap();
        assert_eq!(store.income(), 1500.0);
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.selected_currency_symbol(), "£");
        assert_eq!(store.compute_summary().projected_savings, 1700.0);
    }

    #[test]
    fn test_current_month_in_range() {
        assert!(current_month() <= 11);
    }
}
