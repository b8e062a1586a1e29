//! Application state for the TUI
//!
//! The App struct owns the budget store for the session and holds
//! everything needed for rendering and handling events.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crate::config::settings::Settings;
use crate::models::{parse_amount, MonthlyRollover, Notification, NotificationQueue};
use crate::services::budget::{current_month, BudgetStore};
use crate::services::catalog::CatalogLoad;
use crate::storage::kv::KeyValueStore;

use super::dialogs::transaction::TransactionFormState;
use super::widgets::TextInput;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    SetIncome,
    AddTransaction,
    CurrencyPicker,
    ConfirmClear,
    Rollover(MonthlyRollover),
    Help,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The budget store
    pub store: BudgetStore<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the register
    pub selected_index: usize,

    /// Pending notifications
    pub notifications: NotificationQueue,

    /// Loaded currency catalog, `None` while the fetch is in flight
    pub catalog: Option<CatalogLoad>,

    /// Selected row in the currency picker
    pub currency_index: usize,

    /// Income dialog input
    pub income_input: TextInput,

    /// Add-transaction dialog state
    pub transaction_form: TransactionFormState,

    catalog_receiver: Option<Receiver<CatalogLoad>>,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App instance
    ///
    /// `catalog_receiver` delivers the currency catalog once its fetch
    /// finishes; until then the currency picker shows a loading message.
    pub fn new(
        store: BudgetStore<S>,
        settings: &'a Settings,
        catalog_receiver: Option<Receiver<CatalogLoad>>,
    ) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
            catalog: None,
            currency_index: 0,
            income_input: TextInput::new().label("Income").placeholder("e.g. 2500.00"),
            transaction_form: TransactionFormState::new(),
            catalog_receiver,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a notification using the configured timings
    pub fn notify(&mut self, notification: Notification) {
        let notification = notification.with_timing(
            Duration::from_secs(self.settings.notification_secs),
            Duration::from_millis(self.settings.fade_millis),
        );
        self.notifications.push(notification);
    }

    /// Periodic housekeeping: expire notifications, pick up the catalog
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
        self.poll_catalog();
    }

    /// Take the catalog from the background fetch if it has arrived
    pub fn poll_catalog(&mut self) {
        let Some(receiver) = &self.catalog_receiver else {
            return;
        };

        match receiver.try_recv() {
            Ok(load) => {
                self.catalog_receiver = None;
                self.install_catalog(load);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.catalog_receiver = None;
            }
        }
    }

    /// Install a loaded catalog, reporting a fallback as a warning
    pub fn install_catalog(&mut self, load: CatalogLoad) {
        if load.used_fallback() {
            self.notify(Notification::warning(
                "Error loading currency list. Using defaults.",
            ));
        }
        self.catalog = Some(load);
        self.sync_currency_index();
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::SetIncome => self.income_input.clear(),
            ActiveDialog::AddTransaction => self.transaction_form.reset(),
            ActiveDialog::CurrencyPicker => self.sync_currency_index(),
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.store.transactions().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keep the register selection inside the list
    pub fn clamp_selection(&mut self) {
        let len = self.store.transactions().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Run the monthly rollover check, opening a notice dialog if needed
    pub fn check_monthly_reset(&mut self, month: u32) {
        match self.store.check_monthly_reset(month) {
            Ok(Some(rollover)) => {
                self.clamp_selection();
                self.notify(Notification::info(
                    "New month! Transactions have been cleared.",
                ));
                self.active_dialog = ActiveDialog::Rollover(rollover);
            }
            Ok(None) => {}
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Apply the income dialog
    pub fn submit_income(&mut self) {
        let result = parse_amount(self.income_input.value())
            .map_err(|e| e.to_string())
            .and_then(|value| self.store.set_income(value).map_err(|e| e.to_string()));

        match result {
            Ok(_) => {
                self.income_input.clear();
                self.close_dialog();
                self.notify(Notification::success("Income updated successfully!"));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected income input");
                self.notify(Notification::error(
                    "Please enter a valid income amount.",
                ));
            }
        }
    }

    /// Apply the add-transaction dialog
    pub fn submit_transaction(&mut self) {
        let form = &self.transaction_form;
        let result = parse_amount(form.amount.value())
            .map_err(|e| e.to_string())
            .and_then(|amount| {
                self.store
                    .add_transaction(form.description.value(), amount, form.date.value())
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(index) => {
                self.selected_index = index;
                self.transaction_form.reset();
                self.close_dialog();
                self.notify(Notification::success("Transaction added!"));
            }
            Err(e) => {
                self.transaction_form.error_message = Some(e);
                self.notify(Notification::error(
                    "Please fill out all transaction details correctly.",
                ));
            }
        }
    }

    /// Delete the selected transaction
    pub fn delete_selected(&mut self) {
        match self.store.delete_transaction(self.selected_index) {
            Ok(_) => {
                self.clamp_selection();
                self.notify(Notification::info("Transaction deleted."));
            }
            Err(_) => self.notify(Notification::error("Error deleting transaction.")),
        }
    }

    /// Apply the currency highlighted in the picker
    pub fn apply_selected_currency(&mut self) {
        let Some(symbol) = self
            .catalog
            .as_ref()
            .and_then(|c| c.currencies.get(self.currency_index))
            .map(|c| c.symbol.clone())
        else {
            return;
        };

        match self.store.set_selected_currency(&symbol) {
            Ok(_) => {
                self.close_dialog();
                self.notify(Notification::success(format!("Currency set to {}", symbol)));
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    pub fn currency_up(&mut self) {
        self.currency_index = self.currency_index.saturating_sub(1);
    }

    pub fn currency_down(&mut self) {
        let len = self.catalog.as_ref().map_or(0, |c| c.currencies.len());
        if self.currency_index + 1 < len {
            self.currency_index += 1;
        }
    }

    /// Wipe all data after the user confirmed
    pub fn confirm_clear(&mut self) {
        self.close_dialog();
        match self.store.clear_all_data(current_month()) {
            Ok(()) => {
                self.selected_index = 0;
                self.sync_currency_index();
                self.notify(Notification::warning("All data cleared!"));
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    fn sync_currency_index(&mut self) {
        let symbol = self.store.selected_currency_symbol();
        if let Some(position) = self
            .catalog
            .as_ref()
            .and_then(|c| c.currencies.iter().position(|cur| cur.symbol == symbol))
        {
            self.currency_index = position;
        }
    }
}
