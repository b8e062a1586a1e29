//! Core data models for Pocket Budget
//!
//! This module contains the data structures that represent the tracker:
//! transactions, the persisted budget state, derived summaries, the
//! currency catalog entries and user-facing notifications.

pub mod currency;
pub mod money;
pub mod notification;
pub mod state;
pub mod summary;
pub mod transaction;

pub use currency::Currency;
pub use money::{format_money, format_signed_amount, parse_amount, round_cents};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use state::{BudgetState, DEFAULT_CURRENCY_SYMBOL};
pub use summary::{MonthlyRollover, Summary};
pub use transaction::{format_date, is_valid_date_format, parse_date, Transaction, TransactionKind, TransactionValidationError};
