//! Display formatting for terminal output
//!
//! Pure functions from state to text. Nothing here touches storage.

pub mod currency;
pub mod summary;
pub mod transaction;

pub use currency::format_catalog;
pub use summary::{format_income_line, format_rollover, format_summary};
pub use transaction::{format_transaction_list, format_transaction_row};

use crate::models::Notification;

/// Render a notification as a single plain-text line
pub fn format_notification(notification: &Notification) -> String {
    format!("[{}] {}", notification.kind.label(), notification.message)
}
