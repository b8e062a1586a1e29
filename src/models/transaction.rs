//! Transaction model
//!
//! A transaction is one recorded monetary event. The sign of the amount
//! encodes its direction: zero or positive is income-like, negative is an
//! expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Date format accepted for transaction input and used on disk
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a transaction, derived from the sign of its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// What the money was for (never empty)
    pub description: String,

    /// Signed amount (negative for expenses)
    pub amount: f64,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction from already-validated parts
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    /// Build a transaction from raw user input
    ///
    /// The description is trimmed and the date must be `YYYY-MM-DD`.
    pub fn from_input(
        description: &str,
        amount: f64,
        date: &str,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self::new(description.trim(), amount, parse_date(date)?);
        txn.validate()?;
        Ok(txn)
    }

    /// Check the transaction invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }

        Ok(())
    }

    /// Direction of this transaction
    pub fn kind(&self) -> TransactionKind {
        if self.amount >= 0.0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }
}

/// Whether `format` renders a calendar date without error
///
/// Time fields and unknown specifiers fail for a date-only value.
pub fn is_valid_date_format(format: &str) -> bool {
    let probe_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    let mut rendered = String::new();
    write!(rendered, "{}", probe_date.format(format)).is_ok()
}

/// Format a date, using `YYYY-MM-DD` if `format` cannot render it
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(format)).is_ok() {
        rendered
    } else {
        date.format(INPUT_DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, TransactionValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
        .map_err(|_| TransactionValidationError::InvalidDate(input.to_string()))
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonFiniteAmount,
    InvalidDate(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::InvalidDate(raw) => {
                write!(f, "'{}' is not a valid date (expected YYYY-MM-DD)", raw)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_input_trims_description() {
        let txn = Transaction::from_input("  Groceries ", -50.0, "2024-01-05").unwrap();
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, -50.0);
        assert_eq!(txn.date, date(2024, 1, 5));
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(
            Transaction::from_input("   ", 10.0, "2024-01-05"),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert_eq!(
            Transaction::from_input("Rent", f64::NAN, "2024-01-05"),
            Err(TransactionValidationError::NonFiniteAmount)
        );
        assert_eq!(
            Transaction::from_input("Rent", f64::INFINITY, "2024-01-05"),
            Err(TransactionValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(matches!(
            Transaction::from_input("Rent", 1.0, "2024-02-30"),
            Err(TransactionValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            Transaction::from_input("Rent", 1.0, ""),
            Err(TransactionValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            Transaction::from_input("Rent", 1.0, "05/01/2024"),
            Err(TransactionValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_kind_from_sign() {
        assert_eq!(
            Transaction::new("Salary", 0.0, date(2024, 1, 1)).kind(),
            TransactionKind::Income
        );
        assert!(Transaction::new("Coffee", -3.5, date(2024, 1, 1)).is_expense());
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::new("Coffee", -3.5, date(2024, 1, 5));
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"description":"Coffee","amount":-3.5,"date":"2024-01-05"}"#
        );
    }

    #[test]
    fn test_format_date_with_time_specifier_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(format_date(date, "%H:%M"), "2024-05-10");
        assert_eq!(format_date(date, "%Q"), "2024-05-10");
        assert_eq!(format_date(date, "%d/%m/%Y"), "10/05/2024");
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format("%b %-d, %Y"));
        assert!(!is_valid_date_format("%H:%M"));
        assert!(!is_valid_date_format("%Q"));
    }
}
