//! Monetary amounts
//!
//! Amounts are plain `f64` values. Sums are carried at full precision and
//! only rounded to two fraction digits when formatted for display.

use std::fmt;

/// Round to whole cents for display, folding negative zero into zero
pub fn round_cents(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    if !scaled.is_finite() {
        // Too large to carry a fractional part
        return amount;
    }

    let rounded = scaled.round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format an amount with a currency symbol, e.g. `₹950.00` or `-$12.50`
pub fn format_money(symbol: &str, amount: f64) -> String {
    let rounded = round_cents(amount);
    if rounded < 0.0 {
        format!("-{}{:.2}", symbol, -rounded)
    } else {
        format!("{}{:.2}", symbol, rounded)
    }
}

/// Format an amount with an explicit direction sign, e.g. `+€10.00`
pub fn format_signed_amount(symbol: &str, amount: f64) -> String {
    let rounded = round_cents(amount);
    if amount < 0.0 && rounded != 0.0 {
        format!("-{}{:.2}", symbol, -rounded)
    } else {
        format!("+{}{:.2}", symbol, rounded.abs())
    }
}

/// Parse a decimal amount typed by the user
///
/// Finiteness is not checked here; the budget store rejects `NaN` and
/// infinities so that the same rule applies to every caller.
pub fn parse_amount(input: &str) -> Result<f64, MoneyParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))
}

/// Error parsing an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount cannot be empty"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("₹", 950.0), "₹950.00");
        assert_eq!(format_money("$", -12.5), "-$12.50");
        assert_eq!(format_money("€", 0.1 + 0.2), "€0.30");
    }

    #[test]
    fn test_negative_zero_formats_as_zero() {
        assert_eq!(format_money("$", -0.0), "$0.00");
        assert_eq!(format_money("$", -0.001), "$0.00");
        assert_eq!(format_signed_amount("$", -0.001), "+$0.00");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount("£", 10.0), "+£10.00");
        assert_eq!(format_signed_amount("£", -5.25), "-£5.25");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50"), Ok(10.5));
        assert_eq!(parse_amount(" -50 "), Ok(-50.0));
        assert_eq!(parse_amount(""), Err(MoneyParseError::Empty));
        assert!(matches!(
            parse_amount("ten"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_amount_passes_nan_through() {
        assert!(parse_amount("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_huge_amount_stays_finite() {
        assert_eq!(round_cents(1e307), 1e307);
        let text = format_money("$", 1e307);
        assert!(text.starts_with("$1"));
        assert!(!text.contains("inf"));
        assert!(format_signed_amount("$", -1e307).starts_with("-$1"));
    }
}
