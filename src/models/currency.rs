//! Currency catalog entries
//!
//! Currencies only affect how amounts are displayed; nothing is converted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable display currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO code, e.g. `USD`
    pub code: String,
    /// Display symbol, e.g. `$`
    pub symbol: String,
    /// Human-readable name
    pub name: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.code, self.symbol, self.name)
    }
}
