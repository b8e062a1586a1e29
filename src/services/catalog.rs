//! Currency catalog loader
//!
//! The catalog is fetched once per session, from a local JSON file or an
//! http(s) URL. Any failure substitutes a fixed five-currency list and is
//! reported as a warning; it never stops the tracker from starting.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Currency;
use crate::storage::file_io::write_json_atomic;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the catalog is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a configured source string
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Result of a catalog fetch, fallback already applied
#[derive(Debug)]
pub struct CatalogLoad {
    pub currencies: Vec<Currency>,
    /// Set when the fallback list had to be used
    pub warning: Option<BudgetError>,
}

impl CatalogLoad {
    pub fn used_fallback(&self) -> bool {
        self.warning.is_some()
    }

    /// Look up a currency by its symbol
    pub fn find_symbol(&self, symbol: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.symbol == symbol)
    }
}

/// The built-in list used when the catalog cannot be loaded
pub fn fallback_catalog() -> Vec<Currency> {
    vec![
        Currency::new("USD", "$", "US Dollar"),
        Currency::new("EUR", "€", "Euro"),
        Currency::new("GBP", "£", "British Pound"),
        Currency::new("JPY", "¥", "Japanese Yen"),
        Currency::new("INR", "₹", "Indian Rupee"),
    ]
}

/// Catalog written by `init` so the default source resolves
pub fn default_catalog() -> Vec<Currency> {
    let mut currencies = fallback_catalog();
    currencies.extend([
        Currency::new("AUD", "A$", "Australian Dollar"),
        Currency::new("CAD", "C$", "Canadian Dollar"),
        Currency::new("CHF", "CHF", "Swiss Franc"),
        Currency::new("CNY", "CN¥", "Chinese Yuan"),
        Currency::new("KRW", "₩", "South Korean Won"),
        Currency::new("NGN", "₦", "Nigerian Naira"),
        Currency::new("BRL", "R$", "Brazilian Real"),
        Currency::new("PHP", "₱", "Philippine Peso"),
        Currency::new("ZAR", "R", "South African Rand"),
    ]);
    currencies
}

/// Write the default catalog to `path`
pub fn write_default_catalog(path: &Path) -> BudgetResult<()> {
    write_json_atomic(path, &default_catalog())
}

/// Fetch the catalog, failing on any I/O, status or parse problem
pub fn load_catalog(source: &CatalogSource) -> BudgetResult<Vec<Currency>> {
    let currencies = match source {
        CatalogSource::File(path) => read_file(path)?,
        CatalogSource::Url(url) => fetch_url(url)?,
    };

    if currencies.is_empty() {
        return Err(BudgetError::CatalogLoad(format!(
            "{} contains no currencies",
            source
        )));
    }

    debug!(source = %source, count = currencies.len(), "Loaded currency catalog");
    Ok(currencies)
}

/// Fetch the catalog, substituting the fallback list on failure
pub fn load_catalog_or_fallback(source: &CatalogSource) -> CatalogLoad {
    match load_catalog(source) {
        Ok(currencies) => CatalogLoad {
            currencies,
            warning: None,
        },
        Err(e) => {
            warn!(source = %source, error = %e, "Using fallback currency list");
            CatalogLoad {
                currencies: fallback_catalog(),
                warning: Some(e),
            }
        }
    }
}

/// Fetch the catalog on a background thread
///
/// The receiver yields exactly one `CatalogLoad`.
pub fn spawn_catalog_fetch(source: CatalogSource) -> mpsc::Receiver<CatalogLoad> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // Receiver may be gone if the session already ended
        let _ = sender.send(load_catalog_or_fallback(&source));
    });
    receiver
}

fn read_file(path: &Path) -> BudgetResult<Vec<Currency>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BudgetError::CatalogLoad(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        BudgetError::CatalogLoad(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn fetch_url(url: &str) -> BudgetResult<Vec<Currency>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| BudgetError::CatalogLoad(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| BudgetError::CatalogLoad(format!("Request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(BudgetError::CatalogLoad(format!(
            "Catalog request returned status {}",
            status.as_u16()
        )));
    }

    response
        .json::<Vec<Currency>>()
        .map_err(|e| BudgetError::CatalogLoad(format!("Invalid catalog from {}: {}", url, e)))
}
