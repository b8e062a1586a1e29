//! Service layer for Pocket Budget
//!
//! The budget store enforces the state invariants on top of the storage
//! layer; the catalog loader supplies the selectable display currencies.

pub mod budget;
pub mod catalog;

pub use budget::{current_month, BudgetStore};
pub use catalog::{
    fallback_catalog, load_catalog, load_catalog_or_fallback, spawn_catalog_fetch, CatalogLoad,
    CatalogSource,
};
