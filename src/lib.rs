//! Pocket Budget - monthly budget tracker for the terminal
//!
//! This library provides the core of the Pocket Budget application: a
//! monthly income figure, a register of signed transactions, a projected
//! savings summary and an automatic reset of the register when a new
//! calendar month begins.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, summaries, currencies, notifications)
//! - `storage`: Key/value persistence and the state mapping on top of it
//! - `services`: The budget store and the currency catalog loader
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Subcommand handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_budget::services::budget::BudgetStore;
//! use pocket_budget::storage::kv::MemoryStore;
//!
//! let mut store = BudgetStore::open(MemoryStore::new())?;
//! store.set_income(1000.0)?;
//! store.add_transaction("Groceries", -50.0, "2024-05-10")?;
//! assert_eq!(store.compute_summary().projected_savings, 950.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
