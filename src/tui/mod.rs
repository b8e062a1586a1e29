//! Terminal User Interface module
//!
//! An interactive single-screen view of the tracker built on ratatui:
//! income header, transaction register, summary panel and dialogs for
//! every operation.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

pub mod dialogs;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
