//! Dialog windows drawn over the main view

pub mod confirm;
pub mod currency;
pub mod help;
pub mod income;
pub mod rollover;
pub mod transaction;
