//! Data models module
//!
//! Defines EloDay (one day's sets plus derived statistics), EloHistory
//! (all days keyed by date) and the shared ISO date conversion.

pub mod date;
pub mod day;
pub mod history;

pub use day::EloDay;
pub use history::EloHistory;
