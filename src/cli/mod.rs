//! Command handlers
//!
//! One handler per subcommand; argument parsing lives in main.rs:
//! - record: Append an Elo value to a day
//! - summary: Show one day or the most recent days
//! - history: Show every recorded day
//! - reset: Delete all history after confirmation

pub mod history;
pub mod record;
pub mod reset;
pub mod summary;

use chrono::{Local, NaiveDate};

/// Today's date in local time
fn today() -> NaiveDate {
    Local::now().date_naive()
}
