//! ISO calendar date conversion shared by the CLI, storage and display.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// Only the canonical zero-padded form is accepted, so every date has
/// exactly one spelling.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let invalid = || "Dates must be supplied in ISO format (YYYY-MM-DD).".to_string();

    let date = NaiveDate::parse_from_str(value, ISO_FORMAT).map_err(|_| invalid())?;
    if format_date(date) != value {
        return Err(invalid());
    }
    Ok(date)
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
