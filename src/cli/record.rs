use chrono::NaiveDate;

use crate::config::Config;
use crate::error::Result;
use crate::models::date::format_date;
use crate::storage;

/// Record the Elo after a set
pub fn run(config: &Config, elo: i64, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(super::today);
    let position = record(config, elo, date)?;

    println!(
        "Recorded set #{} for {} with Elo {}.",
        position,
        format_date(date),
        elo
    );

    Ok(())
}

/// Append `elo` to `date` and persist; returns the set's 1-based position
fn record(config: &Config, elo: i64, date: NaiveDate) -> Result<usize> {
    let path = config.data_file();
    let mut history = storage::load(&path)?;

    let position = history.day_mut(date).record(elo);
    storage::save(&history, &path)?;

    log::info!("Recorded Elo {} as set #{} on {}", elo, position, date);
    Ok(position)
}
