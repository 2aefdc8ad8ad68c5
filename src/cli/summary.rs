use chrono::{Duration, NaiveDate};

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::models::{EloDay, EloHistory};
use crate::storage;

/// Show a summary for one date or the most recent days
pub fn run(config: &Config, date: Option<NaiveDate>, days: u32) -> Result<()> {
    let history = storage::load(&config.data_file())?;
    let selected = select(&history, date, days, super::today());

    println!("{}", display::render_days(&selected));
    Ok(())
}

/// Days to summarize: only `date` when given, else the `days`-day window ending `today`
fn select(
    history: &EloHistory,
    date: Option<NaiveDate>,
    days: u32,
    today: NaiveDate,
) -> Vec<&EloDay> {
    if let Some(date) = date {
        return history.get(date).into_iter().collect();
    }

    let span = i64::from(days.max(1)) - 1;
    let cutoff = today
        .checked_sub_signed(Duration::days(span))
        .unwrap_or(NaiveDate::MIN);
    history
        .sorted_days()
        .into_iter()
        .filter(|day| day.date >= cutoff && day.date <= today)
        .collect()
}
