//! Terminal display module
//!
//! Turns Elo days into table rows and renders them as plain text.

mod table;

pub use table::render_table;

use crate::models::date::format_date;
use crate::models::EloDay;

/// Column headers for day tables
pub const DAY_HEADERS: [&str; 7] = ["Date", "Sets", "Start", "End", "Δ Elo", "Peak", "Low"];

/// Shown instead of a table when no day matches
pub const NO_DATA_MESSAGE: &str = "No Elo data recorded yet. Use the 'record' command to add a set.";

/// Format an optional value, `-` when missing
pub fn format_optional(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Format a change with an explicit `+` for zero and gains
pub fn format_change(change: Option<i64>) -> String {
    match change {
        Some(c) if c >= 0 => format!("+{}", c),
        Some(c) => c.to_string(),
        None => "-".to_string(),
    }
}

/// Table cells for one day
pub fn day_row(day: &EloDay) -> Vec<String> {
    vec![
        format_date(day.date),
        day.sets.len().to_string(),
        format_optional(day.start()),
        format_optional(day.end()),
        format_change(day.change()),
        format_optional(day.best()),
        format_optional(day.worst()),
    ]
}

/// Render days as a table, or the no-data message when there are none
pub fn render_days(days: &[&EloDay]) -> String {
    if days.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    let rows: Vec<Vec<String>> = days.iter().map(|d| day_row(d)).collect();
    render_table(&DAY_HEADERS, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_format_change_signs() {
        assert_eq!(format_change(Some(25)), "+25");
        assert_eq!(format_change(Some(0)), "+0");
        assert_eq!(format_change(Some(-10)), "-10");
        assert_eq!(format_change(None), "-");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(1500)), "1500");
        assert_eq!(format_optional(Some(-3)), "-3");
        assert_eq!(format_optional(None), "-");
    }

    #[test]
    fn test_day_row() {
        let day = EloDay::with_sets(date(), vec![1500, 1550, 1490]);
        assert_eq!(
            day_row(&day),
            vec!["2024-01-10", "3", "1500", "1490", "-10", "1550", "1490"]
        );
    }

    #[test]
    fn test_day_row_empty_sets() {
        let day = EloDay::new(date());
        assert_eq!(day_row(&day), vec!["2024-01-10", "0", "-", "-", "-", "-", "-"]);
    }

    #[test]
    fn test_render_days_no_data() {
        assert_eq!(render_days(&[]), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_render_days_table() {
        let day = EloDay::with_sets(date(), vec![1500, 1550, 1490]);
        let output = render_days(&[&day]);
        let expected = "Date       | Sets | Start | End  | Δ Elo | Peak | Low \n\
                        -----------+------+-------+------+-------+------+-----\n\
                        2024-01-10 | 3    | 1500  | 1490 | -10   | 1550 | 1490";
        assert_eq!(output, expected);
    }
}
