use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::models::{EloDay, EloHistory};
use crate::storage;

/// Show all recorded Elo history
pub fn run(config: &Config, limit: Option<u32>) -> Result<()> {
    let history = storage::load(&config.data_file())?;
    let selected = select(&history, limit.map(|l| l as usize));

    println!("{}", display::render_days(&selected));
    Ok(())
}

/// All days ascending, keeping only the last `limit` when given
fn select(history: &EloHistory, limit: Option<usize>) -> Vec<&EloDay> {
    let days = history.sorted_days();
    match limit {
        Some(limit) => {
            let skip = days.len().saturating_sub(limit);
            days[skip..].to_vec()
        }
        None => days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn five_days() -> EloHistory {
        let mut history = EloHistory::new();
        for d in [3, 1, 5, 2, 4] {
            history.day_mut(date(d)).record(1500);
        }
        history
    }

    #[test]
    fn test_no_limit_returns_all_ascending() {
        let history = five_days();
        let dates: Vec<_> = select(&history, None).iter().map(|d| d.date).collect();
        assert_eq!(dates, (1..=5).map(date).collect::<Vec<_>>());
    }

    #[test]
    fn test_limit_keeps_latest() {
        let history = five_days();
        let dates: Vec<_> = select(&history, Some(2)).iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(4), date(5)]);
    }

    #[test]
    fn test_limit_larger_than_history() {
        let history = five_days();
        assert_eq!(select(&history, Some(50)).len(), 5);
    }

    #[test]
    fn test_empty_history() {
        assert!(select(&EloHistory::new(), Some(3)).is_empty());
    }
}
