use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::day::EloDay;

/// Full Elo history, keyed by calendar day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EloHistory {
    days: BTreeMap<NaiveDate, EloDay>,
}

impl EloHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `date`, inserting an empty one if needed
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut EloDay {
        self.days.entry(date).or_insert_with(|| EloDay::new(date))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&EloDay> {
        self.days.get(&date)
    }

    /// Insert a complete day, returning the record it replaced
    pub fn insert(&mut self, day: EloDay) -> Option<EloDay> {
        self.days.insert(day.date, day)
    }

    /// All days, ascending by date
    pub fn sorted_days(&self) -> Vec<&EloDay> {
        self.days.values().collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
