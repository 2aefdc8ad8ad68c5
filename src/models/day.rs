use chrono::NaiveDate;

/// Elo progression for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EloDay {
    /// Day these sets were played on
    pub date: NaiveDate,
    /// Elo after each set, in recording order
    pub sets: Vec<i64>,
}

impl EloDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sets: Vec::new(),
        }
    }

    pub fn with_sets(date: NaiveDate, sets: Vec<i64>) -> Self {
        Self { date, sets }
    }

    /// Append a set and return its 1-based position within the day
    pub fn record(&mut self, elo: i64) -> usize {
        self.sets.push(elo);
        self.sets.len()
    }

    pub fn start(&self) -> Option<i64> {
        self.sets.first().copied()
    }

    pub fn end(&self) -> Option<i64> {
        self.sets.last().copied()
    }

    /// Difference between the last and first set of the day
    pub fn change(&self) -> Option<i64> {
        Some(self.end()?.saturating_sub(self.start()?))
    }

    pub fn best(&self) -> Option<i64> {
        self.sets.iter().max().copied()
    }

    pub fn worst(&self) -> Option<i64> {
        self.sets.iter().min().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_empty_day_has_no_stats() {
        let d = EloDay::new(day());
        assert_eq!(d.start(), None);
        assert_eq!(d.end(), None);
        assert_eq!(d.change(), None);
        assert_eq!(d.best(), None);
        assert_eq!(d.worst(), None);
    }

    #[test]
    fn test_three_sets() {
        let mut d = EloDay::new(day());
        assert_eq!(d.record(1500), 1);
        assert_eq!(d.record(1550), 2);
        assert_eq!(d.record(1490), 3);

        assert_eq!(d.start(), Some(1500));
        assert_eq!(d.end(), Some(1490));
        assert_eq!(d.change(), Some(-10));
        assert_eq!(d.best(), Some(1550));
        assert_eq!(d.worst(), Some(1490));
    }

    #[test]
    fn test_single_set() {
        let d = EloDay::with_sets(day(), vec![2000]);
        assert_eq!(d.start(), Some(2000));
        assert_eq!(d.end(), Some(2000));
        assert_eq!(d.change(), Some(0));
        assert_eq!(d.best(), Some(2000));
        assert_eq!(d.worst(), Some(2000));
    }

    #[test]
    fn test_sets_keep_order_and_duplicates() {
        let mut d = EloDay::new(day());
        for elo in [1600, 1500, 1600, 1550] {
            d.record(elo);
        }
        assert_eq!(d.sets, vec![1600, 1500, 1600, 1550]);
        assert_eq!(d.change(), Some(-50));
    }

    #[test]
    fn test_stats_over_varied_sequences() {
        let cases: &[&[i64]] = &[&[1], &[3, 1, 2], &[-5, 10], &[7, 7, 7], &[100, 0, 250, 90]];
        for sets in cases {
            let d = EloDay::with_sets(day(), sets.to_vec());
            let first = sets[0];
            let last = sets[sets.len() - 1];
            assert_eq!(d.change(), Some(last - first));
            assert_eq!(d.best(), sets.iter().max().copied());
            assert_eq!(d.worst(), sets.iter().min().copied());
        }
    }
}
