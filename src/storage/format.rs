//! On-disk JSON shape of the history file.
//!
//! ```json
//! { "2024-01-10": { "sets": [1500, 1550, 1490] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EloError, Result};
use crate::models::date::{format_date, parse_date};
use crate::models::{EloDay, EloHistory};

/// Persisted form of a single day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredDay {
    #[serde(default)]
    pub sets: Vec<i64>,
}

/// Persisted form of the whole history, keyed by ISO date string
pub type StoredHistory = BTreeMap<String, StoredDay>;

/// Convert the persisted form into the in-memory history
pub fn from_stored(stored: StoredHistory) -> Result<EloHistory> {
    let mut history = EloHistory::new();
    for (key, day) in stored {
        let date = parse_date(&key)
            .map_err(|e| EloError::History(format!("Invalid day key '{}': {}", key, e)))?;
        if history.insert(EloDay::with_sets(date, day.sets)).is_some() {
            return Err(EloError::History(format!("Duplicate day key '{}'", key)));
        }
    }
    Ok(history)
}

/// Convert the in-memory history into its persisted form
pub fn to_stored(history: &EloHistory) -> StoredHistory {
    history
        .sorted_days()
        .into_iter()
        .map(|day| {
            (
                format_date(day.date),
                StoredDay {
                    sets: day.sets.clone(),
                },
            )
        })
        .collect()
}
